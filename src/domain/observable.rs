use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::Notify;

type Listener<T> = Box<dyn Fn(&T) + Send>;

struct Slot<T> {
    value: T,
    listeners: Vec<Listener<T>>,
    set_count: usize,
}

struct Shared<T> {
    slot: Mutex<Slot<T>>,
    settled: Notify,
}

/// Single value slot that tells its listeners whenever it is set.
///
/// Every listener runs on every `set`, in registration order, while the slot
/// lock is held. Listeners must not call back into the same instance.
/// Clones share the slot.
pub struct ObservableResult<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for ObservableResult<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Clone> ObservableResult<T> {
    /// Create a slot holding `placeholder` until the first `set`
    pub fn new(placeholder: T) -> Self {
        Self {
            shared: Arc::new(Shared {
                slot: Mutex::new(Slot {
                    value: placeholder,
                    listeners: Vec::new(),
                    set_count: 0,
                }),
                settled: Notify::new(),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    pub fn is_set(&self) -> bool {
        self.lock().set_count > 0
    }

    pub fn set(&self, value: T) {
        {
            let mut slot = self.lock();
            slot.value = value;
            slot.set_count += 1;

            let slot = &*slot;
            for listener in &slot.listeners {
                listener(&slot.value);
            }
        }
        self.shared.settled.notify_waiters();
    }

    pub fn register_listener<F>(&self, listener: F)
    where
        F: Fn(&T) + Send + 'static,
    {
        self.lock().listeners.push(Box::new(listener));
    }

    pub fn on_change<F>(&self, listener: F)
    where
        F: Fn(&T) + Send + 'static,
    {
        self.register_listener(listener);
    }

    /// Wait for the first `set`, then return the current value
    pub async fn wait(&self) -> T {
        loop {
            let notified = self.shared.settled.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            {
                let slot = self.lock();
                if slot.set_count > 0 {
                    return slot.value.clone();
                }
            }

            notified.await;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        self.shared
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

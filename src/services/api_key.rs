use anyhow::{Result, bail};

use crate::config::{ConfigStore, obfuscate_key};
use crate::output::Chat;

/// The `set-api-key` command
pub struct ApiKeyService {
    store: ConfigStore,
    chat: Chat,
}

impl ApiKeyService {
    pub fn new(store: ConfigStore, chat: Chat) -> Self {
        Self { store, chat }
    }

    pub fn run(&mut self, key: &str) -> Result<()> {
        let key = key.trim();
        if key.is_empty() {
            bail!("API key must not be empty");
        }

        self.chat.info("Setting API key...");
        self.store.set_api_key(key);
        self.store.save()?;

        self.chat
            .small(&format!("API key set to {}", obfuscate_key(key)));
        Ok(())
    }
}

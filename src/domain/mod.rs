pub mod models;
mod observable;

pub use models::*;
pub use observable::ObservableResult;

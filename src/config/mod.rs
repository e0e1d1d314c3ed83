pub mod settings;
pub mod store;

pub use settings::{AppConfig, HttpSettings};
pub use store::{ConfigStore, obfuscate_key};

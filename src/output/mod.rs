mod chat;
pub mod codes;

pub use chat::Chat;
pub use codes::{colourify, strip_codes};

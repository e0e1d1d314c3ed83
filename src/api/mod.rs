pub mod hypixel;
pub mod mojang;
pub mod parsers;
mod source;

pub use hypixel::HypixelClient;
pub use mojang::{MojangClient, MojangProfile};
pub use source::{ApiDataSource, IdentityLookup, PlayerDataSource};

pub mod api_key;
pub mod resolver;
pub mod stats;

pub use resolver::StatsResolver;

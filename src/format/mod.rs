pub mod colors;
pub mod rank;
pub mod ratio;
pub mod report;

pub use colors::{ColorTier, RatioKind, colorize};
pub use rank::format_rank;
pub use ratio::{coerce_nan, ratio};
pub use report::stats_lines;

pub mod player;

pub use player::shape_record;

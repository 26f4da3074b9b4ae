pub mod rng;
pub mod vector2d;

pub use rng::{random_float, random_int, RandomSource, Rng};
pub use vector2d::Vector2D;

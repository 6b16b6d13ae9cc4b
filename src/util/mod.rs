pub mod coord;
pub mod error;
pub mod rounding;

pub use coord::Coordinate;
pub use error::{Axis, DigipinError};
pub use rounding::round_half_up;

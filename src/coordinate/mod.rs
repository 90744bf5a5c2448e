//! Coordinate geometry for point layers
//!
//! This module provides points, the point-like capability and
//! line measurements derived from point pairs.

mod angle;
mod line;
mod point;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::angle::to_degrees;
pub use self::line::Line;
pub use self::point::{Point, PointLike};

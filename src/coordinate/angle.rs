//! Angle helpers

use std::f64::consts::PI;

/// Convert an angle in radians to degrees
pub fn to_degrees(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Shift a negative angle up by half a turn
pub(crate) fn lift_negative(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + PI
    } else {
        angle
    }
}

//! Line measurements between two points

use std::f64::consts::{FRAC_PI_2, PI};

use super::angle::lift_negative;
use super::point::{require_point, Point, PointLike};
use crate::errors::{LayerError, LayerResult};

/// A line defined by an ordered pair of points
///
/// All measurements are derived from `point2 - point1` on request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point1: Point,
    point2: Point,
}

impl Line {
    /// Create a line from two point-like values
    ///
    /// # Errors
    /// `LayerError::NotAPoint` if either endpoint has no numeric coordinates
    pub fn new<A: PointLike, B: PointLike>(point1: A, point2: B) -> LayerResult<Self> {
        Ok(Line {
            point1: require_point(&point1)?,
            point2: require_point(&point2)?,
        })
    }

    /// First endpoint
    pub fn point1(&self) -> Point {
        self.point1
    }

    /// Second endpoint
    pub fn point2(&self) -> Point {
        self.point2
    }

    fn delta(&self) -> Point {
        Point::new(self.point2.x - self.point1.x, self.point2.y - self.point1.y)
    }

    /// Horizontal extent, `point2.x - point1.x`
    pub fn delta_x(&self) -> f64 {
        self.delta().x
    }

    /// Vertical extent, `point2.y - point1.y`
    pub fn delta_y(&self) -> f64 {
        self.delta().y
    }

    /// Whether both endpoints coincide
    pub fn is_degenerate(&self) -> bool {
        let delta = self.delta();
        delta.x == 0.0 && delta.y == 0.0
    }

    /// Rise over run
    ///
    /// # Errors
    /// `LayerError::UndefinedSlope` when the line has no horizontal extent
    pub fn slope(&self) -> LayerResult<f64> {
        let delta = self.delta();
        if delta.x == 0.0 {
            return Err(LayerError::UndefinedSlope);
        }
        Ok(delta.y / delta.x)
    }

    /// Angle from the horizontal axis in radians, within [0, π)
    ///
    /// A line and its reverse give the same result.
    pub fn angle_to_horizontal(&self) -> f64 {
        let delta = self.delta();
        let angle = lift_negative(delta.y.atan2(delta.x));
        // atan2(+0, -x) is exactly π
        if angle >= PI {
            angle - PI
        } else {
            angle
        }
    }

    /// Angle from the vertical axis in radians
    ///
    /// Negative raw angles are lifted by π, so a line leaning left of the
    /// vertical reads as more than π/2 instead of a negative angle. Lines
    /// pointing into the third quadrant keep their raw value above π
    /// (e.g. (-1,-1) to (-2,-2) is 5π/4).
    pub fn angle_to_vertical(&self) -> f64 {
        let delta = self.delta();
        lift_negative(FRAC_PI_2 - delta.y.atan2(delta.x))
    }
}

//! Point structure and the point-like capability

use std::any::type_name;
use std::collections::HashMap;

use crate::errors::{LayerError, LayerResult};

/// Anything that exposes numeric x and y coordinates
///
/// Values do not have to be a [`Point`] to take part in point arithmetic or
/// line construction, they only have to provide both coordinates.
pub trait PointLike {
    /// The (x, y) pair, or `None` if this value has no coordinates
    fn coordinates(&self) -> Option<(f64, f64)>;

    /// Check whether this value exposes numeric x and y
    fn is_point_like(&self) -> bool {
        matches!(self.coordinates(), Some((x, y)) if !x.is_nan() && !y.is_nan())
    }
}

/// Convert a point-like value into a concrete point
pub(crate) fn require_point<P: PointLike + ?Sized>(value: &P) -> LayerResult<Point> {
    match value.coordinates() {
        Some((x, y)) if value.is_point_like() => Ok(Point::new(x, y)),
        _ => Err(LayerError::NotAPoint(type_name::<P>().to_string())),
    }
}

/// A point in a 2D plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Component-wise sum with another point-like value
    ///
    /// # Errors
    /// `LayerError::NotAPoint` if `other` has no numeric coordinates
    pub fn add<P: PointLike + ?Sized>(&self, other: &P) -> LayerResult<Point> {
        let other = require_point(other)?;
        Ok(Point::new(self.x + other.x, self.y + other.y))
    }

    /// Component-wise difference with another point-like value
    ///
    /// # Errors
    /// `LayerError::NotAPoint` if `other` has no numeric coordinates
    pub fn subtract<P: PointLike + ?Sized>(&self, other: &P) -> LayerResult<Point> {
        let other = require_point(other)?;
        Ok(Point::new(self.x - other.x, self.y - other.y))
    }
}

impl PointLike for Point {
    fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.x, self.y))
    }
}

impl<T: PointLike + ?Sized> PointLike for &T {
    fn coordinates(&self) -> Option<(f64, f64)> {
        (**self).coordinates()
    }
}

impl PointLike for (f64, f64) {
    fn coordinates(&self) -> Option<(f64, f64)> {
        Some(*self)
    }
}

impl PointLike for [f64; 2] {
    fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self[0], self[1]))
    }
}

// Only a slice of exactly two values is a point
impl PointLike for [f64] {
    fn coordinates(&self) -> Option<(f64, f64)> {
        match self {
            [x, y] => Some((*x, *y)),
            _ => None,
        }
    }
}

/// Attribute rows, e.g. a feature's fields keyed by column name
impl PointLike for HashMap<String, String> {
    fn coordinates(&self) -> Option<(f64, f64)> {
        let x = self.get("x")?.trim().parse::<f64>().ok()?;
        let y = self.get("y")?.trim().parse::<f64>().ok()?;
        Some((x, y))
    }
}

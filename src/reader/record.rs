//! Decoded point pair records

use crate::coordinate::{Line, Point};
use crate::errors::LayerResult;

/// Two points sharing one group identifier
#[derive(Debug, Clone, PartialEq)]
pub struct PairRecord {
    /// Group identifier, lowercased
    pub group: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// 1-based line number of the first line of the pair
    pub source_line: usize,
}

impl PairRecord {
    /// The two endpoints in file order
    pub fn points(&self) -> (Point, Point) {
        (Point::new(self.x1, self.y1), Point::new(self.x2, self.y2))
    }

    /// Build the line running from the first point to the second
    pub fn line(&self) -> LayerResult<Line> {
        let (point1, point2) = self.points();
        Line::new(point1, point2)
    }
}

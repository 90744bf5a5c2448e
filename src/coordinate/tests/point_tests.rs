//! Tests for the point module

extern crate std;

use std::collections::HashMap;

use super::assert_close;
use crate::coordinate::{Point, PointLike};
use crate::errors::LayerError;

#[test]
fn test_new_point() {
    let point = Point::new(2.0, 1.0);
    std::assert_eq!(point.x, 2.0);
    std::assert_eq!(point.y, 1.0);
}

#[test]
fn test_addition() {
    let point = Point::new(1.0, 1.0).add(&Point::new(2.0, 2.0)).unwrap();
    std::assert_eq!(point, Point::new(3.0, 3.0));

    let point = Point::new(-1.0, 1.0).add(&Point::new(1.0, -10.0)).unwrap();
    std::assert_eq!(point, Point::new(0.0, -9.0));
}

#[test]
fn test_subtraction() {
    let point = Point::new(1.0, 1.0).subtract(&Point::new(2.0, 2.0)).unwrap();
    std::assert_eq!(point, Point::new(-1.0, -1.0));

    let point = Point::new(-1.0, 1.0).subtract(&Point::new(1.0, -10.0)).unwrap();
    std::assert_eq!(point, Point::new(-2.0, 11.0));
}

#[test]
fn test_add_then_subtract_restores_point() {
    let samples = [
        (Point::new(0.1, 0.2), Point::new(0.3, -7.5)),
        (Point::new(-1e6, 3.25), Point::new(1e-3, 42.0)),
        (Point::new(512.125, -0.5), Point::new(-512.125, 0.5)),
    ];

    for (p, q) in samples {
        let restored = p.add(&q).unwrap().subtract(&q).unwrap();
        assert_close(restored.x, p.x);
        assert_close(restored.y, p.y);
    }
}

#[test]
fn test_point_like_values_combine_with_points() {
    let origin = Point::new(1.0, 2.0);

    std::assert_eq!(origin.add(&(1.0_f64, 1.0_f64)).unwrap(), Point::new(2.0, 3.0));
    std::assert_eq!(origin.subtract(&[1.0_f64, 2.0]).unwrap(), Point::new(0.0, 0.0));

    let values: Vec<f64> = vec![4.0, 4.0];
    std::assert_eq!(origin.add(values.as_slice()).unwrap(), Point::new(5.0, 6.0));

    let mut row = HashMap::new();
    row.insert("x".to_string(), " 10 ".to_string());
    row.insert("y".to_string(), "-2.5".to_string());
    std::assert_eq!(origin.add(&row).unwrap(), Point::new(11.0, -0.5));
}

#[test]
fn test_add_rejects_values_without_coordinates() {
    let origin = Point::new(1.0, 1.0);

    let three = [1.0_f64, 2.0, 3.0];
    let result = origin.add(&three[..]);
    std::assert!(matches!(result, Err(LayerError::NotAPoint(_))));

    let mut row = HashMap::new();
    row.insert("x".to_string(), "1".to_string());
    let result = origin.subtract(&row);
    std::assert!(matches!(result, Err(LayerError::NotAPoint(_))));

    let result = origin.add(&(f64::NAN, 1.0_f64));
    std::assert!(matches!(result, Err(LayerError::NotAPoint(_))));
}

#[test]
fn test_is_point_like() {
    std::assert!(Point::new(0.0, 0.0).is_point_like());
    std::assert!((3.0_f64, 4.0_f64).is_point_like());
    std::assert!(!Point::new(f64::NAN, 0.0).is_point_like());

    let empty: &[f64] = &[];
    std::assert!(!empty.is_point_like());

    let mut row: HashMap<String, String> = HashMap::new();
    row.insert("x".to_string(), "1".to_string());
    row.insert("y".to_string(), "north".to_string());
    std::assert!(!row.is_point_like());
}

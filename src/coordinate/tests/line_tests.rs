//! Tests for the line module

extern crate std;

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI};

use super::assert_close;
use crate::coordinate::{to_degrees, Line, Point};
use crate::errors::LayerError;

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::new(Point::new(x1, y1), Point::new(x2, y2)).unwrap()
}

#[test]
fn test_to_degrees() {
    assert_close(to_degrees(FRAC_PI_2), 90.0);
    std::assert_eq!(to_degrees(0.0), 0.0);
}

#[test]
fn test_new_line() {
    let point1 = Point::new(1.0, 1.0);
    let point2 = Point::new(2.0, 2.0);
    let line = Line::new(point1, point2).unwrap();
    std::assert_eq!(line.point1(), point1);
    std::assert_eq!(line.point2(), point2);
}

#[test]
fn test_new_line_rejects_non_points() {
    let short: &[f64] = &[1.0];
    let result = Line::new(Point::new(0.0, 0.0), short);
    std::assert!(matches!(result, Err(LayerError::NotAPoint(_))));

    let result = Line::new((f64::NAN, 0.0_f64), Point::new(0.0, 0.0));
    std::assert!(matches!(result, Err(LayerError::NotAPoint(_))));
}

#[test]
fn test_deltas() {
    let l = line(1.0, 1.0, 2.0, 2.0);
    std::assert_eq!(l.delta_x(), 1.0);
    std::assert_eq!(l.delta_y(), 1.0);

    let l = line(-5.0, -2.0, -3.0, 0.0);
    std::assert_eq!(l.delta_x(), 2.0);
    std::assert_eq!(l.delta_y(), 2.0);
}

#[test]
fn test_slope() {
    std::assert_eq!(line(1.0, 1.0, 2.0, 2.0).slope().unwrap(), 1.0);
    std::assert_eq!(line(0.0, 0.0, 4.0, -2.0).slope().unwrap(), -0.5);
}

#[test]
fn test_slope_of_vertical_line_is_undefined() {
    let result = line(1.0, 1.0, 1.0, 2.0).slope();
    std::assert!(matches!(result, Err(LayerError::UndefinedSlope)));
}

#[test]
fn test_angle_to_horizontal() {
    assert_close(line(1.0, 1.0, 2.0, 2.0).angle_to_horizontal(), FRAC_PI_4);
    assert_close(line(1.0, 1.0, 1.0, 2.0).angle_to_horizontal(), FRAC_PI_2);
    assert_close(line(1.0, 1.0, 2.0, 1.0).angle_to_horizontal(), 0.0);
    assert_close(
        line(0.0, 0.0, 0.5, 3.0_f64.sqrt() / 2.0).angle_to_horizontal(),
        FRAC_PI_3,
    );
    assert_close(
        line(0.0, 0.0, -0.5, 3.0_f64.sqrt() / 2.0).angle_to_horizontal(),
        2.0 * PI / 3.0,
    );
}

#[test]
fn test_angle_to_horizontal_ignores_direction() {
    let forward = line(0.0, 0.0, 3.0, 1.0);
    let backward = line(3.0, 1.0, 0.0, 0.0);
    assert_close(forward.angle_to_horizontal(), backward.angle_to_horizontal());

    // Pointing along -x folds back to zero
    assert_close(line(2.0, 1.0, 1.0, 1.0).angle_to_horizontal(), 0.0);
}

#[test]
fn test_angle_to_horizontal_stays_within_half_turn() {
    for step in 0..72 {
        let theta = step as f64 * PI / 36.0;
        let l = line(0.0, 0.0, theta.cos(), theta.sin());
        let angle = l.angle_to_horizontal();
        std::assert!((0.0..PI).contains(&angle), "angle {} out of range", angle);
    }
}

#[test]
fn test_angle_to_vertical() {
    assert_close(line(1.0, 1.0, 2.0, 2.0).angle_to_vertical(), FRAC_PI_4);
    assert_close(line(1.0, 1.0, 1.0, 2.0).angle_to_vertical(), 0.0);
    assert_close(line(1.0, 1.0, 2.0, 1.0).angle_to_vertical(), FRAC_PI_2);
    assert_close(
        line(0.0, 0.0, 0.5, 3.0_f64.sqrt() / 2.0).angle_to_vertical(),
        FRAC_PI_6,
    );
}

#[test]
fn test_angle_to_vertical_negative_x() {
    assert_close(line(0.0, 0.0, -1.0, 1.0).angle_to_vertical(), 3.0 * PI / 4.0);
}

#[test]
fn test_angle_to_vertical_in_degrees() {
    assert_close(to_degrees(line(-1.0, -1.0, -2.0, -2.0).angle_to_vertical()), 225.0);
    assert_close(to_degrees(line(2.0, -2.0, 1.0, -1.0).angle_to_vertical()), 135.0);
}

#[test]
fn test_degenerate_line() {
    let l = line(3.0, 3.0, 3.0, 3.0);
    std::assert!(l.is_degenerate());
    std::assert!(!line(0.0, 0.0, 0.0, 1.0).is_degenerate());
}

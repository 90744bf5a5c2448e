mod line_tests;
mod point_tests;

/// Assert two floats are within `1e-12` of each other
pub(crate) fn assert_close(actual: f64, expected: f64) {
    std::assert!(
        (actual - expected).abs() < 1e-12,
        "expected {}, got {}",
        expected,
        actual
    );
}

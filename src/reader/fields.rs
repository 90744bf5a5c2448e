//! Field extraction helpers for data lines

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use super::options::{NumericMode, Separator};
use crate::errors::{LayerError, LayerResult};

lazy_static! {
    // Leading decimal number, optionally signed and with an exponent
    static ref NUMERIC_PREFIX: Regex =
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
            .expect("numeric prefix pattern is valid");
}

/// Split a line and normalize every field (trimmed, lowercase)
pub(crate) fn split_fields(line: &str, separator: &Separator) -> Vec<String> {
    separator
        .split(line)
        .into_iter()
        .map(|field| field.trim().to_lowercase())
        .collect()
}

/// Fetch a column that must be present
pub(crate) fn required_field(fields: &[String], column: usize, line: usize) -> LayerResult<&str> {
    fields
        .get(column)
        .map(String::as_str)
        .ok_or(LayerError::MissingField { line, column })
}

/// Read a coordinate column as a float
pub(crate) fn coordinate(
    fields: &[String],
    column: usize,
    line: usize,
    mode: NumericMode,
) -> LayerResult<f64> {
    match mode {
        NumericMode::Strict => {
            let text = required_field(fields, column, line)?;
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(LayerError::NumericParse {
                    line,
                    column,
                    value: text.to_string(),
                }),
            }
        }
        NumericMode::Lenient => {
            let text = fields.get(column).map(String::as_str).unwrap_or("");
            let value = lenient_number(text);
            if text.parse::<f64>().ok() != Some(value) {
                warn!(
                    "Coerced {:?} at line {}, column {} to {}",
                    text, line, column, value
                );
            }
            Ok(value)
        }
    }
}

/// Longest leading numeric prefix of `text`, or 0.0 when there is none
pub(crate) fn lenient_number(text: &str) -> f64 {
    NUMERIC_PREFIX
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

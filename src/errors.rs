//! Custom error types for point layer processing

use std::fmt;
use std::io;

/// Point layer error types
#[derive(Debug)]
pub enum LayerError {
    /// I/O error
    IoError(io::Error),
    /// A value that does not expose numeric x and y coordinates
    NotAPoint(String),
    /// Two lines of one pair carry different group identifiers
    GroupMismatch {
        /// 1-based line number of the first line of the pair
        line: usize,
        /// Normalized fields of the first line
        first: Vec<String>,
        /// Normalized fields of the second line
        second: Vec<String>,
    },
    /// A coordinate field that is not a number
    NumericParse {
        line: usize,
        column: usize,
        value: String,
    },
    /// A configured column is missing from a line
    MissingField {
        line: usize,
        column: usize,
    },
    /// The last data line has no partner
    UnpairedLine(usize),
    /// Slope of a line with no horizontal extent
    UndefinedSlope,
    /// Invalid reader configuration
    InvalidConfig(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for LayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerError::IoError(e) => write!(f, "I/O error: {}", e),
            LayerError::NotAPoint(what) => write!(f, "Not a point: {}", what),
            LayerError::GroupMismatch { line, first, second } => write!(
                f,
                "Line mismatch at line {}: {:?}, {:?}",
                line, first, second
            ),
            LayerError::NumericParse { line, column, value } => write!(
                f,
                "Invalid number {:?} at line {}, column {}",
                value, line, column
            ),
            LayerError::MissingField { line, column } => {
                write!(f, "Missing column {} at line {}", column, line)
            }
            LayerError::UnpairedLine(line) => {
                write!(f, "Line {} has no partner line", line)
            }
            LayerError::UndefinedSlope => write!(f, "Slope is undefined for a vertical line"),
            LayerError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            LayerError::GenericError(msg) => write!(f, "Point layer error: {}", msg),
        }
    }
}

impl std::error::Error for LayerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayerError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LayerError {
    fn from(error: io::Error) -> Self {
        LayerError::IoError(error)
    }
}

/// Result type for point layer operations
pub type LayerResult<T> = Result<T, LayerError>;

impl From<String> for LayerError {
    fn from(msg: String) -> Self {
        LayerError::GenericError(msg)
    }
}

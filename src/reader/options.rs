//! Reader configuration
//!
//! Options can be built in code or loaded from a TOML file with a
//! `[reader]` table:
//!
//! ```toml
//! [reader]
//! x_index = 2
//! y_index = 3
//! group_index = 1
//! skip_lines = 1
//! separator = ","
//! numeric_mode = "strict"
//! strict_pairs = false
//! ```

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::errors::{LayerError, LayerResult};

/// How coordinate fields that are not clean numbers are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericMode {
    /// Reject them with a parse error
    Strict,
    /// Take the leading numeric prefix, or 0.0 when there is none
    Lenient,
}

impl NumericMode {
    /// Parse a mode name ("strict" or "lenient")
    pub fn from_name(name: &str) -> LayerResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "strict" => Ok(NumericMode::Strict),
            "lenient" => Ok(NumericMode::Lenient),
            other => Err(LayerError::InvalidConfig(format!(
                "Unknown numeric mode: {}",
                other
            ))),
        }
    }
}

/// Field separator for data lines
#[derive(Debug, Clone)]
pub enum Separator {
    /// Split on an exact string
    Literal(String),
    /// Split on every match of a regular expression
    Pattern(Regex),
}

impl Separator {
    /// Build a pattern separator from a regular expression
    pub fn pattern(pattern: &str) -> LayerResult<Self> {
        Regex::new(pattern)
            .map(Separator::Pattern)
            .map_err(|e| LayerError::InvalidConfig(format!("Invalid separator pattern: {}", e)))
    }

    /// Split a line into raw fields
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Separator::Literal(sep) => line.split(sep.as_str()).collect(),
            Separator::Pattern(re) => re.split(line).collect(),
        }
    }
}

/// Configuration for a pair record reader
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    /// Column holding the x coordinate
    pub x_index: usize,
    /// Column holding the y coordinate
    pub y_index: usize,
    /// Column holding the group identifier
    pub group_index: usize,
    /// Leading lines to skip before data starts
    pub skip_lines: usize,
    /// Field separator
    pub separator: Separator,
    /// Handling of malformed coordinates
    pub numeric_mode: NumericMode,
    /// Fail instead of dropping a trailing unpaired line
    pub strict_pairs: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            x_index: 2,
            y_index: 3,
            group_index: 1,
            skip_lines: 1,
            separator: Separator::Literal(",".to_string()),
            numeric_mode: NumericMode::Strict,
            strict_pairs: false,
        }
    }
}

impl ReaderOptions {
    pub fn with_x_index(mut self, index: usize) -> Self {
        self.x_index = index;
        self
    }

    pub fn with_y_index(mut self, index: usize) -> Self {
        self.y_index = index;
        self
    }

    pub fn with_group_index(mut self, index: usize) -> Self {
        self.group_index = index;
        self
    }

    pub fn with_skip_lines(mut self, lines: usize) -> Self {
        self.skip_lines = lines;
        self
    }

    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_numeric_mode(mut self, mode: NumericMode) -> Self {
        self.numeric_mode = mode;
        self
    }

    pub fn with_strict_pairs(mut self, strict: bool) -> Self {
        self.strict_pairs = strict;
        self
    }

    /// Check the options before reading
    pub fn validate(&self) -> LayerResult<()> {
        if let Separator::Literal(sep) = &self.separator {
            if sep.is_empty() {
                return Err(LayerError::InvalidConfig("Separator must not be empty".to_string()));
            }
        }
        Ok(())
    }

    /// Parse reader options from a TOML string
    ///
    /// Missing keys keep their defaults, unknown keys are ignored.
    pub fn from_toml_str(content: &str) -> LayerResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(LayerError::InvalidConfig(format!("Failed to parse TOML: {}", e))),
        };

        let mut options = ReaderOptions::default();

        let table = match toml_value.get("reader").and_then(|v| v.as_table()) {
            Some(table) => table,
            None => return Ok(options),
        };

        if let Some(value) = table.get("x_index") {
            options.x_index = Self::index_value(value, "x_index")?;
        }
        if let Some(value) = table.get("y_index") {
            options.y_index = Self::index_value(value, "y_index")?;
        }
        if let Some(value) = table.get("group_index") {
            options.group_index = Self::index_value(value, "group_index")?;
        }
        if let Some(value) = table.get("skip_lines") {
            options.skip_lines = Self::index_value(value, "skip_lines")?;
        }
        if let Some(value) = table.get("separator") {
            let sep = Self::string_value(value, "separator")?;
            options.separator = Separator::Literal(sep.to_string());
        }
        // A pattern wins over a literal separator
        if let Some(value) = table.get("separator_pattern") {
            let pattern = Self::string_value(value, "separator_pattern")?;
            options.separator = Separator::pattern(pattern)?;
        }
        if let Some(value) = table.get("numeric_mode") {
            let name = Self::string_value(value, "numeric_mode")?;
            options.numeric_mode = NumericMode::from_name(name)?;
        }
        if let Some(value) = table.get("strict_pairs") {
            options.strict_pairs = value.as_bool().ok_or_else(|| {
                LayerError::InvalidConfig("strict_pairs must be a boolean".to_string())
            })?;
        }

        options.validate()?;
        Ok(options)
    }

    /// Load reader options from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> LayerResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn index_value(value: &toml::Value, key: &str) -> LayerResult<usize> {
        value
            .as_integer()
            .and_then(|i| usize::try_from(i).ok())
            .ok_or_else(|| {
                LayerError::InvalidConfig(format!("{} must be a non-negative integer", key))
            })
    }

    fn string_value<'a>(value: &'a toml::Value, key: &str) -> LayerResult<&'a str> {
        value
            .as_str()
            .ok_or_else(|| LayerError::InvalidConfig(format!("{} must be a string", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ReaderOptions::default();
        assert_eq!(options.x_index, 2);
        assert_eq!(options.y_index, 3);
        assert_eq!(options.group_index, 1);
        assert_eq!(options.skip_lines, 1);
        assert!(matches!(options.separator, Separator::Literal(ref s) if s == ","));
        assert_eq!(options.numeric_mode, NumericMode::Strict);
        assert!(!options.strict_pairs);
    }

    #[test]
    fn test_from_toml_overrides_defaults() {
        let options = ReaderOptions::from_toml_str(
            r#"
            [reader]
            x_index = 0
            y_index = 1
            group_index = 4
            skip_lines = 3
            separator = ";"
            numeric_mode = "lenient"
            strict_pairs = true
            comment = "ignored"
            "#,
        )
        .unwrap();

        assert_eq!(options.x_index, 0);
        assert_eq!(options.y_index, 1);
        assert_eq!(options.group_index, 4);
        assert_eq!(options.skip_lines, 3);
        assert!(matches!(options.separator, Separator::Literal(ref s) if s == ";"));
        assert_eq!(options.numeric_mode, NumericMode::Lenient);
        assert!(options.strict_pairs);
    }

    #[test]
    fn test_from_toml_without_reader_table() {
        let options = ReaderOptions::from_toml_str("[other]\nkey = 1\n").unwrap();
        assert_eq!(options.x_index, 2);
    }

    #[test]
    fn test_from_toml_pattern_separator() {
        let options = ReaderOptions::from_toml_str("[reader]\nseparator_pattern = '\\s+'\n").unwrap();
        assert_eq!(options.separator.split("a  b\tc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_from_toml_rejects_bad_values() {
        let negative = ReaderOptions::from_toml_str("[reader]\nx_index = -1\n");
        assert!(matches!(negative, Err(LayerError::InvalidConfig(_))));

        let mode = ReaderOptions::from_toml_str("[reader]\nnumeric_mode = \"loose\"\n");
        assert!(matches!(mode, Err(LayerError::InvalidConfig(_))));

        let empty = ReaderOptions::from_toml_str("[reader]\nseparator = \"\"\n");
        assert!(matches!(empty, Err(LayerError::InvalidConfig(_))));

        let pattern = ReaderOptions::from_toml_str("[reader]\nseparator_pattern = \"(\"\n");
        assert!(matches!(pattern, Err(LayerError::InvalidConfig(_))));

        let broken = ReaderOptions::from_toml_str("[reader\n");
        assert!(matches!(broken, Err(LayerError::InvalidConfig(_))));
    }
}

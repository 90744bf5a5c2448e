//! Pair record reader
//!
//! Reads delimited point layer exports where every line is one vertex and
//! each two consecutive data lines with the same group identifier form one
//! line record:
//!
//! ```text
//! OBJECTID,ORIG_FID,POINT_X,POINT_Y
//! 1,1,10.0,20.0
//! 2,1,15.0,25.0
//! ```
//!
//! Whitespace-only lines after the header are skipped and never pair.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use log::{debug, warn};

use super::fields::{coordinate, required_field, split_fields};
use super::options::ReaderOptions;
use super::record::PairRecord;
use crate::errors::{LayerError, LayerResult};

/// Lazy iterator of pair records over a line source
///
/// The source is consumed once, front to back. After the first error the
/// iterator yields nothing more.
pub struct PairRecordReader<R: BufRead> {
    lines: Lines<R>,
    options: ReaderOptions,
    /// Number of lines consumed so far
    line_number: usize,
    header_skipped: bool,
    finished: bool,
}

impl PairRecordReader<BufReader<File>> {
    /// Open a file for reading
    ///
    /// The file handle is owned by the reader and closed when it is dropped.
    pub fn open<P: AsRef<Path>>(path: P, options: ReaderOptions) -> LayerResult<Self> {
        let path = path.as_ref();
        debug!("Opening point layer file {}", path.display());
        let file = File::open(path)?;
        Self::new(BufReader::new(file), options)
    }
}

impl<R: BufRead> PairRecordReader<R> {
    /// Create a reader over any buffered source
    pub fn new(source: R, options: ReaderOptions) -> LayerResult<Self> {
        options.validate()?;
        Ok(PairRecordReader {
            lines: source.lines(),
            options,
            line_number: 0,
            header_skipped: false,
            finished: false,
        })
    }

    /// The options this reader was built with
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    fn next_line(&mut self) -> LayerResult<Option<String>> {
        match self.lines.next() {
            Some(line) => {
                self.line_number += 1;
                Ok(Some(line?))
            }
            None => Ok(None),
        }
    }

    /// Next line that is not blank; blank data lines never form pairs
    fn next_data_line(&mut self) -> LayerResult<Option<String>> {
        while let Some(line) = self.next_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
            debug!("Skipping blank line {}", self.line_number);
        }
        Ok(None)
    }

    fn skip_header(&mut self) -> LayerResult<()> {
        self.header_skipped = true;
        for _ in 0..self.options.skip_lines {
            if self.next_line()?.is_none() {
                break;
            }
        }
        Ok(())
    }

    fn read_pair(&mut self) -> LayerResult<Option<PairRecord>> {
        if !self.header_skipped {
            self.skip_header()?;
        }

        let first = match self.next_data_line()? {
            Some(line) => line,
            None => return Ok(None),
        };
        let first_line = self.line_number;

        let second = match self.next_data_line()? {
            Some(line) => line,
            None => {
                if self.options.strict_pairs {
                    return Err(LayerError::UnpairedLine(first_line));
                }
                warn!("Dropping unpaired line {}", first_line);
                return Ok(None);
            }
        };

        self.parse_pair(&first, &second, first_line).map(Some)
    }

    fn parse_pair(&self, first: &str, second: &str, first_line: usize) -> LayerResult<PairRecord> {
        let options = &self.options;
        let second_line = self.line_number;

        let first_fields = split_fields(first, &options.separator);
        let second_fields = split_fields(second, &options.separator);

        let group = required_field(&first_fields, options.group_index, first_line)?.to_string();
        let other_group = required_field(&second_fields, options.group_index, second_line)?;
        if group != other_group {
            return Err(LayerError::GroupMismatch {
                line: first_line,
                first: first_fields,
                second: second_fields,
            });
        }

        let mode = options.numeric_mode;
        let record = PairRecord {
            x1: coordinate(&first_fields, options.x_index, first_line, mode)?,
            y1: coordinate(&first_fields, options.y_index, first_line, mode)?,
            x2: coordinate(&second_fields, options.x_index, second_line, mode)?,
            y2: coordinate(&second_fields, options.y_index, second_line, mode)?,
            group,
            source_line: first_line,
        };

        debug!(
            "Read group {} at line {}: ({}, {}) -> ({}, {})",
            record.group, first_line, record.x1, record.y1, record.x2, record.y2
        );
        Ok(record)
    }
}

impl<R: BufRead> Iterator for PairRecordReader<R> {
    type Item = LayerResult<PairRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_pair() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for PairRecordReader<R> {}

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use log::{info, warn};

use crate::errors::{LayerError, LayerResult};
use crate::output::AngleWriter;
use crate::reader::{PairRecord, PairRecordReader, ReaderOptions};

/// Main interface to the pointlayer library
///
/// Ties the pair record reader, the line measurements and the angle
/// writer together.
///
/// ```no_run
/// use pointlayer::{PointLayer, ReaderOptions};
///
/// let layer = PointLayer::new(ReaderOptions::default());
/// let rows = layer.write_angles("points.txt", std::io::stdout()).unwrap();
/// eprintln!("{} lines", rows);
/// ```
pub struct PointLayer {
    options: ReaderOptions,
}

/// Result of checking a point layer file without writing angles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckSummary {
    /// Number of pair records read
    pub records: usize,
    /// Number of distinct group identifiers
    pub distinct_groups: usize,
    /// Groups whose identifier appears in more than one record
    pub repeated_groups: Vec<String>,
    /// Groups whose two points coincide
    pub degenerate_groups: Vec<String>,
    /// Non-degenerate records with no horizontal extent (undefined slope)
    pub vertical_lines: usize,
}

impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Records: {}", self.records)?;
        writeln!(f, "Distinct groups: {}", self.distinct_groups)?;
        writeln!(f, "Vertical lines: {}", self.vertical_lines)?;
        if !self.repeated_groups.is_empty() {
            writeln!(f, "Repeated groups: {}", self.repeated_groups.join(", "))?;
        }
        if !self.degenerate_groups.is_empty() {
            writeln!(f, "Degenerate groups: {}", self.degenerate_groups.join(", "))?;
        }
        Ok(())
    }
}

impl PointLayer {
    /// Create a new PointLayer with the given reader options
    pub fn new(options: ReaderOptions) -> Self {
        PointLayer { options }
    }

    /// The reader options in use
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Open a file as a lazy record iterator
    pub fn open<P: AsRef<Path>>(&self, input_path: P) -> LayerResult<PairRecordReader<BufReader<File>>> {
        PairRecordReader::open(input_path, self.options.clone())
    }

    /// Read every pair record of a file
    pub fn read_records<P: AsRef<Path>>(&self, input_path: P) -> LayerResult<Vec<PairRecord>> {
        self.open(input_path)?.collect()
    }

    /// Write the angle CSV for a file
    ///
    /// # Returns
    /// Number of data rows written
    pub fn write_angles<P: AsRef<Path>, W: Write>(&self, input_path: P, output: W) -> LayerResult<usize> {
        self.write_angles_with(input_path, output, |_| {})
    }

    /// Write the angle CSV, calling `on_row` after every row
    pub fn write_angles_with<P, W, F>(&self, input_path: P, output: W, on_row: F) -> LayerResult<usize>
    where
        P: AsRef<Path>,
        W: Write,
        F: FnMut(&PairRecord),
    {
        let input_path = input_path.as_ref();
        // Nothing is written unless the input can be opened
        let records = self.open(input_path)?;
        let rows = Self::write_records_with(records, output, on_row)?;
        info!("Wrote {} angle rows for {}", rows, input_path.display());
        Ok(rows)
    }

    /// Write the angle CSV for records from an already opened reader
    pub fn write_records_with<I, W, F>(records: I, output: W, mut on_row: F) -> LayerResult<usize>
    where
        I: IntoIterator<Item = LayerResult<PairRecord>>,
        W: Write,
        F: FnMut(&PairRecord),
    {
        let mut writer = AngleWriter::new(output);
        writer.write_header()?;

        for record in records {
            let record = record?;
            writer.write_record(&record)?;
            on_row(&record);
        }

        let rows = writer.rows_written();
        writer.finish()?;
        Ok(rows)
    }

    /// Read a whole file and summarize it
    pub fn check<P: AsRef<Path>>(&self, input_path: P) -> LayerResult<CheckSummary> {
        let input_path = input_path.as_ref();
        let mut summary = CheckSummary::default();
        let mut seen = HashSet::new();
        let mut repeated = HashSet::new();

        for record in self.open(input_path)? {
            let record = record?;
            let line = record.line()?;
            summary.records += 1;

            if line.is_degenerate() {
                warn!("Group {} at line {} has coinciding points", record.group, record.source_line);
                summary.degenerate_groups.push(record.group.clone());
            } else {
                match line.slope() {
                    Ok(_) => {}
                    Err(LayerError::UndefinedSlope) => summary.vertical_lines += 1,
                    Err(e) => return Err(e),
                }
            }
            if !seen.insert(record.group.clone()) && repeated.insert(record.group.clone()) {
                summary.repeated_groups.push(record.group);
            }
        }

        summary.distinct_groups = seen.len();
        info!("Checked {}: {} records", input_path.display(), summary.records);
        Ok(summary)
    }
}

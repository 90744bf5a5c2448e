//! CSV writer for line angles
//!
//! Every record becomes one row with its group, both points and the
//! angle to the vertical in radians and degrees.

use std::io::Write;

use log::debug;

use crate::coordinate::to_degrees;
use crate::errors::LayerResult;
use crate::reader::PairRecord;

/// Column header of the angle CSV
///
/// The repeated `POINT_X2` is part of the established format that
/// downstream spreadsheets key on.
pub const ANGLE_HEADER: &str = "ORIG_FID,POINT_X1,POINT_Y1,POINT_X2,POINT_X2,RAD,DEG";

/// Format a float the way the angle CSV expects
///
/// Whole numbers keep one decimal place (`10.0`), everything else uses
/// the shortest representation that round-trips.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Writes angle rows to any output stream
pub struct AngleWriter<W: Write> {
    writer: W,
    rows: usize,
    header_written: bool,
}

impl<W: Write> AngleWriter<W> {
    /// Create a writer; the header is written before the first row
    pub fn new(writer: W) -> Self {
        AngleWriter {
            writer,
            rows: 0,
            header_written: false,
        }
    }

    /// Write the header line if it has not been written yet
    pub fn write_header(&mut self) -> LayerResult<()> {
        if !self.header_written {
            writeln!(self.writer, "{}", ANGLE_HEADER)?;
            self.header_written = true;
        }
        Ok(())
    }

    /// Write one row for a record
    pub fn write_record(&mut self, record: &PairRecord) -> LayerResult<()> {
        self.write_header()?;

        let line = record.line()?;
        let radians = line.angle_to_vertical();
        writeln!(
            self.writer,
            "{},{},{},{},{},{},{}",
            record.group,
            format_number(record.x1),
            format_number(record.y1),
            format_number(record.x2),
            format_number(record.y2),
            format_number(radians),
            format_number(to_degrees(radians)),
        )?;

        self.rows += 1;
        debug!("Wrote angle row {} for group {}", self.rows, record.group);
        Ok(())
    }

    /// Number of data rows written so far
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flush and hand back the underlying stream
    pub fn finish(mut self) -> LayerResult<W> {
        self.write_header()?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(group: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> PairRecord {
        PairRecord {
            group: group.to_string(),
            x1,
            y1,
            x2,
            y2,
            source_line: 2,
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(10.0), "10.0");
        assert_eq!(format_number(-3.0), "-3.0");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(0.7853981633974483), "0.7853981633974483");
    }

    #[test]
    fn test_writes_header_and_rows() {
        let mut writer = AngleWriter::new(Vec::new());
        writer.write_record(&record("1", 1.0, 1.0, 1.0, 2.0)).unwrap();
        writer.write_record(&record("2", 1.0, 1.0, 2.0, 1.0)).unwrap();
        assert_eq!(writer.rows_written(), 2);

        let output = String::from_utf8(writer.finish().unwrap()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], ANGLE_HEADER);
        assert_eq!(lines[1], "1,1.0,1.0,1.0,2.0,0.0,0.0");
        assert!(lines[2].starts_with("2,1.0,1.0,2.0,1.0,1.5707963267948966,90"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_output_still_has_header() {
        let writer = AngleWriter::new(Vec::new());
        let output = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(output, format!("{}\n", ANGLE_HEADER));
    }
}

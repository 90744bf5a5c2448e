//! Point layer file reading
//!
//! This module turns delimited point layer exports into
//! grouped point pair records.

mod fields;
pub mod options;
mod pair_reader;
mod record;

pub use options::{NumericMode, ReaderOptions, Separator};
pub use pair_reader::PairRecordReader;
pub use record::PairRecord;

pub mod api;
pub mod cli;
pub mod commands;
pub mod coordinate;
pub mod errors;
pub mod output;
pub mod reader;
pub mod utils;

pub use crate::api::{CheckSummary, PointLayer};

pub use coordinate::{to_degrees, Line, Point, PointLike};
pub use errors::{LayerError, LayerResult};
pub use output::AngleWriter;
pub use reader::{NumericMode, PairRecord, PairRecordReader, ReaderOptions, Separator};

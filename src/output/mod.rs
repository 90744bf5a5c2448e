//! Output formats for computed line angles

mod angle_writer;

pub use angle_writer::{format_number, AngleWriter, ANGLE_HEADER};

//! Angle calculation command
//!
//! Reads a point layer file and writes one angle row per point pair,
//! either to stdout or to an output file.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;

use clap::ArgMatches;
use log::info;

use crate::api::PointLayer;
use crate::commands::command_traits::Command;
use crate::commands::reader_args::reader_options;
use crate::errors::{LayerError, LayerResult};
use crate::reader::ReaderOptions;
use crate::utils::progress::ProgressTracker;

/// Command for writing line angles
pub struct AnglesCommand {
    /// Path to the input file
    input_file: String,
    /// Path to the output file, stdout when absent
    output_file: Option<String>,
    /// Reader configuration
    options: ReaderOptions,
}

impl AnglesCommand {
    /// Create a new angles command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    ///
    /// # Returns
    /// A new AnglesCommand instance or an error
    pub fn new(args: &ArgMatches) -> LayerResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| LayerError::GenericError("Missing input file".to_string()))?
            .clone();

        let output_file = args.get_one::<String>("output").cloned();
        let options = reader_options(args)?;

        Ok(AnglesCommand {
            input_file,
            output_file,
            options,
        })
    }
}

impl Command for AnglesCommand {
    fn execute(&self) -> LayerResult<()> {
        let layer = PointLayer::new(self.options.clone());

        let rows = match &self.output_file {
            Some(path) => {
                if same_file(&self.input_file, path)? {
                    return Err(LayerError::GenericError(format!(
                        "Output file {} is the input file",
                        path
                    )));
                }
                // Open the input before the output is truncated
                let records = layer.open(&self.input_file)?;

                info!("Writing angles for {} to {}", self.input_file, path);
                let output = BufWriter::new(File::create(path)?);
                let progress = ProgressTracker::new(&self.input_file);
                let rows = PointLayer::write_records_with(records, output, |_| progress.increment(1))?;
                progress.finish();
                rows
            }
            None => {
                let stdout = io::stdout();
                layer.write_angles(&self.input_file, stdout.lock())?
            }
        };

        info!("Angle calculation finished: {} rows", rows);
        Ok(())
    }
}

/// Whether both paths name the same existing file
fn same_file(input: &str, output: &str) -> LayerResult<bool> {
    let output = Path::new(output);
    if !output.exists() {
        return Ok(false);
    }
    Ok(fs::canonicalize(input)? == fs::canonicalize(output)?)
}

//! Point layer validation command

use clap::ArgMatches;
use log::info;

use crate::api::PointLayer;
use crate::commands::command_traits::Command;
use crate::commands::reader_args::reader_options;
use crate::errors::{LayerError, LayerResult};
use crate::reader::ReaderOptions;

/// Command that reads a whole file and prints a summary
pub struct CheckCommand {
    input_file: String,
    options: ReaderOptions,
}

impl CheckCommand {
    pub fn new(args: &ArgMatches) -> LayerResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| LayerError::GenericError("Missing input file".to_string()))?
            .clone();

        Ok(CheckCommand {
            input_file,
            options: reader_options(args)?,
        })
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> LayerResult<()> {
        info!("Checking {}", self.input_file);
        let summary = PointLayer::new(self.options.clone()).check(&self.input_file)?;
        print!("{}", summary);
        Ok(())
    }
}

//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod angles_command;
pub mod check_command;
pub mod command_traits;
pub mod reader_args;

pub use angles_command::AnglesCommand;
pub use check_command::CheckCommand;
pub use command_traits::{Command, CommandFactory};

use clap::ArgMatches;
use crate::errors::LayerResult;

/// Factory for creating command instances based on CLI arguments
pub struct PointLayerCommandFactory;

impl PointLayerCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        PointLayerCommandFactory
    }
}

impl Default for PointLayerCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for PointLayerCommandFactory {
    fn create_command(&self, args: &ArgMatches) -> LayerResult<Box<dyn Command>> {
        if args.get_flag("check") {
            Ok(Box::new(CheckCommand::new(args)?))
        } else {
            // Default to writing angles
            Ok(Box::new(AnglesCommand::new(args)?))
        }
    }
}

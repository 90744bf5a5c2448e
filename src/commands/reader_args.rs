//! Reader options from command-line arguments
//!
//! Defaults are overridden by the `--config` file, which is in turn
//! overridden by individual flags.

use clap::ArgMatches;
use log::info;

use crate::errors::{LayerError, LayerResult};
use crate::reader::{NumericMode, ReaderOptions, Separator};

/// Build reader options from parsed arguments
pub fn reader_options(args: &ArgMatches) -> LayerResult<ReaderOptions> {
    let mut options = match args.get_one::<String>("config") {
        Some(path) => {
            info!("Loading reader options from {}", path);
            ReaderOptions::from_file(path)?
        }
        None => ReaderOptions::default(),
    };

    if let Some(index) = parse_count(args, "x-index")? {
        options.x_index = index;
    }
    if let Some(index) = parse_count(args, "y-index")? {
        options.y_index = index;
    }
    if let Some(index) = parse_count(args, "group-index")? {
        options.group_index = index;
    }
    if let Some(lines) = parse_count(args, "skip")? {
        options.skip_lines = lines;
    }
    if let Some(separator) = args.get_one::<String>("separator") {
        options.separator = Separator::Literal(separator.clone());
    }
    if let Some(pattern) = args.get_one::<String>("separator-pattern") {
        options.separator = Separator::pattern(pattern)?;
    }
    if args.get_flag("lenient") {
        options.numeric_mode = NumericMode::Lenient;
    }
    if args.get_flag("strict-pairs") {
        options.strict_pairs = true;
    }

    options.validate()?;
    Ok(options)
}

fn parse_count(args: &ArgMatches, name: &str) -> LayerResult<Option<usize>> {
    args.get_one::<String>(name)
        .map(|value| {
            value.trim().parse::<usize>().map_err(|_| {
                LayerError::InvalidConfig(format!("Invalid value for --{}: {}", name, value))
            })
        })
        .transpose()
}

//! Command-line interface definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command for `pointlayer2angles`
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("pointlayer2angles")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compute line angles from paired point layer exports")
        .after_help("Example:\n  pointlayer2angles point_layer_file.txt > angle_file.txt")
        .arg(
            Arg::new("input")
                .help("Point layer text file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write angles to this file instead of stdout")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML file with a [reader] table")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("x-index")
                .long("x-index")
                .help("Column of the x coordinate (default 2)")
                .value_name("COLUMN")
                .required(false),
        )
        .arg(
            Arg::new("y-index")
                .long("y-index")
                .help("Column of the y coordinate (default 3)")
                .value_name("COLUMN")
                .required(false),
        )
        .arg(
            Arg::new("group-index")
                .long("group-index")
                .help("Column of the group identifier (default 1)")
                .value_name("COLUMN")
                .required(false),
        )
        .arg(
            Arg::new("skip")
                .long("skip")
                .help("Header lines to skip (default 1)")
                .value_name("LINES")
                .required(false),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .help("Field separator (default ',')")
                .value_name("TEXT")
                .required(false),
        )
        .arg(
            Arg::new("separator-pattern")
                .long("separator-pattern")
                .help("Regular expression separating fields, e.g. '\\s+'")
                .value_name("REGEX")
                .conflicts_with("separator")
                .required(false),
        )
        .arg(
            Arg::new("lenient")
                .long("lenient")
                .help("Coerce malformed coordinates instead of failing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("strict-pairs")
                .long("strict-pairs")
                .help("Fail when the last data line has no partner")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Validate the file and print a summary instead of angles")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log messages to this file")
                .value_name("FILE")
                .required(false),
        )
}

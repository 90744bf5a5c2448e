use std::process;

use log::{error, LevelFilter};

use pointlayer::cli::build_cli;
use pointlayer::commands::{CommandFactory, PointLayerCommandFactory};
use pointlayer::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let verbose = matches.get_flag("verbose");
    // Console logging already goes to stderr, so errors are only logged to a file
    let log_to_file = matches.contains_id("log-file");
    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        }
        None => Logger::init_console_logger(verbose),
    }

    let factory = PointLayerCommandFactory::new();

    match factory.create_command(&matches) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                if log_to_file {
                    error!("Command execution error: {}", e);
                }
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            if log_to_file {
                error!("Failed to create command: {}", e);
            }
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}

use std::process::ExitCode;

use human_panic::setup_panic;
use log::error;

use renamer::cli::{get_log_file, get_matches, get_verbosity, usage_text};
use renamer::constants::EXIT_FAILURE;
use renamer::prelude::*;

/// Prints a fatal error, with the usage line for configuration errors
fn report_fatal(err: &Error) -> ExitCode {
    error!("{err}");
    if err.shows_usage() {
        eprintln!("\n{}", usage_text());
    }
    ExitCode::from(err.exit_code())
}

fn main() -> ExitCode {
    setup_panic!();

    let matches = get_matches();

    if let Err(e) = init_logger(get_verbosity(&matches), &get_log_file(&matches)) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(EXIT_FAILURE);
    }

    let config = match RenameOptions::from_matches(&matches).validate() {
        Ok(config) => config,
        Err(e) => return report_fatal(&e),
    };

    match process_files(&config, &LocalFileSystem) {
        Ok(report) => ExitCode::from(report.exit_code()),
        Err(e) => report_fatal(&e),
    }
}

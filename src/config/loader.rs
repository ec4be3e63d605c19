//! Building options from parsed command-line arguments

use std::path::PathBuf;

use clap::ArgMatches;
use log::debug;

use crate::constants::DEFAULT_TARGET_DIR;

use super::model::RenameOptions;

fn string_arg(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

impl RenameOptions {
    /// Collects the options from the arguments defined in [`crate::cli::build_command`]
    pub fn from_matches(matches: &ArgMatches) -> RenameOptions {
        let options = RenameOptions {
            prefix: string_arg(matches, "prefix"),
            suffix: string_arg(matches, "suffix"),
            index: string_arg(matches, "index"),
            start_number: matches.get_one::<u64>("startnumber").copied().unwrap_or(1),
            pattern: string_arg(matches, "regexp"),
            target: matches
                .get_one::<PathBuf>("target_dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET_DIR)),
            lower_extension: matches.get_flag("lower_extension"),
            lowercase: matches.get_flag("lowercase"),
            uppercase: matches.get_flag("uppercase"),
            copy: matches.get_flag("copy"),
            dry_run: matches.get_flag("dry_run"),
            force: matches.get_flag("force"),
            recursive: matches.get_flag("recursive"),
        };
        debug!("Options from the command line: {options:?}");
        options
    }
}

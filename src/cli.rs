use std::path::PathBuf;

use clap::{
    Arg, ArgAction, ArgMatches, Command, command, crate_authors, crate_description, crate_name,
    crate_version, value_parser,
};

use crate::constants::{
    COPY_HELP, DEFAULT_START_NUMBER, DEFAULT_TARGET_DIR, DRY_RUN_HELP, FORCE_HELP, INDEX_HELP,
    LOG_FILE_DEFAULT, LOG_FILE_HELP, LOWER_EXTENSION_HELP, LOWERCASE_HELP, PREFIX_HELP,
    RECURSIVE_HELP, REGEXP_HELP, START_NUMBER_HELP, SUFFIX_HELP, TARGET_DIR_HELP,
    UPPERCASE_HELP, VERBOSE_HELP,
};
use crate::logging::LogLevel;

fn flag(id: &'static str, short: char, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .long(long)
        .help(help)
        .action(ArgAction::SetTrue)
}

/// Defines the command-line interface
///
/// Every renaming option has a long and a short name bound to the same
/// argument id, which [`crate::config::RenameOptions::from_matches`] reads.
pub fn build_command() -> Command {
    let arg_prefix = Arg::new("prefix")
        .short('p')
        .long("prefix")
        .value_name("PREFIX")
        .help(PREFIX_HELP);

    let arg_suffix = Arg::new("suffix")
        .short('s')
        .long("suffix")
        .value_name("SUFFIX")
        .help(SUFFIX_HELP);

    let arg_index = Arg::new("index")
        .short('i')
        .long("index")
        .value_name("NAME")
        .help(INDEX_HELP);

    let arg_start_number = Arg::new("startnumber")
        .short('I')
        .long("startnumber")
        .value_name("NUM")
        .help(START_NUMBER_HELP)
        .value_parser(value_parser!(u64))
        .default_value(DEFAULT_START_NUMBER);

    let arg_regexp = Arg::new("regexp")
        .short('x')
        .long("regexp")
        .value_name("REGEXP")
        .help(REGEXP_HELP);

    let arg_target = Arg::new("target_dir")
        .short('t')
        .long("target-dir")
        .visible_alias("target")
        .value_name("PATH")
        .help(TARGET_DIR_HELP)
        .value_parser(value_parser!(PathBuf))
        .default_value(DEFAULT_TARGET_DIR);

    // define arg for verbosity level
    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    // define arg for log file
    let arg_log_file = Arg::new("log_file")
        .long("log-file")
        .value_name("FILE")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    command!()
        .author(crate_authors!())
        .about(crate_description!())
        .name(crate_name!())
        .version(crate_version!())
        .arg(arg_prefix)
        .arg(arg_suffix)
        .arg(arg_index)
        .arg(arg_start_number)
        .arg(arg_regexp)
        .arg(arg_target)
        .arg(flag(
            "lower_extension",
            'e',
            "lower-extension",
            LOWER_EXTENSION_HELP,
        ))
        .arg(flag("lowercase", 'l', "lowercase", LOWERCASE_HELP))
        .arg(flag("uppercase", 'u', "uppercase", UPPERCASE_HELP))
        .arg(flag("dry_run", 'n', "dry-run", DRY_RUN_HELP))
        .arg(flag("copy", 'c', "copy", COPY_HELP))
        .arg(flag("force", 'f', "force", FORCE_HELP))
        .arg(flag("recursive", 'r', "recursive", RECURSIVE_HELP))
        .arg(arg_verbose)
        .arg(arg_log_file)
}

/// Parses the process arguments, exiting on parse errors and `--help`
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Renders the one-line usage shown next to configuration errors
pub fn usage_text() -> String {
    build_command().render_usage().to_string()
}

/// Gets the verbosity level from the command-line arguments
///
/// # Examples
/// ```
/// # use renamer::cli::{build_command, get_verbosity};
/// # use renamer::logging::LogLevel;
/// let matches = build_command().get_matches_from(["renamer", "-u", "-vv"]);
/// assert_eq!(get_verbosity(&matches), LogLevel::Trace);
/// ```
pub fn get_verbosity(matches: &ArgMatches) -> LogLevel {
    let verbose_count = matches.get_count("verbose");
    LogLevel::from_occurrences(verbose_count)
}

/// Gets the log file path, empty when file logging is off
pub fn get_log_file(matches: &ArgMatches) -> String {
    matches
        .get_one::<String>("log_file")
        .cloned()
        .unwrap_or_else(|| LOG_FILE_DEFAULT.to_string())
}

/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Minimum number of digits of the counter in index mode
///
/// Shorter counters are zero-padded, so index 7 becomes `007`.
pub const INDEX_WIDTH: usize = 3;

/// Default start value of the index counter
pub const DEFAULT_START_NUMBER: &str = "1";

/// Default target directory
pub const DEFAULT_TARGET_DIR: &str = ".";

/// Default log file (empty means no file logging)
pub const LOG_FILE_DEFAULT: &str = "";

/// Exit code of a run without failures
pub const EXIT_SUCCESS: u8 = 0;

/// Exit code of a run with per-file failures or without matches
pub const EXIT_FAILURE: u8 = 1;

/// Exit code of an invalid configuration
pub const EXIT_USAGE: u8 = 2;

pub const PREFIX_HELP: &str = "Rename matching files by adding a prefix";
pub const SUFFIX_HELP: &str = "Rename matching files by adding a suffix before the extension";
pub const INDEX_HELP: &str = "Rename matching files to <name><num>, see --startnumber";
pub const START_NUMBER_HELP: &str = "The <num> to start counting from in index mode";
pub const REGEXP_HELP: &str =
    "Only rename files whose name matches this regular expression. Use quotes around it";
pub const TARGET_DIR_HELP: &str = "The directory where to rename/copy the files";
pub const LOWER_EXTENSION_HELP: &str = "Lowercase the extension";
pub const LOWERCASE_HELP: &str = "Lowercase the whole filename. Excludes --uppercase";
pub const UPPERCASE_HELP: &str = "Uppercase the whole filename. Excludes --lowercase";
pub const DRY_RUN_HELP: &str = "List the operations but don't perform any of them";
pub const COPY_HELP: &str = "Copy instead of renaming, leaving the originals untouched";
pub const FORCE_HELP: &str =
    "Overwrite existing files, and rename all files when none matches the regexp";
pub const RECURSIVE_HELP: &str = "Operate recursively on all subdirectories of the target";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write the log to this file";

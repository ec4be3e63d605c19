//! Batch file renaming
//!
//! Walks a directory, optionally filters the files by a regular expression
//! and renames (or copies) every one of them by adding a prefix or a suffix,
//! numbering them, or changing the case of the name or the extension.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod path_gen;
pub mod utils;
pub mod workflow;

pub use errors::*;

pub mod prelude {
    pub use crate::config::{Configuration, RenameOptions, Transformation};
    pub use crate::errors::{
        Error, Result, conflicting_actions_error, file_operation_error, invalid_filename_error,
        no_match_error, path_operation_error, pattern_matching_error, separator_in_name_error,
    };
    pub use crate::file_ops::{FileSystem, LocalFileSystem};
    pub use crate::logging::{LogLevel, format_message, init_logger};
    pub use crate::workflow::{RunReport, process_files};
}

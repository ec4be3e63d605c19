use regex::Error as RegexError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::constants::{EXIT_FAILURE, EXIT_USAGE};

/// Custom error type for the renamer application
///
/// Only the fatal class of errors travels through this type. Per-file
/// failures are logged and tallied in the run report instead.
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// The filter pattern is not a valid regular expression
    PatternMatching { source: RegexError, pattern: String },
    /// No file name matched the filter pattern
    NoMatch { pattern: String },
    /// None of the renaming actions was requested
    MissingAction,
    /// Both lowercase and uppercase were requested
    ConflictingCase,
    /// More than one renaming action was requested
    ConflictingActions { actions: Vec<String> },
    /// A name given for a renaming action contains a path separator
    SeparatorInName { action: String, value: String },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::PatternMatching { pattern, .. } => {
                write!(
                    f,
                    "Invalid regexp: {pattern}. Give a valid regexp (or none, to operate on all files)"
                )
            }
            Error::NoMatch { pattern } => {
                write!(
                    f,
                    "No files matched '{pattern}', check the correctness of your regexp or add --force to include all files"
                )
            }
            Error::MissingAction => {
                write!(
                    f,
                    "At least one of the renaming actions must be given, nothing to do"
                )
            }
            Error::ConflictingCase => {
                write!(f, "Can't use both lowercase and uppercase, choose one only")
            }
            Error::ConflictingActions { actions } => {
                write!(
                    f,
                    "Only one renaming action can be used at a time, got: {}",
                    actions.join(", ")
                )
            }
            Error::SeparatorInName { action, value } => {
                write!(
                    f,
                    "The {action} '{value}' can't contain a path separator, files are only renamed in place"
                )
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::PatternMatching { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Error {
    /// Process exit code matching this error
    pub fn exit_code(&self) -> u8 {
        if self.shows_usage() {
            EXIT_USAGE
        } else {
            EXIT_FAILURE
        }
    }

    /// Whether the usage line should be printed along with the message
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            Error::PatternMatching { .. }
                | Error::MissingAction
                | Error::ConflictingCase
                | Error::ConflictingActions { .. }
                | Error::SeparatorInName { .. }
        )
    }
}

/// Custom Result type for the renamer application
///
/// # Examples
/// ```
/// use renamer::prelude::{Result, no_match_error};
///
/// fn example_function(found: bool) -> Result<String> {
///     if found {
///         Ok("success".to_string())
///     } else {
///         Err(no_match_error("^a"))
///     }
/// }
/// # assert!(example_function(false).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a pattern matching error
pub fn pattern_matching_error(err: RegexError, pattern: &str) -> Error {
    Error::PatternMatching {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a no-match error
pub fn no_match_error(pattern: &str) -> Error {
    Error::NoMatch {
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a conflicting actions error
pub fn conflicting_actions_error(actions: &[&str]) -> Error {
    Error::ConflictingActions {
        actions: actions.iter().map(|a| a.to_string()).collect(),
    }
}

/// Helper function to create a separator-in-name error
pub fn separator_in_name_error(action: &str, value: &str) -> Error {
    Error::SeparatorInName {
        action: action.to_string(),
        value: value.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

//! Configuration data structures
//!
//! This module contains the raw option set collected from the command line and
//! the validated configuration consumed by the workflow.

use std::path::{PathBuf, is_separator};

use crate::constants::DEFAULT_TARGET_DIR;
use crate::errors::{Error, Result, conflicting_actions_error, separator_in_name_error};
use crate::file_ops::ApplyMode;
use crate::utils::expand_path;

/// The renaming action applied to every matched file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformation {
    /// Prepend a string to the whole filename
    Prefix(String),
    /// Insert a string between the stem and the extension
    Suffix(String),
    /// Replace the stem with `name` followed by a running counter
    Index { name: String, start: u64 },
    /// Lowercase the whole filename
    Lowercase,
    /// Uppercase the whole filename
    Uppercase,
}

impl Transformation {
    /// Short name of the action, as used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Transformation::Prefix(_) => "prefix",
            Transformation::Suffix(_) => "suffix",
            Transformation::Index { .. } => "index",
            Transformation::Lowercase => "lowercase",
            Transformation::Uppercase => "uppercase",
        }
    }
}

/// Options as given on the command line, before validation
///
/// Empty strings count as "not given", so `--prefix ""` requests nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub index: Option<String>,
    pub start_number: u64,
    pub pattern: Option<String>,
    pub target: PathBuf,
    pub lower_extension: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub copy: bool,
    pub dry_run: bool,
    pub force: bool,
    pub recursive: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        RenameOptions {
            prefix: None,
            suffix: None,
            index: None,
            start_number: 1,
            pattern: None,
            target: PathBuf::from(DEFAULT_TARGET_DIR),
            lower_extension: false,
            lowercase: false,
            uppercase: false,
            copy: false,
            dry_run: false,
            force: false,
            recursive: false,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Rejects names that would move the file to another directory
fn check_in_place(transformation: &Transformation) -> Result<()> {
    let value = match transformation {
        Transformation::Prefix(value) | Transformation::Suffix(value) => value,
        Transformation::Index { name, .. } => name,
        Transformation::Lowercase | Transformation::Uppercase => return Ok(()),
    };
    if value.chars().any(is_separator) {
        return Err(separator_in_name_error(transformation.name(), value));
    }
    Ok(())
}

impl RenameOptions {
    /// Lists the requested primary actions in priority order
    ///
    /// The order is prefix, suffix, index, lowercase, uppercase. The
    /// lower-extension switch is not a primary action.
    pub fn requested_transformations(&self) -> Vec<Transformation> {
        let mut requested = Vec::new();
        if let Some(prefix) = non_empty(&self.prefix) {
            requested.push(Transformation::Prefix(prefix));
        }
        if let Some(suffix) = non_empty(&self.suffix) {
            requested.push(Transformation::Suffix(suffix));
        }
        if let Some(name) = non_empty(&self.index) {
            requested.push(Transformation::Index {
                name,
                start: self.start_number,
            });
        }
        if self.lowercase {
            requested.push(Transformation::Lowercase);
        }
        if self.uppercase {
            requested.push(Transformation::Uppercase);
        }
        requested
    }

    /// Validates the options and builds the run configuration
    ///
    /// # Errors
    /// * `Error::ConflictingCase` if both lowercase and uppercase are set
    /// * `Error::MissingAction` if no action at all is requested
    /// * `Error::ConflictingActions` if more than one primary action is requested
    /// * `Error::SeparatorInName` if a prefix, suffix or index name contains a path separator
    pub fn validate(self) -> Result<Configuration> {
        if self.lowercase && self.uppercase {
            return Err(Error::ConflictingCase);
        }

        let mut requested = self.requested_transformations();
        if requested.is_empty() && !self.lower_extension {
            return Err(Error::MissingAction);
        }
        if requested.len() > 1 {
            let names: Vec<&str> = requested.iter().map(Transformation::name).collect();
            return Err(conflicting_actions_error(&names));
        }
        if let Some(transformation) = requested.first() {
            check_in_place(transformation)?;
        }

        let transformation = if requested.is_empty() {
            None
        } else {
            Some(requested.remove(0))
        };

        Ok(Configuration {
            transformation,
            lower_extension: self.lower_extension,
            pattern: non_empty(&self.pattern),
            target: expand_path(&self.target),
            copy: self.copy,
            dry_run: self.dry_run,
            force: self.force,
            recursive: self.recursive,
        })
    }
}

/// Validated configuration for one run
///
/// Built only through [`RenameOptions::validate`], so at least one of
/// `transformation` and `lower_extension` is always set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// The primary action, if any
    pub transformation: Option<Transformation>,
    /// Lowercase the extension, alone or on top of the primary action
    pub lower_extension: bool,
    /// Regular expression the filenames must match
    pub pattern: Option<String>,
    /// Directory to operate on
    pub target: PathBuf,
    pub copy: bool,
    pub dry_run: bool,
    pub force: bool,
    pub recursive: bool,
}

impl Configuration {
    /// The switches the applier needs for every file
    pub fn apply_mode(&self) -> ApplyMode {
        ApplyMode {
            copy: self.copy,
            dry_run: self.dry_run,
            force: self.force,
        }
    }
}

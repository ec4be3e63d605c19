//! Run report
//!
//! This module defines the outcome accumulated over one run.

use std::path::PathBuf;

use crate::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::file_ops::{ActionKind, ActionStatus, FileActionResult};

/// An operation the run carried out, or would carry out in a dry run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOperation {
    /// The source path of the file
    pub source: PathBuf,
    /// The destination path of the file
    pub destination: PathBuf,
    /// Rename or copy
    pub operation_type: ActionKind,
}

/// Statistics about the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of files found below the target
    pub files_found: usize,
    /// Number of files left after filtering
    pub files_matched: usize,
    /// Number of files renamed
    pub files_renamed: usize,
    /// Number of files copied
    pub files_copied: usize,
    /// Number of operations only reported (dry run)
    pub files_planned: usize,
    /// Number of files already carrying their new name
    pub files_unchanged: usize,
    /// Number of operations skipped because the destination exists
    pub files_blocked: usize,
    /// Number of failure units (blocked or failed operations)
    pub failures: usize,
    /// Number of files whose new name couldn't be computed
    pub transform_errors: usize,
}

/// Outcome of one run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Whether the run only reported the operations
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: RunStats,
    /// Operations carried out (or planned, in a dry run), in order
    pub operations: Vec<PlannedOperation>,
}

impl RunReport {
    pub fn new(dry_run: bool) -> Self {
        RunReport {
            dry_run,
            ..RunReport::default()
        }
    }

    /// Adds the result of one file action
    pub fn record(&mut self, result: &FileActionResult) {
        self.stats.failures += result.failures();
        match (result.status, result.kind) {
            (ActionStatus::Done, ActionKind::Rename) => self.stats.files_renamed += 1,
            (ActionStatus::Done, ActionKind::Copy) => self.stats.files_copied += 1,
            (ActionStatus::Planned, _) => self.stats.files_planned += 1,
            (ActionStatus::Unchanged, _) => self.stats.files_unchanged += 1,
            (ActionStatus::Blocked, _) => self.stats.files_blocked += 1,
            (ActionStatus::Failed, _) => {}
        }
        if result.is_intended() {
            self.operations.push(PlannedOperation {
                source: result.source_path.clone(),
                destination: result.target_path.clone(),
                operation_type: result.kind,
            });
        }
    }

    /// Counts a file whose new name couldn't be computed
    pub fn record_transform_error(&mut self) {
        self.stats.transform_errors += 1;
    }

    /// Whether every file went through without failure
    pub fn is_success(&self) -> bool {
        self.stats.failures == 0 && self.stats.transform_errors == 0
    }

    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }
}

//! File operations module
//!
//! This module contains the filesystem capability, its dry-run overlay and
//! the applier that renames or copies one file at a time.

mod actions;
mod filesystem;
mod simulated;

pub use actions::{ActionKind, ActionStatus, ApplyMode, FileActionResult, perform_file_action};
pub use filesystem::{FileSystem, LocalFileSystem};
pub use simulated::SimulatedFileSystem;

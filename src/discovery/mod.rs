//! File discovery module
//!
//! This module contains components for listing directories, collecting the
//! candidate files and filtering them.

mod lister;
mod matcher;
mod traverser;

pub use lister::{EntryKind, Listing, PathEntry, list_directory};
pub use matcher::FileMatcher;
pub use traverser::{Traversal, collect};

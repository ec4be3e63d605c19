//! Directory listing functionality
//!
//! This module lists the immediate entries of one directory and splits them
//! into sub-directories and files.

use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::file_ops::FileSystem;

/// Type of a directory entry, as reported by a non-dereferencing stat
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Anything that is not a directory, symlinks included
    File,
    Directory,
}

/// A path found while listing a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Absolute path of the entry
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// The entries of one directory, split by type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Resolves `directory` to an absolute path
///
/// An absolute path that is a directory is used as-is, anything else is
/// resolved against the working directory. Returns `None` if the path can't
/// be stat'ed or resolved.
fn resolve_directory(fs: &dyn FileSystem, directory: &Path) -> Option<PathBuf> {
    let kind = match fs.entry_kind(directory) {
        Ok(kind) => kind,
        Err(e) => {
            error!("Can't access {}: {e}", directory.display());
            return None;
        }
    };

    if directory.is_absolute() && kind == EntryKind::Directory {
        return Some(directory.to_path_buf());
    }

    match fs.absolute(directory) {
        Ok(path) => Some(path),
        Err(e) => {
            error!("Can't resolve {}: {e}", directory.display());
            None
        }
    }
}

/// Lists a directory
///
/// Errors never abort the run: an inaccessible or unreadable directory is
/// logged and yields an empty listing.
///
/// # Arguments
/// * `fs` - The filesystem to list
/// * `directory` - The directory, absolute or relative to the working directory
///
/// # Returns
/// * `Listing` - Sub-directories and files, in listing order
pub fn list_directory(fs: &dyn FileSystem, directory: &Path) -> Listing {
    let Some(complete_path) = resolve_directory(fs, directory) else {
        return Listing::default();
    };

    let entries = match fs.read_dir(&complete_path) {
        Ok(entries) => entries,
        Err(e) => {
            error!(
                "Target directory {} is not a directory or can't be accessed: {e}",
                complete_path.display()
            );
            return Listing::default();
        }
    };

    let mut listing = Listing::default();
    for entry in entries {
        match entry.kind {
            EntryKind::Directory => listing.directories.push(entry.path),
            EntryKind::File => listing.files.push(entry.path),
        }
    }

    debug!(
        "Listed {}: {} directories, {} files",
        complete_path.display(),
        listing.directories.len(),
        listing.files.len()
    );

    listing
}

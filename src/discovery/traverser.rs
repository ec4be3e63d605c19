//! Directory traversal functionality

use std::path::{Path, PathBuf};

use log::debug;

use crate::file_ops::FileSystem;

use super::lister::list_directory;

/// Everything found below the target directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Traversal {
    /// Directories found, in discovery order
    pub directories: Vec<PathBuf>,
    /// Files found, in discovery order
    pub files: Vec<PathBuf>,
}

/// Collects the files below `root`
///
/// `root` itself is always listed. With `recursive` set, the directory list
/// doubles as the work queue: every discovered directory is listed once, in
/// discovery order, and its own sub-directories are appended behind it.
/// Symlinked directories are listed as files and never descended into.
pub fn collect(fs: &dyn FileSystem, root: &Path, recursive: bool) -> Traversal {
    let listing = list_directory(fs, root);
    let mut traversal = Traversal {
        directories: listing.directories,
        files: listing.files,
    };

    if recursive {
        let mut next = 0;
        while next < traversal.directories.len() {
            let listing = list_directory(fs, &traversal.directories[next]);
            traversal.directories.extend(listing.directories);
            traversal.files.extend(listing.files);
            next += 1;
        }
    }

    debug!(
        "Found {} files in {} directories below {}",
        traversal.files.len(),
        traversal.directories.len(),
        root.display()
    );

    traversal
}

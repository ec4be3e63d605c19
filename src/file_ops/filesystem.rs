//! Filesystem capability
//!
//! The renaming pipeline never touches `std::fs` directly. It goes through the
//! [`FileSystem`] trait so that listing, probing and mutating files can be
//! substituted in tests.

use std::cmp::Ordering;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fs_extra::file::{CopyOptions, copy};
use log::warn;

use crate::discovery::{EntryKind, PathEntry};

/// The filesystem primitives used by the pipeline
pub trait FileSystem {
    /// Returns the type of the entry at `path` without following symlinks
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind>;

    /// Resolves `path` against the working directory
    fn absolute(&self, path: &Path) -> io::Result<PathBuf>;

    /// Lists the immediate entries of `directory`
    ///
    /// Entry paths are `directory` joined with the entry name.
    fn read_dir(&self, directory: &Path) -> io::Result<Vec<PathEntry>>;

    /// Renames `source` to `destination`
    fn rename(&self, source: &Path, destination: &Path) -> io::Result<()>;

    /// Copies the content of `source` into `destination`, creating or truncating it
    fn copy(&self, source: &Path, destination: &Path) -> io::Result<u64>;

    /// Whether both paths name the same file, e.g. differently cased names on a
    /// case-insensitive filesystem
    fn is_same_file(&self, first: &Path, second: &Path) -> bool;

    /// Whether anything exists at `path`, dangling symlinks included
    fn exists(&self, path: &Path) -> bool {
        self.entry_kind(path).is_ok()
    }
}

/// [`FileSystem`] backed by the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

fn kind_of(file_type: fs::FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    }
}

fn by_name(a: &PathEntry, b: &PathEntry) -> Ordering {
    a.path.file_name().cmp(&b.path.file_name())
}

/// Turns raw directory entries into sorted [`PathEntry`] values
///
/// Entries that can't be read or whose type can't be determined are skipped
/// with a warning, the rest of the listing is kept.
fn partition_entries<I>(directory: &Path, entries: I) -> Vec<PathEntry>
where
    I: IntoIterator<Item = io::Result<(OsString, io::Result<EntryKind>)>>,
{
    let mut listed = Vec::new();
    for entry in entries {
        let (name, kind) = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {e}", directory.display());
                continue;
            }
        };
        let path = directory.join(name);
        match kind {
            Ok(kind) => listed.push(PathEntry { path, kind }),
            Err(e) => warn!("Skipping {}: {e}", path.display()),
        }
    }
    // Listing order drives index numbering, keep it stable
    listed.sort_by(by_name);
    listed
}

impl FileSystem for LocalFileSystem {
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        Ok(kind_of(fs::symlink_metadata(path)?.file_type()))
    }

    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        std::path::absolute(path)
    }

    fn read_dir(&self, directory: &Path) -> io::Result<Vec<PathEntry>> {
        let entries = fs::read_dir(directory)?
            .map(|entry| entry.map(|e| (e.file_name(), e.file_type().map(kind_of))));
        Ok(partition_entries(directory, entries))
    }

    fn rename(&self, source: &Path, destination: &Path) -> io::Result<()> {
        fs::rename(source, destination)
    }

    fn copy(&self, source: &Path, destination: &Path) -> io::Result<u64> {
        let options = CopyOptions::new().overwrite(true);
        copy(source, destination, &options).map_err(io::Error::other)
    }

    #[cfg(unix)]
    fn is_same_file(&self, first: &Path, second: &Path) -> bool {
        use std::os::unix::fs::MetadataExt;

        match (fs::symlink_metadata(first), fs::symlink_metadata(second)) {
            (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
            _ => false,
        }
    }

    #[cfg(not(unix))]
    fn is_same_file(&self, first: &Path, second: &Path) -> bool {
        match (fs::canonicalize(first), fs::canonicalize(second)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

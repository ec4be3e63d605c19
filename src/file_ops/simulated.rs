//! Dry-run filesystem
//!
//! Wraps a real [`FileSystem`] and records the renames and copies a dry run
//! plans, without touching the disk. Later existence checks see the paths
//! that earlier planned operations would have created or vacated.

use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use log::trace;

use crate::discovery::{EntryKind, PathEntry};

use super::actions::{ActionKind, ActionStatus, FileActionResult};
use super::filesystem::FileSystem;

/// [`FileSystem`] overlay used for dry runs
pub struct SimulatedFileSystem<'a> {
    inner: &'a dyn FileSystem,
    created: RefCell<HashSet<PathBuf>>,
    vacated: RefCell<HashSet<PathBuf>>,
}

impl<'a> SimulatedFileSystem<'a> {
    pub fn new(inner: &'a dyn FileSystem) -> Self {
        SimulatedFileSystem {
            inner,
            created: RefCell::new(HashSet::new()),
            vacated: RefCell::new(HashSet::new()),
        }
    }

    /// Applies a planned operation to the overlay
    ///
    /// Only `Planned` results change anything.
    pub fn replay(&self, result: &FileActionResult) -> io::Result<()> {
        if result.status != ActionStatus::Planned {
            return Ok(());
        }
        match result.kind {
            ActionKind::Rename => self.rename(&result.source_path, &result.target_path),
            ActionKind::Copy => self
                .copy(&result.source_path, &result.target_path)
                .map(|_| ()),
        }
    }

    fn is_overlaid(&self, path: &Path) -> bool {
        self.created.borrow().contains(path) || self.vacated.borrow().contains(path)
    }

    fn create(&self, path: &Path) {
        self.vacated.borrow_mut().remove(path);
        self.created.borrow_mut().insert(path.to_path_buf());
    }
}

impl FileSystem for SimulatedFileSystem<'_> {
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        if self.created.borrow().contains(path) {
            return Ok(EntryKind::File);
        }
        if self.vacated.borrow().contains(path) {
            return Err(io::Error::from(io::ErrorKind::NotFound));
        }
        self.inner.entry_kind(path)
    }

    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        self.inner.absolute(path)
    }

    fn read_dir(&self, directory: &Path) -> io::Result<Vec<PathEntry>> {
        self.inner.read_dir(directory)
    }

    fn rename(&self, source: &Path, destination: &Path) -> io::Result<()> {
        trace!(
            "Simulating rename of {} to {}",
            source.display(),
            destination.display()
        );
        self.created.borrow_mut().remove(source);
        self.vacated.borrow_mut().insert(source.to_path_buf());
        self.create(destination);
        Ok(())
    }

    fn copy(&self, source: &Path, destination: &Path) -> io::Result<u64> {
        trace!(
            "Simulating copy of {} to {}",
            source.display(),
            destination.display()
        );
        self.create(destination);
        Ok(0)
    }

    fn is_same_file(&self, first: &Path, second: &Path) -> bool {
        // Paths touched by the plan no longer name what is on disk
        if self.is_overlaid(first) || self.is_overlaid(second) {
            return first == second;
        }
        self.inner.is_same_file(first, second)
    }
}

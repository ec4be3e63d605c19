//! File operation functionality
//!
//! This module applies one planned rename or copy to the filesystem and
//! reports what happened. Failures never propagate out of this module, they
//! are logged and returned as part of the [`FileActionResult`].

use std::path::{Path, PathBuf};

use colored::Colorize;
use log::{error, info};

use crate::errors::file_operation_error;
use crate::logging::format_message;

use super::filesystem::FileSystem;

/// Type of file operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Rename the source in place
    Rename,
    /// Copy the source to the new name, leaving it untouched
    Copy,
}

impl ActionKind {
    fn verb(&self) -> &'static str {
        match self {
            ActionKind::Rename => "Renaming",
            ActionKind::Copy => "Copying",
        }
    }

    fn operation(&self) -> &'static str {
        match self {
            ActionKind::Rename => "rename",
            ActionKind::Copy => "copy",
        }
    }
}

/// Switches controlling how a planned operation is applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyMode {
    /// Copy instead of renaming
    pub copy: bool,
    /// Only report the operation
    pub dry_run: bool,
    /// Write even if the destination already exists
    pub force: bool,
}

impl ApplyMode {
    pub fn action_kind(&self) -> ActionKind {
        if self.copy {
            ActionKind::Copy
        } else {
            ActionKind::Rename
        }
    }
}

/// Outcome of one planned operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    /// The file was renamed or copied
    Done,
    /// Dry run, the operation was only reported
    Planned,
    /// The destination is the source itself, nothing to do
    Unchanged,
    /// The destination exists and force is off
    Blocked,
    /// The filesystem refused the operation
    Failed,
}

/// Result of performing a file action
#[derive(Debug, Clone)]
pub struct FileActionResult {
    /// The source path
    pub source_path: PathBuf,
    /// The target path
    pub target_path: PathBuf,
    /// Rename or copy
    pub kind: ActionKind,
    /// What happened
    pub status: ActionStatus,
}

impl FileActionResult {
    /// Number of failure units this operation adds to the run
    pub fn failures(&self) -> usize {
        match self.status {
            ActionStatus::Blocked | ActionStatus::Failed => 1,
            _ => 0,
        }
    }

    /// Whether the operation is one the run intended to carry out
    pub fn is_intended(&self) -> bool {
        matches!(self.status, ActionStatus::Done | ActionStatus::Planned)
    }
}

fn announce(kind: ActionKind, source: &Path, target: &Path, suffix: &str) {
    let target_name = target.display().to_string();
    let message = format!(
        "{} {} to {}{}",
        kind.verb(),
        source.display(),
        target_name,
        suffix
    );
    let colored_message = format!(
        "{} {} to {}{}",
        kind.verb(),
        source.display(),
        target_name.as_str().bold(),
        suffix
    );
    info!("{}", format_message(&message, &colored_message));
}

/// Performs a file action (copy or rename)
///
/// The destination is checked first. An existing destination blocks the
/// operation unless `mode.force` is set, and counts as one failure. A dry run
/// goes through the same checks and stops right before touching the disk, so
/// it reports exactly what a live run would attempt.
///
/// # Arguments
/// * `fs` - The filesystem to operate on
/// * `source` - The file to rename or copy
/// * `target` - The new path
/// * `mode` - Copy, dry-run and force switches
///
/// # Returns
/// * `FileActionResult` - The operation and its status
pub fn perform_file_action(
    fs: &dyn FileSystem,
    source: &Path,
    target: &Path,
    mode: ApplyMode,
) -> FileActionResult {
    let kind = mode.action_kind();
    let result = |status| FileActionResult {
        source_path: source.to_path_buf(),
        target_path: target.to_path_buf(),
        kind,
        status,
    };

    if source == target {
        info!("{} is already named as requested", source.display());
        return result(ActionStatus::Unchanged);
    }

    if fs.exists(target) {
        if fs.is_same_file(source, target) {
            // Case-only rename on a case-insensitive filesystem is fine,
            // copying a file onto itself is not
            if kind == ActionKind::Copy {
                info!(
                    "{} and {} are the same file, not copying",
                    source.display(),
                    target.display()
                );
                return result(ActionStatus::Unchanged);
            }
        } else if !mode.force {
            error!(
                "File {} already exists! Use --force to overwrite it",
                target.display()
            );
            return result(ActionStatus::Blocked);
        }
    }

    if mode.dry_run {
        announce(kind, source, target, " (dry-run)");
        return result(ActionStatus::Planned);
    }

    let outcome = match kind {
        ActionKind::Copy => fs.copy(source, target).map(|_| ()),
        ActionKind::Rename => fs.rename(source, target),
    };

    match outcome {
        Ok(()) => {
            announce(kind, source, target, "");
            result(ActionStatus::Done)
        }
        Err(e) => {
            let detail = e.to_string();
            let error = file_operation_error(e, source.to_path_buf(), kind.operation());
            error!("{error} to {}: {detail}", target.display());
            result(ActionStatus::Failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::{EntryKind, PathEntry};
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::io;

    /// In-memory filesystem whose mutations can be made to fail
    #[derive(Default)]
    struct FakeFs {
        files: RefCell<BTreeSet<PathBuf>>,
        fail_writes: bool,
    }

    impl FakeFs {
        fn with_files(files: &[&str]) -> Self {
            FakeFs {
                files: RefCell::new(files.iter().map(PathBuf::from).collect()),
                fail_writes: false,
            }
        }

        fn failing(files: &[&str]) -> Self {
            FakeFs {
                fail_writes: true,
                ..FakeFs::with_files(files)
            }
        }

        fn has(&self, path: &str) -> bool {
            self.files.borrow().contains(Path::new(path))
        }
    }

    impl FileSystem for FakeFs {
        fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
            if self.files.borrow().contains(path) {
                Ok(EntryKind::File)
            } else {
                Err(io::Error::from(io::ErrorKind::NotFound))
            }
        }

        fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
            Ok(path.to_path_buf())
        }

        fn read_dir(&self, _directory: &Path) -> io::Result<Vec<PathEntry>> {
            Ok(Vec::new())
        }

        fn rename(&self, source: &Path, destination: &Path) -> io::Result<()> {
            if self.fail_writes {
                return Err(io::Error::from(io::ErrorKind::PermissionDenied));
            }
            let mut files = self.files.borrow_mut();
            files.remove(source);
            files.insert(destination.to_path_buf());
            Ok(())
        }

        fn copy(&self, _source: &Path, destination: &Path) -> io::Result<u64> {
            if self.fail_writes {
                return Err(io::Error::from(io::ErrorKind::PermissionDenied));
            }
            self.files.borrow_mut().insert(destination.to_path_buf());
            Ok(0)
        }

        fn is_same_file(&self, first: &Path, second: &Path) -> bool {
            first == second
        }
    }

    fn apply(fs: &FakeFs, source: &str, target: &str, mode: ApplyMode) -> FileActionResult {
        perform_file_action(fs, Path::new(source), Path::new(target), mode)
    }

    #[test]
    fn test_rename() {
        let fs = FakeFs::with_files(&["/d/a.txt"]);
        let result = apply(&fs, "/d/a.txt", "/d/b.txt", ApplyMode::default());

        assert_eq!(result.status, ActionStatus::Done);
        assert_eq!(result.kind, ActionKind::Rename);
        assert_eq!(result.failures(), 0);
        assert!(!fs.has("/d/a.txt"));
        assert!(fs.has("/d/b.txt"));
    }

    #[test]
    fn test_copy_keeps_source() {
        let fs = FakeFs::with_files(&["/d/a.txt"]);
        let mode = ApplyMode {
            copy: true,
            ..ApplyMode::default()
        };
        let result = apply(&fs, "/d/a.txt", "/d/b.txt", mode);

        assert_eq!(result.status, ActionStatus::Done);
        assert_eq!(result.kind, ActionKind::Copy);
        assert!(fs.has("/d/a.txt"));
        assert!(fs.has("/d/b.txt"));
    }

    #[test]
    fn test_dry_run_does_not_mutate() {
        let fs = FakeFs::with_files(&["/d/a.txt"]);
        let mode = ApplyMode {
            dry_run: true,
            ..ApplyMode::default()
        };
        let result = apply(&fs, "/d/a.txt", "/d/b.txt", mode);

        assert_eq!(result.status, ActionStatus::Planned);
        assert!(result.is_intended());
        assert_eq!(result.failures(), 0);
        assert!(fs.has("/d/a.txt"));
        assert!(!fs.has("/d/b.txt"));
    }

    #[test]
    fn test_existing_destination_blocks_without_force() {
        let fs = FakeFs::with_files(&["/d/a.txt", "/d/b.txt"]);
        let result = apply(&fs, "/d/a.txt", "/d/b.txt", ApplyMode::default());

        assert_eq!(result.status, ActionStatus::Blocked);
        assert_eq!(result.failures(), 1);
        assert!(fs.has("/d/a.txt"), "Blocked rename must not touch the source");
    }

    #[test]
    fn test_existing_destination_blocks_dry_run_too() {
        let fs = FakeFs::with_files(&["/d/a.txt", "/d/b.txt"]);
        let mode = ApplyMode {
            dry_run: true,
            ..ApplyMode::default()
        };
        let result = apply(&fs, "/d/a.txt", "/d/b.txt", mode);

        assert_eq!(result.status, ActionStatus::Blocked);
        assert_eq!(result.failures(), 1);
    }

    #[test]
    fn test_force_overwrites_existing_destination() {
        let fs = FakeFs::with_files(&["/d/a.txt", "/d/b.txt"]);
        let mode = ApplyMode {
            force: true,
            ..ApplyMode::default()
        };
        let result = apply(&fs, "/d/a.txt", "/d/b.txt", mode);

        assert_eq!(result.status, ActionStatus::Done);
        assert_eq!(result.failures(), 0);
        assert!(!fs.has("/d/a.txt"));
    }

    #[test]
    fn test_same_path_is_unchanged() {
        let fs = FakeFs::with_files(&["/d/a.txt"]);
        let result = apply(&fs, "/d/a.txt", "/d/a.txt", ApplyMode::default());

        assert_eq!(result.status, ActionStatus::Unchanged);
        assert_eq!(result.failures(), 0);
        assert!(!result.is_intended());
    }

    #[test]
    fn test_failed_rename_counts_one_failure() {
        let fs = FakeFs::failing(&["/d/a.txt"]);
        let result = apply(&fs, "/d/a.txt", "/d/b.txt", ApplyMode::default());

        assert_eq!(result.status, ActionStatus::Failed);
        assert_eq!(result.failures(), 1);
    }

    #[test]
    fn test_failed_copy_counts_one_failure() {
        let fs = FakeFs::failing(&["/d/a.txt"]);
        let mode = ApplyMode {
            copy: true,
            ..ApplyMode::default()
        };
        let result = apply(&fs, "/d/a.txt", "/d/b.txt", mode);

        assert_eq!(result.status, ActionStatus::Failed);
        assert_eq!(result.failures(), 1);
    }
}

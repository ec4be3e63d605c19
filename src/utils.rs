use std::path::{Path, PathBuf};

use shellexpand::tilde;

use crate::errors::{Result, invalid_filename_error, path_operation_error};

/// Expands a leading `~` in a user-supplied path
pub fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(p) => PathBuf::from(tilde(p).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Returns the last component of a path as a string
///
/// # Errors
/// * Returns an error if the path has no filename
/// * Returns an error if the filename is not valid Unicode
pub fn base_name(path: &Path) -> Result<&str> {
    path.file_name()
        .ok_or_else(|| path_operation_error(path.to_path_buf(), "get filename of"))
        .and_then(|os_str| {
            os_str
                .to_str()
                .ok_or_else(|| invalid_filename_error(path.to_path_buf()))
        })
}

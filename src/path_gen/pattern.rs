//! Filename manipulation
//!
//! Pure functions building a new filename from an old one. None of them look
//! at the directory part of a path.

use crate::constants::INDEX_WIDTH;

/// Splits a filename into stem and extension
///
/// The extension starts at the last `.` and keeps it, so `photo.jpg` gives
/// `("photo", ".jpg")`. A name without a dot has an empty extension, and a
/// dot-file like `.bashrc` is all extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(position) => name.split_at(position),
        None => (name, ""),
    }
}

pub fn with_prefix(name: &str, prefix: &str) -> String {
    format!("{prefix}{name}")
}

pub fn with_suffix(name: &str, suffix: &str) -> String {
    let (stem, extension) = split_extension(name);
    format!("{stem}{suffix}{extension}")
}

/// Replaces the stem with `base` and a zero-padded counter
pub fn indexed(name: &str, base: &str, counter: u64) -> String {
    let (_, extension) = split_extension(name);
    format!("{base}{counter:0width$}{extension}", width = INDEX_WIDTH)
}

pub fn lowercase_extension(name: &str) -> String {
    let (stem, extension) = split_extension(name);
    format!("{stem}{}", extension.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("photo.jpg"), ("photo", ".jpg"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_extension("README"), ("README", ""));
        assert_eq!(split_extension(".bashrc"), ("", ".bashrc"));
        assert_eq!(split_extension("trailing."), ("trailing", "."));
    }

    #[test]
    fn test_with_prefix() {
        assert_eq!(with_prefix("photo.jpg", "2024_"), "2024_photo.jpg");
    }

    #[test]
    fn test_with_suffix() {
        assert_eq!(with_suffix("photo.jpg", "_edit"), "photo_edit.jpg");
        assert_eq!(with_suffix("README", "_old"), "README_old");
        assert_eq!(with_suffix("archive.tar.gz", "_v2"), "archive.tar_v2.gz");
    }

    #[test]
    fn test_indexed() {
        assert_eq!(indexed("a.jpg", "img", 1), "img001.jpg");
        assert_eq!(indexed("a.jpg", "img", 42), "img042.jpg");
        assert_eq!(indexed("notes", "doc", 7), "doc007");
        // Wider counters are not truncated
        assert_eq!(indexed("a.jpg", "img", 1234), "img1234.jpg");
    }

    #[test]
    fn test_lowercase_extension() {
        assert_eq!(lowercase_extension("MyFile.TXT"), "MyFile.txt");
        assert_eq!(lowercase_extension("ARCHIVE.TAR.GZ"), "ARCHIVE.TAR.gz");
        assert_eq!(lowercase_extension("README"), "README");
    }
}

//! File matching functionality
//!
//! This module filters the candidate files by a regular expression applied to
//! their filename.

use std::path::PathBuf;

use log::{debug, info};
use regex::Regex;

use crate::errors::{Result, no_match_error, pattern_matching_error};

/// Filter applied to the candidate files
#[derive(Debug, Clone)]
pub struct FileMatcher {
    pattern: Option<Regex>,
}

impl FileMatcher {
    /// Compiles the filter pattern
    ///
    /// An absent or empty pattern matches everything.
    ///
    /// # Errors
    /// Returns `Error::PatternMatching` if the pattern is not a valid regular expression
    pub fn new(pattern: Option<&str>) -> Result<FileMatcher> {
        let pattern = match pattern {
            Some(p) if !p.is_empty() => {
                Some(Regex::new(p).map_err(|e| pattern_matching_error(e, p))?)
            }
            _ => None,
        };
        Ok(FileMatcher { pattern })
    }

    /// Checks the filename of `path` against the pattern
    pub fn is_match(&self, path: &std::path::Path) -> bool {
        match (&self.pattern, path.file_name()) {
            (None, _) => true,
            (Some(regex), Some(name)) => regex.is_match(&name.to_string_lossy()),
            (Some(_), None) => false,
        }
    }

    /// Keeps the files whose name matches, in their original order
    ///
    /// When nothing matches and `force` is set, every file is kept.
    ///
    /// # Errors
    /// Returns `Error::NoMatch` when nothing matches and `force` is not set
    pub fn filter(&self, files: Vec<PathBuf>, force: bool) -> Result<Vec<PathBuf>> {
        let Some(regex) = &self.pattern else {
            return Ok(files);
        };

        let matching: Vec<PathBuf> = files.iter().filter(|f| self.is_match(f)).cloned().collect();
        debug!(
            "{} of {} files match '{}'",
            matching.len(),
            files.len(),
            regex.as_str()
        );

        if !matching.is_empty() {
            return Ok(matching);
        }

        if force {
            info!("No files matched, including all files anyway (--force enabled)");
            Ok(files)
        } else {
            Err(no_match_error(regex.as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_no_pattern_is_identity() {
        let matcher = FileMatcher::new(None).unwrap();
        let files = paths(&["/d/a.txt", "/d/b.txt"]);
        assert_eq!(matcher.filter(files.clone(), false).unwrap(), files);

        let matcher = FileMatcher::new(Some("")).unwrap();
        assert_eq!(matcher.filter(files.clone(), false).unwrap(), files);
    }

    #[test]
    fn test_invalid_pattern() {
        let result = FileMatcher::new(Some("(unclosed"));
        assert!(matches!(result, Err(Error::PatternMatching { .. })));
    }

    #[test]
    fn test_matches_base_name_only() {
        let matcher = FileMatcher::new(Some("^a")).unwrap();
        let files = paths(&["/abc/b.txt", "/x/a.txt", "/x/ba.txt", "/abc/a.jpg"]);
        assert_eq!(
            matcher.filter(files, false).unwrap(),
            paths(&["/x/a.txt", "/abc/a.jpg"])
        );
    }

    #[test]
    fn test_no_match_without_force() {
        let matcher = FileMatcher::new(Some(r"\.png$")).unwrap();
        let result = matcher.filter(paths(&["/d/a.txt"]), false);
        assert!(matches!(result, Err(Error::NoMatch { .. })));
    }

    #[test]
    fn test_no_match_on_empty_list() {
        let matcher = FileMatcher::new(Some("a")).unwrap();
        assert!(matcher.filter(Vec::new(), false).is_err());
    }

    #[test]
    fn test_no_match_with_force_keeps_everything() {
        let matcher = FileMatcher::new(Some(r"\.png$")).unwrap();
        let files = paths(&["/d/b.txt", "/d/a.txt"]);
        assert_eq!(matcher.filter(files.clone(), true).unwrap(), files);
    }
}

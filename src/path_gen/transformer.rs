//! Destination path generation
//!
//! This module turns each candidate file into its destination path according
//! to the configured transformation.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::{Configuration, Transformation};
use crate::errors::Result;
use crate::utils::base_name;

use super::pattern::{indexed, lowercase_extension, with_prefix, with_suffix};

/// Stateful renamer for one run
///
/// Holds the index counter, which starts at the configured value and moves
/// forward once per call to [`Transformer::destination`], in call order.
#[derive(Debug, Clone)]
pub struct Transformer {
    transformation: Option<Transformation>,
    lower_extension: bool,
    counter: u64,
}

impl Transformer {
    /// Creates a transformer applying `transformation`, then optionally
    /// lowercasing the extension of the result
    pub fn new(transformation: Option<Transformation>, lower_extension: bool) -> Transformer {
        let counter = match &transformation {
            Some(Transformation::Index { start, .. }) => *start,
            _ => 0,
        };
        Transformer {
            transformation,
            lower_extension,
            counter,
        }
    }

    pub fn from_config(config: &Configuration) -> Transformer {
        Transformer::new(config.transformation.clone(), config.lower_extension)
    }

    /// Computes the new filename for `name`
    ///
    /// Advances the index counter.
    pub fn new_name(&mut self, name: &str) -> String {
        let counter = self.counter;
        self.counter = self.counter.saturating_add(1);

        let renamed = match &self.transformation {
            Some(Transformation::Prefix(prefix)) => with_prefix(name, prefix),
            Some(Transformation::Suffix(suffix)) => with_suffix(name, suffix),
            Some(Transformation::Index { name: base, .. }) => indexed(name, base, counter),
            Some(Transformation::Lowercase) => name.to_lowercase(),
            Some(Transformation::Uppercase) => name.to_uppercase(),
            None => name.to_string(),
        };

        if self.lower_extension {
            lowercase_extension(&renamed)
        } else {
            renamed
        }
    }

    /// Computes the destination of `source`, in the same directory
    ///
    /// The counter advances even when the filename can't be read, so the
    /// numbering of the following files does not depend on it.
    ///
    /// # Errors
    /// Returns an error if `source` has no filename or it is not valid Unicode
    pub fn destination(&mut self, source: &Path) -> Result<PathBuf> {
        let name = match base_name(source) {
            Ok(name) => name,
            Err(e) => {
                self.counter = self.counter.saturating_add(1);
                return Err(e);
            }
        };
        let new_name = self.new_name(name);
        let target = source.with_file_name(&new_name);
        debug!("{} -> {}", source.display(), target.display());
        Ok(target)
    }
}

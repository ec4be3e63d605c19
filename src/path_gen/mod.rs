//! Path generation module
//!
//! This module contains components for generating destination paths.

mod pattern;
mod transformer;

pub use pattern::{indexed, lowercase_extension, split_extension, with_prefix, with_suffix};
pub use transformer::Transformer;

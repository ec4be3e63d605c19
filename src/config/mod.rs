//! Configuration module
//!
//! This module contains components for collecting and validating the run configuration.

mod loader;
mod model;

pub use model::{Configuration, RenameOptions, Transformation};

//! Workflow module
//!
//! This module contains components for orchestrating the workflow steps.

mod context;
mod engine;

pub use context::{PlannedOperation, RunReport, RunStats};
pub use engine::process_files;

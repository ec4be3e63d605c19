//! Workflow engine
//!
//! This module contains the engine that orchestrates the workflow steps.

use log::{debug, error, info, warn};

use crate::config::Configuration;
use crate::discovery::{FileMatcher, collect};
use crate::errors::Result;
use crate::file_ops::{FileSystem, SimulatedFileSystem, perform_file_action};
use crate::path_gen::Transformer;

use super::context::RunReport;

/// Renames the files described by the configuration
///
/// This function orchestrates the workflow steps:
/// 1. Compile the filter pattern
/// 2. Collect the files below the target directory
/// 3. Filter them by the pattern
/// 4. Compute each destination and rename or copy the file, one at a time
///
/// Per-file problems are logged and counted in the returned report, they
/// don't stop the run.
///
/// # Arguments
/// * `config` - The validated configuration
/// * `fs` - The filesystem to operate on
///
/// # Returns
/// * `Result<RunReport>` - The outcome of the run
///
/// # Errors
/// * Returns an error if the pattern is not a valid regular expression
/// * Returns an error if no file matches the pattern and force is not set
pub fn process_files(config: &Configuration, fs: &dyn FileSystem) -> Result<RunReport> {
    // Step 1: Compile the pattern before touching the filesystem
    let matcher = FileMatcher::new(config.pattern.as_deref())?;

    let mut report = RunReport::new(config.dry_run);

    // Step 2: Collect the candidate files
    let traversal = collect(fs, &config.target, config.recursive);
    report.stats.files_found = traversal.files.len();

    // Step 3: Filter them
    let files = matcher.filter(traversal.files, config.force)?;
    report.stats.files_matched = files.len();

    info!(
        "Processing {} files{}...",
        files.len(),
        if config.dry_run { " (dry run)" } else { "" }
    );

    // Step 4: Rename or copy, in order
    let mode = config.apply_mode();
    let mut transformer = Transformer::from_config(config);
    // Dry runs see the outcome of the operations planned before them
    let simulated = SimulatedFileSystem::new(fs);
    for source in &files {
        debug!("Processing file: {}", source.display());
        let target = match transformer.destination(source) {
            Ok(target) => target,
            Err(e) => {
                error!("Failed to generate destination path: {e}");
                report.record_transform_error();
                continue;
            }
        };

        let result = if config.dry_run {
            let result = perform_file_action(&simulated, source, &target, mode);
            if let Err(e) = simulated.replay(&result) {
                warn!("Failed to simulate {}: {e}", source.display());
            }
            result
        } else {
            perform_file_action(fs, source, &target, mode)
        };
        report.record(&result);
    }

    if config.dry_run {
        info!(
            "\n{} operations planned, {} files would be left untouched",
            report.stats.files_planned,
            report.stats.files_unchanged + report.stats.files_blocked
        );
        info!("Run without --dry-run to execute these operations.");
    }

    if report.is_success() {
        info!("\nRenaming complete");
    } else {
        info!("\nNot all files were correctly renamed, check the previous error messages");
    }

    Ok(report)
}

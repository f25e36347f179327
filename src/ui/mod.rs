//! User interface module - run output.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Rendering a complete workflow result

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_commit_analysis, display_error, display_report_update,
    display_status, display_success,
};

use crate::cli::WorkflowResult;

/// Displays everything a finished run produced.
///
/// Warnings come first, then the bumped reports, failures, and the created
/// commit and tags. In dry-run mode the same information is shown as a plan.
///
/// # Arguments
/// * `result` - The workflow result
/// * `range` - The range expression, e.g. "origin/main~1..HEAD"
/// * `dry_run` - Whether nothing was written
pub fn display_workflow_result(result: &WorkflowResult, range: &str, dry_run: bool) {
    display_commit_analysis(&result.commits, range, result.level);

    for warning in &result.warnings {
        display_boundary_warning(warning);
    }

    for update in &result.updated {
        display_report_update(update, dry_run);
    }

    for failure in &result.failed {
        display_error(&format!(
            "Report '{}' was not updated: {}",
            failure.report, failure.error
        ));
    }

    if let Some(hash) = &result.commit {
        let short = hash.get(..7).unwrap_or(hash);
        display_success(&format!("Committed version bumps ({})", short));
    }

    for tag in &result.tags {
        if dry_run {
            display_status(&format!("Would create tag: {}", tag));
        } else {
            display_success(&format!("Created tag: {}", tag));
        }
    }

    if dry_run {
        display_status("Dry run: no files or refs were changed");
    } else if result.updated.is_empty() && result.failed.is_empty() {
        display_status("No report versions changed");
    }
}

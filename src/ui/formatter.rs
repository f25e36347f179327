//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic. The run is unattended,
//! so there is no interaction: status and results go to stdout, warnings and
//! errors to stderr.

use crate::boundary::BoundaryWarning;
use crate::domain::{BumpLevel, Commit};
use crate::updater::ReportUpdate;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Shorten a commit message to its first line, at most 60 characters.
pub fn commit_headline(message: &str) -> String {
    let first_line = message.lines().next().unwrap_or("");
    if first_line.chars().count() > 60 {
        let truncated: String = first_line.chars().take(60).collect();
        format!("{}…", truncated)
    } else {
        first_line.to_string()
    }
}

/// Display the analyzed commit range and the resulting bump level.
///
/// Shows up to 10 commits; if more exist, displays count of remaining commits.
///
/// # Arguments
/// * `commits` - Commits found in the range
/// * `range` - The range expression, e.g. "origin/main~1..HEAD"
/// * `level` - The bump level the commits imply
pub fn display_commit_analysis(commits: &[Commit], range: &str, level: BumpLevel) {
    println!("\n\x1b[1mAnalyzing commits in {}\x1b[0m", range);
    println!("\x1b[4m{} commit(s):\x1b[0m", commits.len());

    for commit in commits.iter().take(10) {
        println!(
            "  {} {}",
            commit.short_hash(),
            commit_headline(&commit.message)
        );
    }

    if commits.len() > 10 {
        println!("  ... and {} more commits", commits.len() - 10);
    }

    println!("Bump level: \x1b[1m{}\x1b[0m", level);
}

/// Format the one-line description of a report bump.
pub fn format_report_update(update: &ReportUpdate) -> String {
    format!(
        "{}: {} -> {}",
        update.report, update.previous, update.version
    )
}

/// Display a bumped report (or a planned bump in dry-run mode).
pub fn display_report_update(update: &ReportUpdate, dry_run: bool) {
    if dry_run {
        display_status(&format!("Would bump {}", format_report_update(update)));
    } else {
        display_success(&format!("Bumped {}", format_report_update(update)));
    }
}

//! Main workflow orchestration logic
//!
//! This module sequences a bump run: classify the commit range, locate the
//! changed reports, update each report's files, then commit and tag. It is
//! kept apart from argument parsing so it can be driven programmatically
//! against any [Repository].

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{error, info, instrument, warn};

use crate::analyzer::BumpAnalyzer;
use crate::boundary::BoundaryWarning;
use crate::config::{ChangelogConfig, Config};
use crate::domain::{BumpLevel, ChangelogRenderer, ChangelogStyle, Commit, Report};
use crate::error::Result;
use crate::git::Repository;
use crate::updater::{ReportUpdate, ReportUpdater};

/// Arguments for the bump workflow
///
/// Range, layout and commit/tag behavior come from [Config]; these are the
/// per-invocation settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Compute the plan without writing files or touching version control
    pub dry_run: bool,

    /// Date written into changelog headings
    pub date: NaiveDate,
}

/// A report whose update was abandoned
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFailure {
    pub report: Report,
    pub error: String,
}

/// Result of a bump workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowResult {
    /// Bump level decided from the commit range
    pub level: BumpLevel,

    /// Commits found in the range
    pub commits: Vec<Commit>,

    /// Reports bumped (or, in a dry run, that would be bumped)
    pub updated: Vec<ReportUpdate>,

    /// Reports without a version file
    pub skipped: Vec<Report>,

    /// Reports whose update failed
    pub failed: Vec<ReportFailure>,

    /// Hash of the bump commit, if one was created
    pub commit: Option<String>,

    /// Tags created (or, in a dry run, planned)
    pub tags: Vec<String>,

    pub warnings: Vec<BoundaryWarning>,
}

impl WorkflowResult {
    /// True when no report failed
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Main bump workflow
///
/// Orchestrates the whole run:
/// 1. Read the commit range and decide the bump level
/// 2. Stop early when no commit carries a marker
/// 3. Locate the reports touched by the range
/// 4. Bump, log and stage each report in name order
/// 5. Commit the staged files and tag each bumped report
///
/// Gateway errors abort immediately. Report-scoped errors (malformed
/// version, unwritable changelog) are recorded in the result and the
/// remaining reports are still processed.
#[instrument(skip_all, fields(from = %config.range.from, to = %config.range.to, dry_run = args.dry_run))]
pub fn run_bump_workflow<R: Repository>(
    repo: &R,
    config: &Config,
    args: &BumpWorkflowArgs,
) -> Result<WorkflowResult> {
    let range = &config.range;
    let analysis = BumpAnalyzer::new().analyze_repository_range(repo, &range.from, &range.to)?;

    let mut result = WorkflowResult {
        level: analysis.level,
        commits: analysis.commits,
        ..WorkflowResult::default()
    };

    if result.commits.is_empty() {
        result.warnings.push(BoundaryWarning::EmptyRange {
            from: range.from.clone(),
            to: range.to.clone(),
        });
    }

    if result.level == BumpLevel::None {
        if !result.commits.is_empty() {
            result.warnings.push(BoundaryWarning::NoQualifyingCommits {
                commit_count: result.commits.len(),
            });
        }
        info!("no qualifying commit markers, nothing to bump");
        return Ok(result);
    }

    info!(level = %result.level, commits = result.commits.len(), "decided bump level");

    let changed = repo.changed_files(&range.from, &range.to)?;
    let reports = config.reports.locator().locate(&changed);

    if reports.is_empty() {
        result.warnings.push(BoundaryWarning::NoChangedReports {
            extension: config.reports.extension.clone(),
        });
        info!(changed = changed.len(), "no changed reports");
        return Ok(result);
    }

    let renderer = build_renderer(repo, &config.changelog, &mut result.warnings)?;
    let updater = ReportUpdater::new(repo.workdir(), &config.reports, &renderer, args.date);

    for report in &reports {
        match updater.update(report, result.level, &result.commits, args.dry_run) {
            Ok(Some(update)) => {
                if !args.dry_run {
                    let paths: Vec<&Path> = update.files.iter().map(PathBuf::as_path).collect();
                    repo.stage(&paths)?;
                }
                info!(
                    report = %report,
                    from = %update.previous,
                    to = %update.version,
                    "bumped report"
                );
                result.updated.push(update);
            }
            Ok(None) => {
                result.warnings.push(BoundaryWarning::MissingVersionFile {
                    report: report.to_string(),
                    path: updater.version_path(report).display().to_string(),
                });
                result.skipped.push(report.clone());
            }
            Err(e) if e.is_report_scoped() => {
                error!(report = %report, error = %e, "report update failed");
                result.failed.push(ReportFailure {
                    report: report.clone(),
                    error: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    if result.updated.is_empty() {
        return Ok(result);
    }

    let tag_names: Vec<String> = if config.behavior.tag {
        let pattern = config.tag_pattern();
        result
            .updated
            .iter()
            .map(|update| pattern.format(&update.report, &update.version))
            .collect()
    } else {
        Vec::new()
    };

    if args.dry_run {
        result.tags = tag_names;
        return Ok(result);
    }

    if config.behavior.commit {
        result.commit = Some(repo.commit(&config.behavior.commit_message)?);
    }

    for name in tag_names {
        repo.create_tag(&name)?;
        result.tags.push(name);
    }

    Ok(result)
}

/// Build the changelog renderer, resolving the repository URL for links
fn build_renderer<R: Repository>(
    repo: &R,
    config: &ChangelogConfig,
    warnings: &mut Vec<BoundaryWarning>,
) -> Result<ChangelogRenderer> {
    let url = match &config.repository_url {
        Some(url) => Some(url.clone()),
        None => repo.remote_url(&config.remote)?,
    };

    if url.is_none() && config.style == ChangelogStyle::Linked {
        warn!(remote = %config.remote, "no repository URL for changelog links");
        warnings.push(BoundaryWarning::NoRepositoryUrl {
            remote: config.remote.clone(),
        });
    }

    Ok(ChangelogRenderer::new(config.style).with_repository_url(url.as_deref()))
}

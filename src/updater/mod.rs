//! Per-report file updates: bump `version.txt`, append to `CHANGELOG.md`.
//!
//! Nothing here touches version control; the driver stages what an update
//! reports as written.

pub mod changelog;
pub mod version_file;

pub use changelog::ChangelogFile;
pub use version_file::{VersionChange, VersionFile};

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::ReportsConfig;
use crate::domain::{BumpLevel, ChangelogEntry, ChangelogRenderer, Commit, Report, Version};
use crate::error::Result;

/// A report whose version was bumped
#[derive(Debug, Clone, PartialEq)]
pub struct ReportUpdate {
    pub report: Report,
    pub previous: Version,
    pub version: Version,
    /// Written files, relative to the repository root
    pub files: Vec<PathBuf>,
}

/// Applies one bump to the files of each report
pub struct ReportUpdater<'a> {
    workdir: &'a Path,
    layout: &'a ReportsConfig,
    renderer: &'a ChangelogRenderer,
    date: NaiveDate,
}

impl<'a> ReportUpdater<'a> {
    pub fn new(
        workdir: &'a Path,
        layout: &'a ReportsConfig,
        renderer: &'a ChangelogRenderer,
        date: NaiveDate,
    ) -> Self {
        ReportUpdater {
            workdir,
            layout,
            renderer,
            date,
        }
    }

    /// `version.txt` of a report, relative to the repository root
    pub fn version_path(&self, report: &Report) -> PathBuf {
        report.dir().join(&self.layout.version_file)
    }

    /// `CHANGELOG.md` of a report, relative to the repository root
    pub fn changelog_path(&self, report: &Report) -> PathBuf {
        report.dir().join(&self.layout.changelog_file)
    }

    /// Bump a report and record the change in its changelog
    ///
    /// # Returns
    /// * `Ok(None)` - The report has no version file and was skipped
    /// * `Ok(Some(update))` - Version bumped and changelog appended
    /// * `Err` - Malformed version or changelog failure; the version file is
    ///   left as it was before the call
    pub fn update(
        &self,
        report: &Report,
        level: BumpLevel,
        commits: &[Commit],
        dry_run: bool,
    ) -> Result<Option<ReportUpdate>> {
        let version_rel = self.version_path(report);
        let changelog_rel = self.changelog_path(report);

        let version_file = VersionFile::new(self.workdir.join(&version_rel));
        let Some(change) = version_file.bump(level, dry_run)? else {
            info!(report = %report, "no version file, skipping");
            return Ok(None);
        };

        if !dry_run {
            let entry = ChangelogEntry {
                version: change.next,
                date: self.date,
                level,
                commits,
            };
            let changelog = ChangelogFile::new(self.workdir.join(&changelog_rel));

            if let Err(e) = changelog.append(&self.renderer.render(&entry)) {
                if let Err(restore_err) = version_file.restore(&change) {
                    warn!(
                        report = %report,
                        error = %restore_err,
                        "could not restore version file after changelog failure"
                    );
                }
                return Err(e);
            }
        }

        Ok(Some(ReportUpdate {
            report: report.clone(),
            previous: change.previous,
            version: change.next,
            files: vec![version_rel, changelog_rel],
        }))
    }
}

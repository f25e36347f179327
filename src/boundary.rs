use std::fmt;

/// Non-fatal conditions met during a run.
/// These never fail the run but should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The range contains no commits at all
    EmptyRange { from: String, to: String },
    /// Commits exist but none starts with a bump marker
    NoQualifyingCommits { commit_count: usize },
    /// A bump was decided but no report artifacts changed
    NoChangedReports { extension: String },
    /// A changed report has no version file and is skipped
    MissingVersionFile { report: String, path: String },
    /// No repository URL is known, changelog entries get plain hashes
    NoRepositoryUrl { remote: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::EmptyRange { from, to } => {
                write!(f, "No commits in range {}..{}", from, to)
            }
            BoundaryWarning::NoQualifyingCommits { commit_count } => {
                write!(
                    f,
                    "None of {} commit(s) starts with BREAKING_CHANGE:, feat: or fix:, skipping version bump",
                    commit_count
                )
            }
            BoundaryWarning::NoChangedReports { extension } => {
                write!(f, "No changed .{} files belong to a report", extension)
            }
            BoundaryWarning::MissingVersionFile { report, path } => {
                write!(f, "Report '{}' has no {}, skipping", report, path)
            }
            BoundaryWarning::NoRepositoryUrl { remote } => {
                write!(
                    f,
                    "Remote '{}' not found, changelog entries will not link to commits",
                    remote
                )
            }
        }
    }
}

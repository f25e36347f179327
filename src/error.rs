use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for report-version operations
#[derive(Error, Debug)]
pub enum ReportVersionError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Git operation failed: {0}")]
    Gateway(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    MalformedVersion(String),

    #[error("Cannot write changelog {}: {source}", path.display())]
    Changelog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot access version file {}: {source}", path.display())]
    VersionFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in report-version
pub type Result<T> = std::result::Result<T, ReportVersionError>;

impl ReportVersionError {
    /// Create a gateway error with context
    pub fn gateway(msg: impl Into<String>) -> Self {
        ReportVersionError::Gateway(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReportVersionError::Config(msg.into())
    }

    /// Create a malformed version error with context
    pub fn malformed_version(msg: impl Into<String>) -> Self {
        ReportVersionError::MalformedVersion(msg.into())
    }

    /// Create a changelog write error for the given path
    pub fn changelog(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportVersionError::Changelog {
            path: path.into(),
            source,
        }
    }

    /// Create a version file read/write error for the given path
    pub fn version_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportVersionError::VersionFile {
            path: path.into(),
            source,
        }
    }

    /// Whether the error only invalidates the report being processed.
    ///
    /// Report-scoped errors are recorded and the run moves on to the next
    /// report; every other error aborts the run.
    pub fn is_report_scoped(&self) -> bool {
        matches!(
            self,
            ReportVersionError::MalformedVersion(_)
                | ReportVersionError::Changelog { .. }
                | ReportVersionError::VersionFile { .. }
        )
    }
}

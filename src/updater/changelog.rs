use crate::error::{ReportVersionError, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A report's append-only `CHANGELOG.md`
#[derive(Debug, Clone)]
pub struct ChangelogFile {
    path: PathBuf,
}

impl ChangelogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ChangelogFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append rendered text, creating the file when it does not exist yet
    pub fn append(&self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| ReportVersionError::changelog(&self.path, e))?;

        file.write_all(text.as_bytes())
            .map_err(|e| ReportVersionError::changelog(&self.path, e))
    }
}

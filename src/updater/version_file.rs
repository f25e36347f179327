use crate::domain::{BumpLevel, Version};
use crate::error::{ReportVersionError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Outcome of bumping a single `version.txt`
#[derive(Debug, Clone, PartialEq)]
pub struct VersionChange {
    pub previous: Version,
    pub next: Version,
    /// File content before the bump, used to undo it
    pub original: String,
}

/// A report's `version.txt`
#[derive(Debug, Clone)]
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        VersionFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the current version
    ///
    /// # Returns
    /// * `Ok(None)` - The file does not exist
    /// * `Ok(Some((content, version)))` - Raw content and parsed version
    /// * `Err` - The file is unreadable or does not hold a version
    pub fn read(&self) -> Result<Option<(String, Version)>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                return Err(ReportVersionError::malformed_version(format!(
                    "{}: not valid UTF-8 text",
                    self.path.display()
                )));
            }
            Err(e) => return Err(ReportVersionError::version_file(&self.path, e)),
        };

        let version = Version::parse(&content).map_err(|e| {
            ReportVersionError::malformed_version(format!("{}: {}", self.path.display(), e))
        })?;

        Ok(Some((content, version)))
    }

    /// Overwrite the file with the canonical form of `version`
    pub fn write(&self, version: &Version) -> Result<()> {
        fs::write(&self.path, version.to_string())
            .map_err(|e| ReportVersionError::version_file(&self.path, e))
    }

    /// Bump the stored version
    ///
    /// With `dry_run` the next version is computed but nothing is written.
    /// Returns `Ok(None)` when the file does not exist.
    pub fn bump(&self, level: BumpLevel, dry_run: bool) -> Result<Option<VersionChange>> {
        let Some((original, previous)) = self.read()? else {
            return Ok(None);
        };

        let next = previous.bump(level).map_err(|e| {
            ReportVersionError::malformed_version(format!("{}: {}", self.path.display(), e))
        })?;
        if !dry_run {
            self.write(&next)?;
        }

        Ok(Some(VersionChange {
            previous,
            next,
            original,
        }))
    }

    /// Put back the content the file had before a bump
    pub fn restore(&self, change: &VersionChange) -> Result<()> {
        fs::write(&self.path, &change.original)
            .map_err(|e| ReportVersionError::version_file(&self.path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let file = VersionFile::new(temp.path().join("version.txt"));
        assert_eq!(file.read().unwrap(), None);
        assert_eq!(file.bump(BumpLevel::Minor, false).unwrap(), None);
        assert!(!file.path().exists());
    }

    #[test]
    fn test_bump_overwrites_without_newline() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.txt");
        fs::write(&path, "1.2.3\n").unwrap();

        let change = VersionFile::new(&path)
            .bump(BumpLevel::Minor, false)
            .unwrap()
            .unwrap();

        assert_eq!(change.previous, Version::new(1, 2, 3));
        assert_eq!(change.next, Version::new(1, 3, 0));
        assert_eq!(fs::read_to_string(&path).unwrap(), "1.3.0");
    }

    #[test]
    fn test_bump_dry_run_leaves_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.txt");
        fs::write(&path, "0.9.9").unwrap();

        let change = VersionFile::new(&path)
            .bump(BumpLevel::Major, true)
            .unwrap()
            .unwrap();

        assert_eq!(change.next, Version::new(1, 0, 0));
        assert_eq!(fs::read_to_string(&path).unwrap(), "0.9.9");
    }

    #[test]
    fn test_malformed_version_names_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.txt");
        fs::write(&path, "release-3").unwrap();

        let err = VersionFile::new(&path).bump(BumpLevel::Patch, false).unwrap_err();
        assert!(matches!(err, ReportVersionError::MalformedVersion(_)));
        assert!(err.to_string().contains("version.txt"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "release-3");
    }

    #[test]
    fn test_non_utf8_version_is_malformed() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.txt");
        fs::write(&path, [0xff, 0xfe, 0x31]).unwrap();

        let err = VersionFile::new(&path).read().unwrap_err();
        assert!(matches!(err, ReportVersionError::MalformedVersion(_)));
        assert!(err.is_report_scoped());
    }

    #[test]
    fn test_unreadable_version_file_is_report_scoped() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.txt");
        fs::create_dir_all(&path).unwrap();

        let err = VersionFile::new(&path).bump(BumpLevel::Patch, false).unwrap_err();
        assert!(matches!(err, ReportVersionError::VersionFile { .. }));
        assert!(err.is_report_scoped());
    }

    #[test]
    fn test_overflowing_bump_leaves_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.txt");
        fs::write(&path, "18446744073709551615.0.0").unwrap();

        let err = VersionFile::new(&path).bump(BumpLevel::Major, false).unwrap_err();
        assert!(matches!(err, ReportVersionError::MalformedVersion(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "18446744073709551615.0.0");
    }

    #[test]
    fn test_restore_original_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("version.txt");
        fs::write(&path, " 2.0.0 \n").unwrap();

        let file = VersionFile::new(&path);
        let change = file.bump(BumpLevel::Patch, false).unwrap().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "2.0.1");

        file.restore(&change).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), " 2.0.0 \n");
    }

    #[test]
    fn test_write_round_trip() {
        let temp = TempDir::new().unwrap();
        let file = VersionFile::new(temp.path().join("version.txt"));
        let version = Version::new(4, 0, 12);

        file.write(&version).unwrap();
        let (_, parsed) = file.read().unwrap().unwrap();
        assert_eq!(parsed, version);
    }
}

use crate::domain::BumpLevel;
use crate::error::{ReportVersionError, Result};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse the contents of a `version.txt` (e.g., "1.2.3\n" -> Version(1,2,3))
    ///
    /// Surrounding whitespace is tolerated. Anything other than three
    /// dot-separated integers is rejected, including `v` prefixes and
    /// pre-release or build suffixes.
    pub fn parse(content: &str) -> Result<Self> {
        let trimmed = content.trim();

        let parsed = semver::Version::parse(trimmed).map_err(|e| {
            ReportVersionError::malformed_version(format!(
                "Invalid version format: '{}' - expected MAJOR.MINOR.PATCH ({})",
                trimmed, e
            ))
        })?;

        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return Err(ReportVersionError::malformed_version(format!(
                "Invalid version format: '{}' - pre-release and build metadata are not supported",
                trimmed
            )));
        }

        Ok(Version::new(parsed.major, parsed.minor, parsed.patch))
    }

    /// Bump version according to bump level
    ///
    /// `BumpLevel::None` leaves the version unchanged. A component already at
    /// `u64::MAX` cannot be incremented and is reported as malformed.
    pub fn bump(&self, level: BumpLevel) -> Result<Self> {
        let next = match level {
            BumpLevel::Major => Version::new(increment(self.major, "major")?, 0, 0),
            BumpLevel::Minor => Version::new(self.major, increment(self.minor, "minor")?, 0),
            BumpLevel::Patch => {
                Version::new(self.major, self.minor, increment(self.patch, "patch")?)
            }
            BumpLevel::None => *self,
        };
        Ok(next)
    }
}

fn increment(component: u64, name: &str) -> Result<u64> {
    component.checked_add(1).ok_or_else(|| {
        ReportVersionError::malformed_version(format!(
            "{} component {} cannot be incremented",
            name, component
        ))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

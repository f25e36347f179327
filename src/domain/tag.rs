use crate::domain::{Report, Version};
use crate::error::{ReportVersionError, Result};

/// Tag naming pattern (e.g., "{report}-v{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub pattern: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        TagPattern {
            pattern: pattern.into(),
        }
    }

    /// Check that the pattern can produce distinct tags per version
    pub fn validate(&self) -> Result<()> {
        if !self.pattern.contains("{version}") {
            return Err(ReportVersionError::config(format!(
                "Tag pattern '{}' must contain {{version}} placeholder",
                self.pattern
            )));
        }
        Ok(())
    }

    /// Format a tag for a report and version
    /// Example: pattern="{report}-v{version}", report="sales", version="1.2.3" -> "sales-v1.2.3"
    pub fn format(&self, report: &Report, version: &Version) -> String {
        self.pattern
            .replace("{report}", report.name())
            .replace("{version}", &version.to_string())
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern::new("{report}-v{version}")
    }
}

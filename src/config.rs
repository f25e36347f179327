use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{ChangelogStyle, ReportLocator, TagPattern};
use crate::error::{ReportVersionError, Result};

/// File name looked up in the repository root
pub const CONFIG_FILE_NAME: &str = "report-version.toml";

/// Environment variable that points at a configuration file
pub const CONFIG_ENV_VAR: &str = "REPORT_VERSION_CONFIG";

/// Represents the complete configuration for report-version.
///
/// Contains the commit range, report layout, changelog rendering and
/// commit/tag behavior.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub range: RangeConfig,

    #[serde(default)]
    pub reports: ReportsConfig,

    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_from() -> String {
    "origin/main~1".to_string()
}

fn default_to() -> String {
    "HEAD".to_string()
}

/// The commit range inspected on each run.
///
/// Commits reachable from `to` but not from `from` are classified, and the
/// tree diff between the two refs yields the changed reports.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RangeConfig {
    #[serde(default = "default_from")]
    pub from: String,

    #[serde(default = "default_to")]
    pub to: String,
}

impl Default for RangeConfig {
    fn default() -> Self {
        RangeConfig {
            from: default_from(),
            to: default_to(),
        }
    }
}

fn default_extension() -> String {
    "dat".to_string()
}

fn default_version_file() -> String {
    "version.txt".to_string()
}

fn default_changelog_file() -> String {
    "CHANGELOG.md".to_string()
}

/// Layout of reports in the repository.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReportsConfig {
    /// Directory that contains the report directories; `None` means reports
    /// are top-level directories
    #[serde(default)]
    pub root_prefix: Option<String>,

    /// Extension (without the dot) of tracked report artifacts
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default = "default_changelog_file")]
    pub changelog_file: String,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        ReportsConfig {
            root_prefix: None,
            extension: default_extension(),
            version_file: default_version_file(),
            changelog_file: default_changelog_file(),
        }
    }
}

impl ReportsConfig {
    /// Build the locator for this layout
    pub fn locator(&self) -> ReportLocator {
        ReportLocator::new(self.root_prefix.as_deref(), &self.extension)
    }
}

fn default_remote() -> String {
    "origin".to_string()
}

/// Changelog rendering options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    #[serde(default)]
    pub style: ChangelogStyle,

    /// Remote whose URL is used for commit links
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Explicit repository URL, takes precedence over the remote
    #[serde(default)]
    pub repository_url: Option<String>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            style: ChangelogStyle::default(),
            remote: default_remote(),
            repository_url: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_commit_message() -> String {
    "chore: report-level version bump".to_string()
}

fn default_tag_pattern() -> String {
    TagPattern::default().pattern
}

/// Configuration for version-control side effects.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Create a commit covering all staged bumps
    #[serde(default = "default_true")]
    pub commit: bool,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Create one tag per bumped report
    #[serde(default = "default_true")]
    pub tag: bool,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig {
            commit: true,
            commit_message: default_commit_message(),
            tag: true,
            tag_pattern: default_tag_pattern(),
        }
    }
}

impl Config {
    /// Reject settings that cannot produce a meaningful run
    pub fn validate(&self) -> Result<()> {
        if self.reports.extension.trim_start_matches('.').is_empty() {
            return Err(ReportVersionError::config("reports.extension must not be empty"));
        }

        if self.range.from.trim().is_empty() || self.range.to.trim().is_empty() {
            return Err(ReportVersionError::config(
                "range.from and range.to must not be empty",
            ));
        }

        if self.behavior.commit && self.behavior.commit_message.trim().is_empty() {
            return Err(ReportVersionError::config(
                "behavior.commit_message must not be empty",
            ));
        }

        TagPattern::new(self.behavior.tag_pattern.as_str()).validate()
    }

    pub fn tag_pattern(&self) -> TagPattern {
        TagPattern::new(self.behavior.tag_pattern.as_str())
    }
}

/// Finds the configuration file to use, if any.
///
/// Candidates in order:
/// 1. Custom path provided as parameter (must exist)
/// 2. Path in the `REPORT_VERSION_CONFIG` environment variable (must exist)
/// 3. `report-version.toml` in the repository root
/// 4. `report-version/config.toml` in the user config directory
pub fn find_config_file(config_path: Option<&Path>, repo_root: &Path) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let local = repo_root.join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("report-version").join("config.toml"))
        .filter(|path| path.exists())
}

/// Loads configuration from file or returns defaults.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `repo_root` - Repository root searched for `report-version.toml`
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration, validated
/// * `Err` - If a file was selected but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&Path>, repo_root: &Path) -> Result<Config> {
    let config = match find_config_file(config_path, repo_root) {
        Some(path) => {
            let config_str = fs::read_to_string(&path).map_err(|e| {
                ReportVersionError::config(format!("Cannot read {}: {}", path.display(), e))
            })?;
            toml::from_str(&config_str).map_err(|e| {
                ReportVersionError::config(format!("Cannot parse {}: {}", path.display(), e))
            })?
        }
        None => Config::default(),
    };

    config.validate()?;
    Ok(config)
}

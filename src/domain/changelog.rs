//! Changelog entry rendering.
//!
//! Rendering is pure: it turns an entry into markdown text. Appending the
//! text to a report's `CHANGELOG.md` lives in [crate::updater::changelog].

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{BumpLevel, Commit, Version};

/// Bullet layout used when rendering entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangelogStyle {
    /// One bullet per commit labelled with the bump, linking to the commit
    #[default]
    Linked,
    /// Per-commit "Reporting"/"Bug-fixing" label and a full-hash line
    Legacy,
}

/// A single changelog entry for one report bump
#[derive(Debug, Clone)]
pub struct ChangelogEntry<'a> {
    pub version: Version,
    pub date: NaiveDate,
    pub level: BumpLevel,
    pub commits: &'a [Commit],
}

/// Renders changelog entries as markdown
#[derive(Debug, Clone, Default)]
pub struct ChangelogRenderer {
    style: ChangelogStyle,
    repository_url: Option<String>,
}

impl ChangelogRenderer {
    pub fn new(style: ChangelogStyle) -> Self {
        ChangelogRenderer {
            style,
            repository_url: None,
        }
    }

    /// Set the repository URL used for commit links
    pub fn with_repository_url(mut self, url: Option<&str>) -> Self {
        self.repository_url = url.map(normalize_repository_url);
        self
    }

    pub fn repository_url(&self) -> Option<&str> {
        self.repository_url.as_deref()
    }

    /// Render an entry, starting with a blank separator line
    pub fn render(&self, entry: &ChangelogEntry<'_>) -> String {
        let mut output = format!(
            "\n## {} ({})\n",
            entry.version,
            entry.date.format("%Y-%m-%d")
        );

        for commit in entry.commits {
            match self.style {
                ChangelogStyle::Linked => {
                    output.push_str(&format!(
                        "- {}: {} ({})\n",
                        entry.level.label(),
                        commit.cleaned_summary(),
                        self.commit_reference(commit)
                    ));
                }
                ChangelogStyle::Legacy => {
                    let label = if commit.message.contains("feat:") {
                        "Reporting"
                    } else {
                        "Bug-fixing"
                    };
                    output.push_str(&format!(
                        "- {}: {}\n  Commit: {}\n",
                        label,
                        commit.message.trim(),
                        commit.hash
                    ));
                }
            }
        }

        output
    }

    fn commit_reference(&self, commit: &Commit) -> String {
        match &self.repository_url {
            Some(url) => format!("[{}]({}/commit/{})", commit.short_hash(), url, commit.hash),
            None => commit.short_hash().to_string(),
        }
    }
}

/// Turn a remote URL into a browsable repository URL.
///
/// Trailing slashes and a `.git` suffix are stripped; SCP-style remotes
/// (`git@host:org/repo.git`) become `https://host/org/repo`.
pub fn normalize_repository_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    match Regex::new(r"^(?:[\w.-]+@)?([\w.-]+):([^/].*)$") {
        Ok(re) if !trimmed.contains("://") => match re.captures(trimmed) {
            Some(captures) => format!("https://{}/{}", &captures[1], &captures[2]),
            None => trimmed.to_string(),
        },
        _ => trimmed.to_string(),
    }
}

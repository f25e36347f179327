use crate::domain::{BumpLevel, Commit, Marker};
use crate::error::Result;
use crate::git::Repository;
use tracing::debug;

/// Commits found in a range together with the bump level they imply
#[derive(Debug, Clone, PartialEq)]
pub struct RangeAnalysis {
    pub commits: Vec<Commit>,
    pub level: BumpLevel,
}

/// Analyzes commits to determine the bump level
#[derive(Debug, Clone, Default)]
pub struct BumpAnalyzer;

impl BumpAnalyzer {
    /// Create a new bump analyzer
    pub fn new() -> Self {
        BumpAnalyzer
    }

    /// Read the commits of a range from a repository and classify them
    pub fn analyze_repository_range<R: Repository>(
        &self,
        repo: &R,
        from: &str,
        to: &str,
    ) -> Result<RangeAnalysis> {
        let commits = repo.log(from, to)?;
        let level = self.analyze_commits(&commits);
        Ok(RangeAnalysis { commits, level })
    }

    /// Determine the highest bump level implied by the commit markers
    ///
    /// A breaking change wins immediately; otherwise the level only ever
    /// rises while scanning.
    pub fn analyze_commits(&self, commits: &[Commit]) -> BumpLevel {
        let mut level = BumpLevel::None;

        for commit in commits {
            let Some(marker) = commit.marker() else {
                continue;
            };

            debug!(hash = %commit.short_hash(), ?marker, "classified commit");

            // Breaking changes are the highest level, stop scanning
            if marker == Marker::BreakingChange {
                return BumpLevel::Major;
            }

            level = level.max(marker.bump_level());
        }

        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    fn commits(messages: &[&str]) -> Vec<Commit> {
        messages
            .iter()
            .enumerate()
            .map(|(i, msg)| Commit::new(format!("{:040x}", i), *msg))
            .collect()
    }

    #[test]
    fn test_analyze_major() {
        let analyzer = BumpAnalyzer::new();
        let commits = commits(&["feat: new column", "BREAKING_CHANGE: drop legacy table"]);
        assert_eq!(analyzer.analyze_commits(&commits), BumpLevel::Major);
    }

    #[test]
    fn test_analyze_major_regardless_of_order() {
        let analyzer = BumpAnalyzer::new();
        let commits = commits(&["BREAKING_CHANGE: rename file", "feat: x", "fix: y"]);
        assert_eq!(analyzer.analyze_commits(&commits), BumpLevel::Major);
    }

    #[test]
    fn test_analyze_minor() {
        let analyzer = BumpAnalyzer::new();
        let commits = commits(&["fix: totals", "feat: add region split", "fix: rounding"]);
        assert_eq!(analyzer.analyze_commits(&commits), BumpLevel::Minor);
    }

    #[test]
    fn test_analyze_patch() {
        let analyzer = BumpAnalyzer::new();
        let commits = commits(&["fix: bug 1", "fix: bug 2"]);
        assert_eq!(analyzer.analyze_commits(&commits), BumpLevel::Patch);
    }

    #[test]
    fn test_analyze_none_without_markers() {
        let analyzer = BumpAnalyzer::new();
        let commits = commits(&[
            "docs: update readme",
            "chore: update deps",
            "Merge branch 'feature/x'",
            "",
        ]);
        assert_eq!(analyzer.analyze_commits(&commits), BumpLevel::None);
    }

    #[test]
    fn test_analyze_empty_range() {
        let analyzer = BumpAnalyzer::new();
        assert_eq!(analyzer.analyze_commits(&[]), BumpLevel::None);
    }

    #[test]
    fn test_analyze_ignores_markers_not_at_start() {
        let analyzer = BumpAnalyzer::new();
        let commits = commits(&[
            "Merge pull request #12\n\nfeat: add column",
            " fix: leading space",
            "chore: mention BREAKING_CHANGE: in text",
        ]);
        assert_eq!(analyzer.analyze_commits(&commits), BumpLevel::None);
    }

    #[test]
    fn test_analyze_scoped_prefix_is_not_a_marker() {
        let analyzer = BumpAnalyzer::new();
        let commits = commits(&["feat(sales): scoped feature", "fix: plain fix"]);
        assert_eq!(analyzer.analyze_commits(&commits), BumpLevel::Patch);
    }

    #[test]
    fn test_analyze_repository_range() {
        let repo = MockRepository::new("/tmp/unused")
            .with_commit("aaaaaaa", "fix: totals")
            .with_commit("bbbbbbb", "feat: add revenue column");

        let analysis = BumpAnalyzer::new()
            .analyze_repository_range(&repo, "origin/main~1", "HEAD")
            .unwrap();

        assert_eq!(analysis.level, BumpLevel::Minor);
        assert_eq!(analysis.commits.len(), 2);
    }
}

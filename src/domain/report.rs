use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// A report directory, identified by its name and the root prefix it lives under
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Report {
    name: String,
    root_prefix: Option<String>,
}

impl Report {
    pub fn new(name: impl Into<String>, root_prefix: Option<&str>) -> Self {
        Report {
            name: name.into(),
            root_prefix: root_prefix.map(str::to_string),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory of the report relative to the repository root
    pub fn dir(&self) -> PathBuf {
        match &self.root_prefix {
            Some(prefix) => Path::new(prefix).join(&self.name),
            None => PathBuf::from(&self.name),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root_prefix {
            Some(prefix) => write!(f, "{}/{}", prefix, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Maps changed file paths to the reports they belong to
#[derive(Debug, Clone)]
pub struct ReportLocator {
    root_prefix: Option<String>,
    extension: String,
}

impl ReportLocator {
    /// Create a locator
    ///
    /// `root_prefix` may span several segments ("projects/reports"); leading
    /// and trailing slashes are ignored. `extension` is given without the dot.
    pub fn new(root_prefix: Option<&str>, extension: &str) -> Self {
        let root_prefix = root_prefix
            .map(|p| p.trim_matches('/').to_string())
            .filter(|p| !p.is_empty());

        ReportLocator {
            root_prefix,
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// The report a single changed path belongs to, if it qualifies
    pub fn report_for_path(&self, path: &str) -> Option<Report> {
        // Suffix match, so a bare `.dat` file name still counts
        let file_name = path.rsplit('/').next()?;
        if !file_name
            .strip_suffix(self.extension.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
        {
            return None;
        }

        let relative = match &self.root_prefix {
            Some(prefix) => path.strip_prefix(prefix.as_str())?.strip_prefix('/')?,
            None => path,
        };

        let (name, rest) = relative.split_once('/')?;
        if name.is_empty() || rest.is_empty() {
            return None;
        }

        Some(Report::new(name, self.root_prefix.as_deref()))
    }

    /// Deduplicated, sorted set of reports touched by the changed paths
    pub fn locate<S: AsRef<str>>(&self, changed_paths: &[S]) -> BTreeSet<Report> {
        changed_paths
            .iter()
            .filter_map(|path| self.report_for_path(path.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(reports: &BTreeSet<Report>) -> Vec<&str> {
        reports.iter().map(|r| r.name()).collect()
    }

    #[test]
    fn test_locate_top_level_reports() {
        let locator = ReportLocator::new(None, "dat");
        let reports = locator.locate(&["A/report1.dat", "A/report1.sql", "B/x/report2.dat"]);
        assert_eq!(names(&reports), vec!["A", "B"]);
    }

    #[test]
    fn test_locate_is_sorted_and_deduplicated() {
        let locator = ReportLocator::new(None, "dat");
        let reports = locator.locate(&[
            "zeta/a.dat",
            "alpha/b.dat",
            "zeta/c.dat",
            "mid/deep/nested/d.dat",
        ]);
        assert_eq!(names(&reports), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_extension_must_match_exactly() {
        let locator = ReportLocator::new(None, "dat");
        assert!(locator.report_for_path("A/report.DAT").is_none());
        assert!(locator.report_for_path("A/report.data").is_none());
        assert!(locator.report_for_path("A/report.dat.bak").is_none());
        assert!(locator.report_for_path("A/dat").is_none());
    }

    #[test]
    fn test_dot_extension_file_name_counts() {
        let locator = ReportLocator::new(None, "dat");
        assert_eq!(locator.report_for_path("A/.dat"), Some(Report::new("A", None)));
        assert_eq!(locator.report_for_path("A/x/.dat"), Some(Report::new("A", None)));
    }

    #[test]
    fn test_root_level_file_is_not_a_report() {
        let locator = ReportLocator::new(None, "dat");
        assert!(locator.report_for_path("orphan.dat").is_none());
    }

    #[test]
    fn test_root_prefix_filters_and_selects_second_segment() {
        let locator = ReportLocator::new(Some("analytics"), "dat");
        let reports = locator.locate(&[
            "analytics/sales/q1.dat",
            "analytics/finance/summary.dat",
            "other/sales/q1.dat",
            "analytics/loose.dat",
            "analyticsx/sales/q1.dat",
        ]);
        assert_eq!(names(&reports), vec!["finance", "sales"]);

        let sales = reports.iter().next_back().unwrap();
        assert_eq!(sales.dir(), Path::new("analytics").join("sales"));
        assert_eq!(sales.to_string(), "analytics/sales");
    }

    #[test]
    fn test_multi_segment_root_prefix() {
        let locator = ReportLocator::new(Some("/projects/reports/"), ".dat");
        let report = locator
            .report_for_path("projects/reports/hr/headcount.dat")
            .unwrap();
        assert_eq!(report.name(), "hr");
        assert_eq!(report.dir(), Path::new("projects/reports").join("hr"));
    }

    #[test]
    fn test_report_dir_without_prefix() {
        let report = Report::new("sales", None);
        assert_eq!(report.dir(), PathBuf::from("sales"));
        assert_eq!(report.to_string(), "sales");
    }
}

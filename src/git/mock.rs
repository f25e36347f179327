use crate::domain::Commit;
use crate::error::{ReportVersionError, Result};
use crate::git::Repository;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock repository for testing without actual git operations
///
/// Reads are served from canned data; writes are recorded so tests can
/// inspect what was staged, committed and tagged. Files are still resolved
/// against a real `workdir` so report files can live in a temp directory.
pub struct MockRepository {
    workdir: PathBuf,
    commits: Vec<Commit>,
    changed_files: Vec<String>,
    remotes: HashMap<String, String>,
    staged: RefCell<Vec<PathBuf>>,
    pending: Cell<bool>,
    created_commits: RefCell<Vec<String>>,
    tags: RefCell<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty mock repository rooted at `workdir`
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        MockRepository {
            workdir: workdir.into(),
            commits: Vec::new(),
            changed_files: Vec::new(),
            remotes: HashMap::new(),
            staged: RefCell::new(Vec::new()),
            pending: Cell::new(false),
            created_commits: RefCell::new(Vec::new()),
            tags: RefCell::new(Vec::new()),
        }
    }

    /// Add a commit to the range returned by `log`
    pub fn with_commit(mut self, hash: impl Into<String>, message: impl Into<String>) -> Self {
        self.commits.push(Commit::new(hash, message));
        self
    }

    /// Add a path to the list returned by `changed_files`
    pub fn with_changed_file(mut self, path: impl Into<String>) -> Self {
        self.changed_files.push(path.into());
        self
    }

    /// Configure a remote URL
    pub fn with_remote(mut self, name: impl Into<String>, url: impl Into<String>) -> Self {
        self.remotes.insert(name.into(), url.into());
        self
    }

    /// Pre-existing tag, used to simulate duplicate tag failures
    pub fn with_tag(self, name: impl Into<String>) -> Self {
        self.tags.borrow_mut().push(name.into());
        self
    }

    /// Every path staged so far, in staging order
    pub fn staged(&self) -> Vec<PathBuf> {
        self.staged.borrow().clone()
    }

    /// Messages of the commits created so far
    pub fn created_commits(&self) -> Vec<String> {
        self.created_commits.borrow().clone()
    }

    /// All tags, pre-existing ones included
    pub fn tags(&self) -> Vec<String> {
        self.tags.borrow().clone()
    }
}

impl Repository for MockRepository {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn remote_url(&self, remote: &str) -> Result<Option<String>> {
        Ok(self.remotes.get(remote).cloned())
    }

    fn log(&self, _from: &str, _to: &str) -> Result<Vec<Commit>> {
        Ok(self.commits.clone())
    }

    fn changed_files(&self, _from: &str, _to: &str) -> Result<Vec<String>> {
        Ok(self.changed_files.clone())
    }

    fn stage(&self, paths: &[&Path]) -> Result<()> {
        let mut staged = self.staged.borrow_mut();
        staged.extend(paths.iter().map(|path| path.to_path_buf()));
        self.pending.set(true);
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<String> {
        if !self.pending.replace(false) {
            return Err(ReportVersionError::gateway("Nothing to commit"));
        }

        let mut created = self.created_commits.borrow_mut();
        created.push(message.to_string());
        Ok(format!("{:040x}", created.len()))
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let mut tags = self.tags.borrow_mut();
        if tags.iter().any(|tag| tag == name) {
            return Err(ReportVersionError::gateway(format!(
                "Cannot create tag '{}': tag already exists",
                name
            )));
        }
        tags.push(name.to_string());
        Ok(())
    }
}

use crate::domain::Commit;
use crate::error::{ReportVersionError, Result};
use git2::{Oid, Repository as Git2Repo, Sort};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    workdir: PathBuf,
}

impl Git2Repository {
    /// Open the repository containing `path`
    ///
    /// Bare repositories are rejected since reports live in the working tree.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            ReportVersionError::gateway(format!(
                "Not a git repository: {} ({})",
                path.display(),
                e.message()
            ))
        })?;

        Self::from_git2(repo)
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Result<Self> {
        let workdir = repo
            .workdir()
            .ok_or_else(|| ReportVersionError::gateway("Repository has no working tree"))?
            .to_path_buf();

        Ok(Git2Repository { repo, workdir })
    }

    fn resolve_commit(&self, spec: &str) -> Result<git2::Commit<'_>> {
        self.repo
            .revparse_single(spec)
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| {
                ReportVersionError::gateway(format!(
                    "Cannot resolve '{}' to a commit: {}",
                    spec,
                    e.message()
                ))
            })
    }

    fn head_commit(&self) -> Result<git2::Commit<'_>> {
        self.repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| ReportVersionError::gateway(format!("Cannot read HEAD: {}", e.message())))
    }
}

impl super::Repository for Git2Repository {
    fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn remote_url(&self, remote: &str) -> Result<Option<String>> {
        match self.repo.find_remote(remote) {
            Ok(found) => Ok(found.url().map(|url| url.to_string())),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(ReportVersionError::gateway(format!(
                "Cannot read remote '{}': {}",
                remote,
                e.message()
            ))),
        }
    }

    #[instrument(skip(self))]
    fn log(&self, from: &str, to: &str) -> Result<Vec<Commit>> {
        let from_oid = self.resolve_commit(from)?.id();
        let to_oid = self.resolve_commit(to)?.id();

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(to_oid)?;
        revwalk.hide(from_oid)?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid: Oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            commits.push(Commit {
                hash: oid.to_string(),
                message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
            });
        }

        debug!(count = commits.len(), "collected commits");
        Ok(commits)
    }

    #[instrument(skip(self))]
    fn changed_files(&self, from: &str, to: &str) -> Result<Vec<String>> {
        let from_tree = self.resolve_commit(from)?.tree()?;
        let to_tree = self.resolve_commit(to)?.tree()?;

        let diff = self
            .repo
            .diff_tree_to_tree(Some(&from_tree), Some(&to_tree), None)?;

        let paths: Vec<String> = diff
            .deltas()
            .filter_map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(|path| path.to_string_lossy().replace('\\', "/"))
            })
            .collect();

        debug!(count = paths.len(), "collected changed files");
        Ok(paths)
    }

    fn stage(&self, paths: &[&Path]) -> Result<()> {
        let mut index = self.repo.index()?;

        for path in paths {
            index.add_path(path).map_err(|e| {
                ReportVersionError::gateway(format!(
                    "Cannot stage '{}': {}",
                    path.display(),
                    e.message()
                ))
            })?;
        }

        index.write()?;
        debug!(count = paths.len(), "staged paths");
        Ok(())
    }

    #[instrument(skip(self))]
    fn commit(&self, message: &str) -> Result<String> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let parent = self.head_commit()?;

        if parent.tree_id() == tree_id {
            return Err(ReportVersionError::gateway("Nothing to commit"));
        }

        let signature = self.repo.signature().map_err(|e| {
            ReportVersionError::gateway(format!("Cannot determine committer: {}", e.message()))
        })?;

        let oid = self
            .repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &[&parent])?;

        info!(commit = %oid, "created commit");
        Ok(oid.to_string())
    }

    #[instrument(skip(self))]
    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.head_commit()?;

        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| {
                ReportVersionError::gateway(format!("Cannot create tag '{}': {}", name, e.message()))
            })?;

        info!(tag = name, "created tag");
        Ok(())
    }
}

//! Version-control gateway
//!
//! This module provides a trait-based abstraction over the handful of Git
//! operations report-version needs, allowing for a real implementation and a
//! mock implementation for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! Every implementation is constructed with an explicit repository root;
//! nothing depends on the process working directory.
//!
//! ```rust
//! # use report_version::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> report_version::Result<()> {
//! let commits = repo.log("origin/main~1", "HEAD")?;
//! let changed = repo.changed_files("origin/main~1", "HEAD")?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::Commit;
use crate::error::Result;
use std::path::Path;

/// Common git operation trait for abstraction
///
/// All operations are synchronous. Implementations map underlying failures
/// (ambiguous refs, nothing to commit, duplicate tags) to gateway errors,
/// which abort the run.
pub trait Repository {
    /// Root of the working tree that report paths are resolved against
    fn workdir(&self) -> &Path;

    /// Get the URL of a configured remote
    ///
    /// # Returns
    /// * `Ok(Some(url))` - The remote exists and has a URL
    /// * `Ok(None)` - No remote with that name
    /// * `Err` - If there's a Git error
    fn remote_url(&self, remote: &str) -> Result<Option<String>>;

    /// List commits reachable from `to` but not from `from`
    ///
    /// Commits are returned in log order (newest first) with their full hash
    /// and full message.
    fn log(&self, from: &str, to: &str) -> Result<Vec<Commit>>;

    /// List paths that differ between the trees of `from` and `to`
    ///
    /// Paths are relative to the repository root and use forward slashes.
    /// Deleted files are listed under their old path.
    fn changed_files(&self, from: &str, to: &str) -> Result<Vec<String>>;

    /// Stage paths (relative to the repository root) in the index
    fn stage(&self, paths: &[&Path]) -> Result<()>;

    /// Commit the index on top of HEAD and return the new commit hash
    ///
    /// Fails when the index tree is identical to HEAD's tree.
    fn commit(&self, message: &str) -> Result<String>;

    /// Create a lightweight tag on the current HEAD commit
    ///
    /// Fails if the tag already exists.
    fn create_tag(&self, name: &str) -> Result<()>;
}

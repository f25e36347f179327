//! Domain logic - pure versioning rules independent of git and the filesystem

pub mod changelog;
pub mod commit;
pub mod report;
pub mod tag;
pub mod version;

pub use changelog::{ChangelogEntry, ChangelogRenderer, ChangelogStyle};
pub use commit::{BumpLevel, Commit, Marker};
pub use report::{Report, ReportLocator};
pub use tag::TagPattern;
pub use version::Version;

use std::fmt;

/// A commit as reported by the version-control gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Full commit hash
    pub hash: String,
    /// Full commit message, body included
    pub message: String,
}

/// Literal message prefixes that imply a version bump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    BreakingChange,
    Feature,
    Fix,
}

impl Marker {
    pub const ALL: [Marker; 3] = [Marker::BreakingChange, Marker::Feature, Marker::Fix];

    /// The literal prefix a message must start with
    pub fn prefix(&self) -> &'static str {
        match self {
            Marker::BreakingChange => "BREAKING_CHANGE:",
            Marker::Feature => "feat:",
            Marker::Fix => "fix:",
        }
    }

    /// Bump level implied by this marker
    pub fn bump_level(&self) -> BumpLevel {
        match self {
            Marker::BreakingChange => BumpLevel::Major,
            Marker::Feature => BumpLevel::Minor,
            Marker::Fix => BumpLevel::Patch,
        }
    }
}

/// Magnitude of a version increment
///
/// Variant order gives the total order `Major > Minor > Patch > None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum BumpLevel {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    /// Human label used in changelog entries
    pub fn label(&self) -> &'static str {
        match self {
            BumpLevel::Major => "Breaking Change",
            BumpLevel::Minor => "Feature",
            BumpLevel::Patch => "Bug Fix",
            BumpLevel::None => "None",
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpLevel::Major => "major",
            BumpLevel::Minor => "minor",
            BumpLevel::Patch => "patch",
            BumpLevel::None => "none",
        };
        f.write_str(name)
    }
}

impl Commit {
    pub fn new(hash: impl Into<String>, message: impl Into<String>) -> Self {
        Commit {
            hash: hash.into(),
            message: message.into(),
        }
    }

    /// The marker the raw message starts with, if any.
    ///
    /// Matching is a literal prefix test: leading whitespace or a marker
    /// further into the message does not count.
    pub fn marker(&self) -> Option<Marker> {
        Marker::ALL
            .into_iter()
            .find(|marker| self.message.starts_with(marker.prefix()))
    }

    /// First line of the message with the marker prefix stripped and trimmed
    pub fn cleaned_summary(&self) -> String {
        let without_marker = match self.marker() {
            Some(marker) => &self.message[marker.prefix().len()..],
            None => self.message.as_str(),
        };

        without_marker
            .trim()
            .lines()
            .next()
            .unwrap_or("")
            .trim()
            .to_string()
    }

    /// First seven characters of the hash
    pub fn short_hash(&self) -> &str {
        match self.hash.char_indices().nth(7) {
            Some((idx, _)) => &self.hash[..idx],
            None => &self.hash,
        }
    }
}

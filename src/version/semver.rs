//! The `Version` value: a `major.minor.patch` triple tied to a repository

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::LookupError;

/// Release tag grammar, anchored at both ends: `v1.2.3`
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v([0-9]+)\.([0-9]+)\.([0-9]+)$").unwrap());

/// A released (or running) version of a repository.
///
/// Equality, ordering and hashing only look at `major.minor.patch`;
/// the owner and repository are carried along to build lookup requests.
#[derive(Debug, Clone, Default)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    owner: String,
    repo: String,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            owner: String::new(),
            repo: String::new(),
        }
    }

    /// Returns a copy of this version associated with `owner/repo`
    pub fn with_repository(self, owner: &str, repo: &str) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            ..self
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Formats as `1.2.3`
    pub fn format(&self) -> String {
        self.to_string()
    }

    /// Formats as a release tag, `v1.2.3`
    pub fn tagged(&self) -> String {
        format!("v{}", self)
    }

    /// Compares field by field, most significant first.
    ///
    /// Returns `-1`, `0` or `1`.
    pub fn compare(&self, other: &Version) -> i8 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Parse a release tag of the exact form `v<major>.<minor>.<patch>`.
    ///
    /// Anything else is rejected, including pre-release or build suffixes:
    /// - "v1.2.3" -> Version(1, 2, 3)
    /// - "1.2.3", "v1.2", "v1.2.3-rc1" -> `LookupError::InvalidTag`
    pub fn parse_tag(tag: &str) -> Result<Self, LookupError> {
        let invalid = || LookupError::InvalidTag(tag.to_string());
        let caps = TAG_REGEX.captures(tag).ok_or_else(invalid)?;

        let field = |i: usize| caps[i].parse::<u64>().map_err(|_| invalid());
        Ok(Self::new(field(1)?, field(2)?, field(3)?))
    }

    /// Parse a caller supplied version, with or without the leading `v`.
    pub fn parse_plain(version: &str) -> Result<Self, LookupError> {
        if version.starts_with('v') {
            Self::parse_tag(version)
        } else {
            Self::parse_tag(&format!("v{}", version))
                .map_err(|_| LookupError::InvalidTag(version.to_string()))
        }
    }

    fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_tag(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.triple() == other.triple()
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.triple().hash(state);
    }
}

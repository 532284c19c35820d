use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::PreReleaseIdentifier;
use crate::error::{Result, VersionScoutError};
use crate::grammar;

/// Semantic version representation per SemVer 2.0.0
///
/// Constructed via [grammar::parse] (or [SemanticVersion::new] for a bare
/// triplet) and never mutated afterwards; the next_* operations return a
/// new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Dot-separated identifiers after `-`; empty when absent
    pub pre_release: Vec<PreReleaseIdentifier>,
    /// Dot-separated identifiers after `+`; empty when absent
    pub build_metadata: Vec<String>,
}

impl SemanticVersion {
    /// Create a release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build_metadata: Vec::new(),
        }
    }

    /// Strictly parse a version string, anchored at both ends
    ///
    /// # Returns
    /// * `Ok(SemanticVersion)` - Input conforms to the full grammar
    /// * `Err(VersionScoutError::InvalidFormat)` - Otherwise
    pub fn parse(input: &str) -> Result<Self> {
        grammar::parse(input)
    }

    /// Whether this version carries a pre-release sequence
    pub fn is_pre_release(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Next major version: major+1, minor and patch reset, pre-release and
    /// build metadata cleared
    pub fn next_major(&self) -> Self {
        SemanticVersion::new(self.major + 1, 0, 0)
    }

    /// Next minor version: minor+1, patch reset, pre-release and build
    /// metadata cleared
    pub fn next_minor(&self) -> Self {
        SemanticVersion::new(self.major, self.minor + 1, 0)
    }

    /// Next patch version: patch+1, pre-release and build metadata cleared
    pub fn next_patch(&self) -> Self {
        SemanticVersion::new(self.major, self.minor, self.patch + 1)
    }

    /// Next pre-release iteration of this version
    ///
    /// Increments the trailing numeric identifier, or appends `.1` when the
    /// sequence does not end in a numeric identifier. Build metadata is
    /// cleared.
    ///
    /// # Returns
    /// * `Ok(SemanticVersion)` - The incremented pre-release version
    /// * `Err` - If this is a release version (nothing to increment)
    ///
    /// # Example
    /// ```ignore
    /// let v = SemanticVersion::parse("1.2.3-beta.1")?;
    /// assert_eq!(v.next_pre_release()?.to_string(), "1.2.3-beta.2");
    /// ```
    pub fn next_pre_release(&self) -> Result<Self> {
        if self.pre_release.is_empty() {
            return Err(VersionScoutError::version(format!(
                "'{}' is not a pre-release version",
                self
            )));
        }

        let mut pre_release = self.pre_release.clone();
        match pre_release.last_mut() {
            Some(PreReleaseIdentifier::Numeric(n)) => *n += 1,
            _ => pre_release.push(PreReleaseIdentifier::Numeric(1)),
        }

        Ok(SemanticVersion {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre_release,
            build_metadata: Vec::new(),
        })
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-")?;
            for (i, id) in self.pre_release.iter().enumerate() {
                if i > 0 {
                    write!(f, ".")?;
                }
                write!(f, "{}", id)?;
            }
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+")?;
            for (i, id) in self.build_metadata.iter().enumerate() {
                if i > 0 {
                    write!(f, ".")?;
                }
                write!(f, "{}", id)?;
            }
        }
        Ok(())
    }
}

impl FromStr for SemanticVersion {
    type Err = VersionScoutError;

    fn from_str(s: &str) -> Result<Self> {
        grammar::parse(s)
    }
}

impl Ord for SemanticVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.major.cmp(&other.major) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.minor.cmp(&other.minor) {
            Ordering::Equal => {}
            ord => return ord,
        }
        match self.patch.cmp(&other.patch) {
            Ordering::Equal => {}
            ord => return ord,
        }

        // Build metadata does not participate in precedence
        match (self.pre_release.is_empty(), other.pre_release.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                for (a, b) in self.pre_release.iter().zip(other.pre_release.iter()) {
                    match a.cmp(b) {
                        Ordering::Equal => continue,
                        ord => return ord,
                    }
                }
                // A strict-prefix sequence has lower precedence
                self.pre_release.len().cmp(&other.pre_release.len())
            }
        }
    }
}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

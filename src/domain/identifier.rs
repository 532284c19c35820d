use std::cmp::Ordering;
use std::fmt;

use crate::error::{Result, VersionScoutError};

/// One dot-separated token of a pre-release sequence.
///
/// Numeric identifiers compare numerically and always rank below
/// alphanumeric identifiers at the same position; alphanumeric identifiers
/// compare lexically by ASCII code point.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreReleaseIdentifier {
    /// All-digits identifier, no leading zero (e.g. "1" in "alpha.1")
    Numeric(u64),
    /// Identifier containing at least one letter or hyphen (e.g. "alpha")
    Alpha(String),
}

impl PreReleaseIdentifier {
    /// Parse a single pre-release identifier
    ///
    /// Accepts `[0-9A-Za-z-]+`; an identifier consisting solely of digits
    /// must not have a leading zero unless it is `0` itself.
    ///
    /// # Arguments
    /// * `s` - Identifier token to parse (without surrounding dots)
    ///
    /// # Returns
    /// * `Ok(PreReleaseIdentifier)` - Parsed identifier
    /// * `Err` - If the token is empty, contains invalid characters, has a
    ///   leading zero, or exceeds the numeric range
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(VersionScoutError::invalid_format(
                "empty pre-release identifier",
            ));
        }

        if s.chars().all(|c| c.is_ascii_digit()) {
            if s.len() > 1 && s.starts_with('0') {
                return Err(VersionScoutError::invalid_format(format!(
                    "leading zero in pre-release identifier '{}'",
                    s
                )));
            }
            s.parse::<u64>()
                .map(PreReleaseIdentifier::Numeric)
                .map_err(|_| {
                    VersionScoutError::invalid_format(format!(
                        "pre-release identifier '{}' out of range",
                        s
                    ))
                })
        } else if s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            Ok(PreReleaseIdentifier::Alpha(s.to_string()))
        } else {
            Err(VersionScoutError::invalid_format(format!(
                "invalid pre-release identifier '{}'",
                s
            )))
        }
    }
}

impl fmt::Display for PreReleaseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreReleaseIdentifier::Numeric(n) => write!(f, "{}", n),
            PreReleaseIdentifier::Alpha(s) => write!(f, "{}", s),
        }
    }
}

impl Ord for PreReleaseIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PreReleaseIdentifier::Numeric(a), PreReleaseIdentifier::Numeric(b)) => a.cmp(b),
            (PreReleaseIdentifier::Numeric(_), PreReleaseIdentifier::Alpha(_)) => Ordering::Less,
            (PreReleaseIdentifier::Alpha(_), PreReleaseIdentifier::Numeric(_)) => Ordering::Greater,
            (PreReleaseIdentifier::Alpha(a), PreReleaseIdentifier::Alpha(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for PreReleaseIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

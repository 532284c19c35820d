//! Semantic Versioning 2.0.0 grammar.
//!
//! The whole grammar is one composed pattern with named capture groups,
//! used anchored for strict parsing and unanchored for scanning embedded
//! versions out of arbitrary text. Rules the pattern cannot express
//! (numeric range, leading-zero rejection per pre-release identifier) are
//! validated after capture.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::{PreReleaseIdentifier, SemanticVersion};
use crate::error::{Result, VersionScoutError};

/// MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]
///
/// MAJOR/MINOR/PATCH: numeric, no leading zeros except literal `0`.
/// PRERELEASE: dot-separated identifiers, each all-digits-no-leading-zero
/// or alphanumeric-with-hyphen. BUILD: dot-separated `[0-9A-Za-z-]+`.
const SEMVER_PATTERN: &str = r"(?x)
    (?P<major>0|[1-9]\d*)
    \.
    (?P<minor>0|[1-9]\d*)
    \.
    (?P<patch>0|[1-9]\d*)
    (?:
        -
        (?P<pre_release>
            (?:0|[1-9]\d*|\d*[A-Za-z-][0-9A-Za-z-]*)
            (?:\.(?:0|[1-9]\d*|\d*[A-Za-z-][0-9A-Za-z-]*))*
        )
    )?
    (?:
        \+
        (?P<build_metadata>
            [0-9A-Za-z-]+
            (?:\.[0-9A-Za-z-]+)*
        )
    )?
";

fn anchored_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"\A(?:{})\z", SEMVER_PATTERN)).expect("anchored semver pattern")
    })
}

fn embedded_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SEMVER_PATTERN).expect("embedded semver pattern"))
}

/// A version found by [find_first], with the byte span of the matched
/// substring within the scanned text
#[derive(Debug, Clone, PartialEq)]
pub struct VersionMatch {
    pub version: SemanticVersion,
    pub span: Range<usize>,
}

/// Strictly parse a version string
///
/// The input must match the full grammar anchored at both ends; no
/// surrounding text or whitespace is permitted.
///
/// # Arguments
/// * `input` - Candidate version string
///
/// # Returns
/// * `Ok(SemanticVersion)` - Input conforms to the grammar
/// * `Err(VersionScoutError::InvalidFormat)` - Otherwise
pub fn parse(input: &str) -> Result<SemanticVersion> {
    let caps = anchored_pattern()
        .captures(input)
        .ok_or_else(|| VersionScoutError::invalid_format(input))?;
    version_from_captures(&caps)
}

/// Scan arbitrary text for the first embedded version
///
/// Used when extracting a version from a larger file, such as a gemspec.
/// Returns the parsed version together with the span of the matched
/// substring, or `None` when the text contains no version.
pub fn find_first(text: &str) -> Option<VersionMatch> {
    for caps in embedded_pattern().captures_iter(text) {
        if let Ok(version) = version_from_captures(&caps) {
            let span = caps.get(0)?.range();
            return Some(VersionMatch { version, span });
        }
    }
    None
}

/// Post-capture validation and conversion shared by both entry points
fn version_from_captures(caps: &regex::Captures<'_>) -> Result<SemanticVersion> {
    let major = numeric_component(&caps["major"])?;
    let minor = numeric_component(&caps["minor"])?;
    let patch = numeric_component(&caps["patch"])?;

    let pre_release = match caps.name("pre_release") {
        Some(m) => m
            .as_str()
            .split('.')
            .map(PreReleaseIdentifier::parse)
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    let build_metadata = match caps.name("build_metadata") {
        Some(m) => m.as_str().split('.').map(String::from).collect(),
        None => Vec::new(),
    };

    Ok(SemanticVersion {
        major,
        minor,
        patch,
        pre_release,
        build_metadata,
    })
}

fn numeric_component(s: &str) -> Result<u64> {
    // The pattern already rejects leading zeros; only range can fail here
    s.parse::<u64>().map_err(|_| {
        VersionScoutError::invalid_format(format!("version component '{}' out of range", s))
    })
}

//! Version source strategies
//!
//! A [VersionSource] is one named, self-contained rule for locating and
//! extracting a raw version string from one specific file convention. The
//! [VersionFileFinder] tries a fixed list of sources in priority order and
//! returns the first hit.
//!
//! The order of the list is important: sources earlier in the list are the
//! more deliberate or more authoritative conventions, and the first source
//! that yields a valid version wins, even if a later source would also
//! match. Changing the order changes observable behavior for packages that
//! declare their version in more than one place.

pub mod cargo_toml;
pub mod gemspec;
pub mod package_json;
pub mod pyproject;
pub mod version_file;
pub mod version_rb;

pub use cargo_toml::CargoTomlSource;
pub use gemspec::GemspecSource;
pub use package_json::PackageJsonSource;
pub use pyproject::PyprojectSource;
pub use version_file::VersionFileSource;
pub use version_rb::VersionRbSource;

use std::path::{Path, PathBuf};

use crate::domain::SemanticVersion;
use crate::fs::FileSystem;
use crate::grammar;

/// Raw extraction result of a single source: the captured version string
/// before grammar validation, and the file it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct RawVersion {
    pub raw: String,
    pub path: PathBuf,
}

/// One named rule for extracting a version from one file convention
///
/// Sources are stateless and own no data: extraction is a pure function
/// from a root path to an optional raw version. A source that finds its
/// target file but cannot extract anything from it returns `None` exactly
/// like a source whose target file does not exist.
pub trait VersionSource: Send + Sync {
    /// Stable name identifying the convention (e.g. "cargo-toml")
    fn name(&self) -> &'static str;

    /// Attempt to locate and extract a raw version string under `root`
    fn extract(&self, fs: &dyn FileSystem, root: &Path) -> Option<RawVersion>;
}

/// A successfully resolved version: the parsed value, the file it came
/// from, and the name of the source that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedVersion {
    pub version: SemanticVersion,
    pub path: PathBuf,
    pub source: &'static str,
}

/// The fixed source list, in priority order
///
/// An explicit VERSION file is the most deliberate declaration and is
/// checked first; the package-manifest conventions follow; the Ruby
/// literal-assignment and embedded-scan conventions are the loosest
/// captures and come last.
pub fn default_sources() -> Vec<Box<dyn VersionSource>> {
    vec![
        Box::new(VersionFileSource),
        Box::new(CargoTomlSource),
        Box::new(PackageJsonSource),
        Box::new(PyprojectSource),
        Box::new(VersionRbSource),
        Box::new(GemspecSource),
    ]
}

/// Finds the file that holds a package's canonical version declaration
pub struct VersionFileFinder {
    sources: Vec<Box<dyn VersionSource>>,
}

impl VersionFileFinder {
    /// Create a finder with the default source list
    pub fn new() -> Self {
        VersionFileFinder {
            sources: default_sources(),
        }
    }

    /// Create a finder with an explicit source list (primarily for tests)
    pub fn with_sources(sources: Vec<Box<dyn VersionSource>>) -> Self {
        VersionFileFinder { sources }
    }

    /// Resolve the version declaration under a package root
    ///
    /// Tries each source in list order and stops at the first one whose
    /// raw capture strictly parses. A located file with invalid content is
    /// indistinguishable from a missing file: both fall through to the
    /// next source. Returns `None` when no source matches, which is the
    /// expected outcome for a package with no recognizable version
    /// declaration, not an error.
    pub fn find(&self, fs: &dyn FileSystem, root: &Path) -> Option<ResolvedVersion> {
        for source in &self.sources {
            if let Some(candidate) = source.extract(fs, root) {
                if let Ok(version) = grammar::parse(&candidate.raw) {
                    return Some(ResolvedVersion {
                        version,
                        path: candidate.path,
                        source: source.name(),
                    });
                }
            }
        }
        None
    }
}

impl Default for VersionFileFinder {
    fn default() -> Self {
        Self::new()
    }
}

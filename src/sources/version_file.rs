use std::path::Path;

use crate::fs::FileSystem;
use crate::sources::{RawVersion, VersionSource};

/// Plain version file convention: a `VERSION` (or `VERSION.txt`) file in
/// the package root whose first line is the version string
pub struct VersionFileSource;

const CANDIDATES: [&str; 2] = ["VERSION", "VERSION.txt"];

impl VersionSource for VersionFileSource {
    fn name(&self) -> &'static str {
        "version-file"
    }

    fn extract(&self, fs: &dyn FileSystem, root: &Path) -> Option<RawVersion> {
        for candidate in CANDIDATES {
            let path = root.join(candidate);
            if !fs.file_exists(&path) {
                continue;
            }
            let content = fs.read_file(&path)?;
            let raw = content.lines().next().unwrap_or("").trim();
            if !raw.is_empty() {
                return Some(RawVersion {
                    raw: raw.to_string(),
                    path,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_extracts_trimmed_first_line() {
        let mut fs = MockFileSystem::new();
        fs.add_file("pkg/VERSION", "  1.2.3  \nchangelog notes\n");

        let found = VersionFileSource.extract(&fs, Path::new("pkg")).unwrap();
        assert_eq!(found.raw, "1.2.3");
        assert_eq!(found.path, Path::new("pkg/VERSION"));
    }

    #[test]
    fn test_falls_back_to_txt_candidate() {
        let mut fs = MockFileSystem::new();
        fs.add_file("pkg/VERSION.txt", "0.9.0\n");

        let found = VersionFileSource.extract(&fs, Path::new("pkg")).unwrap();
        assert_eq!(found.raw, "0.9.0");
        assert_eq!(found.path, Path::new("pkg/VERSION.txt"));
    }

    #[test]
    fn test_prefers_bare_version_file() {
        let mut fs = MockFileSystem::new();
        fs.add_file("pkg/VERSION", "1.0.0\n");
        fs.add_file("pkg/VERSION.txt", "2.0.0\n");

        let found = VersionFileSource.extract(&fs, Path::new("pkg")).unwrap();
        assert_eq!(found.raw, "1.0.0");
    }

    #[test]
    fn test_empty_file_is_absent() {
        let mut fs = MockFileSystem::new();
        fs.add_file("pkg/VERSION", "\n\n");

        assert!(VersionFileSource.extract(&fs, Path::new("pkg")).is_none());
    }

    #[test]
    fn test_missing_file_is_absent() {
        let fs = MockFileSystem::new();
        assert!(VersionFileSource.extract(&fs, Path::new("pkg")).is_none());
    }
}

use std::path::Path;

use crate::fs::FileSystem;
use crate::grammar;
use crate::sources::{RawVersion, VersionSource};

/// Gemspec convention: the first `*.gemspec` file in the package root,
/// scanned for the first embedded version anywhere in its text
pub struct GemspecSource;

impl VersionSource for GemspecSource {
    fn name(&self) -> &'static str {
        "gemspec"
    }

    fn extract(&self, fs: &dyn FileSystem, root: &Path) -> Option<RawVersion> {
        for path in fs.list_dir(root) {
            if path.extension().and_then(|ext| ext.to_str()) != Some("gemspec") {
                continue;
            }
            let content = match fs.read_file(&path) {
                Some(content) => content,
                None => continue,
            };
            if let Some(found) = grammar::find_first(&content) {
                return Some(RawVersion {
                    raw: content[found.span.clone()].to_string(),
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
    fn test_scans_embedded_version() {
        let mut fs = MockFileSystem::new();
        fs.add_file(
            "pkg/demo.gemspec",
            concat!(
                "Gem::Specification.new do |spec|\n",
                "  spec.name = 'demo'\n",
                "  spec.version = '1.3.2'\n",
                "end\n",
            ),
        );

        let found = GemspecSource.extract(&fs, Path::new("pkg")).unwrap();
        assert_eq!(found.raw, "1.3.2");
        assert_eq!(found.path, Path::new("pkg/demo.gemspec"));
    }

    #[test]
    fn test_first_gemspec_in_sorted_order() {
        let mut fs = MockFileSystem::new();
        fs.add_file("pkg/b.gemspec", "spec.version = '2.0.0'\n");
        fs.add_file("pkg/a.gemspec", "spec.version = '1.0.0'\n");

        let found = GemspecSource.extract(&fs, Path::new("pkg")).unwrap();
        assert_eq!(found.raw, "1.0.0");
        assert_eq!(found.path, Path::new("pkg/a.gemspec"));
    }

    #[test]
    fn test_ignores_non_gemspec_files() {
        let mut fs = MockFileSystem::new();
        fs.add_file("pkg/Rakefile", "version = '4.0.0'\n");

        assert!(GemspecSource.extract(&fs, Path::new("pkg")).is_none());
    }

    #[test]
    fn test_gemspec_without_version_is_absent() {
        let mut fs = MockFileSystem::new();
        fs.add_file("pkg/demo.gemspec", "spec.name = 'demo'\n");

        assert!(GemspecSource.extract(&fs, Path::new("pkg")).is_none());
    }
}

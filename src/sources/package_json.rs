use std::path::Path;

use crate::fs::FileSystem;
use crate::sources::{RawVersion, VersionSource};

/// npm manifest convention: top-level `"version"` in `package.json`
pub struct PackageJsonSource;

impl VersionSource for PackageJsonSource {
    fn name(&self) -> &'static str {
        "package-json"
    }

    fn extract(&self, fs: &dyn FileSystem, root: &Path) -> Option<RawVersion> {
        let path = root.join("package.json");
        let content = fs.read_file(&path)?;
        let manifest: serde_json::Value = serde_json::from_str(&content).ok()?;
        let raw = manifest.get("version")?.as_str()?;

        Some(RawVersion {
            raw: raw.to_string(),
            path,
        })
    }
}

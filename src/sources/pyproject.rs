use std::path::Path;

use crate::fs::FileSystem;
use crate::sources::{RawVersion, VersionSource};

/// Python manifest convention: `[project] version` in `pyproject.toml`,
/// falling back to `[tool.poetry] version`
pub struct PyprojectSource;

impl VersionSource for PyprojectSource {
    fn name(&self) -> &'static str {
        "pyproject"
    }

    fn extract(&self, fs: &dyn FileSystem, root: &Path) -> Option<RawVersion> {
        let path = root.join("pyproject.toml");
        let content = fs.read_file(&path)?;
        let manifest: toml::Value = content.parse().ok()?;

        let raw = table_str(&manifest, &["project", "version"])
            .or_else(|| table_str(&manifest, &["tool", "poetry", "version"]))?;

        Some(RawVersion {
            raw: raw.to_string(),
            path,
        })
    }
}

fn table_str<'a>(value: &'a toml::Value, keys: &[&str]) -> Option<&'a str> {
    let mut current = value;
    for key in keys {
        current = current.get(key)?;
    }
    current.as_str()
}

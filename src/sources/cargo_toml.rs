use std::path::Path;

use crate::fs::FileSystem;
use crate::sources::{RawVersion, VersionSource};

/// Cargo manifest convention: `[package] version` in `Cargo.toml`, falling
/// back to `[workspace.package] version` for a workspace root
pub struct CargoTomlSource;

impl VersionSource for CargoTomlSource {
    fn name(&self) -> &'static str {
        "cargo-toml"
    }

    fn extract(&self, fs: &dyn FileSystem, root: &Path) -> Option<RawVersion> {
        let path = root.join("Cargo.toml");
        let content = fs.read_file(&path)?;
        let manifest: toml::Value = content.parse().ok()?;

        let raw = table_str(&manifest, &["package", "version"])
            .or_else(|| table_str(&manifest, &["workspace", "package", "version"]))?;

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

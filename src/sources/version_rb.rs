use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::fs::FileSystem;
use crate::sources::{RawVersion, VersionSource};

/// Ruby gem convention: a `VERSION = '…'` constant assignment in
/// `lib/version.rb` or `lib/<gem>/version.rb`
pub struct VersionRbSource;

fn assignment_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"VERSION\s*=\s*['"]([^'"]+)['"]"#).expect("version assignment pattern")
    })
}

impl VersionSource for VersionRbSource {
    fn name(&self) -> &'static str {
        "version-rb"
    }

    fn extract(&self, fs: &dyn FileSystem, root: &Path) -> Option<RawVersion> {
        let lib = root.join("lib");

        let mut candidates = vec![lib.join("version.rb")];
        for entry in fs.list_dir(&lib) {
            candidates.push(entry.join("version.rb"));
        }

        for path in candidates {
            let content = match fs.read_file(&path) {
                Some(content) => content,
                None => continue,
            };
            if let Some(caps) = assignment_pattern().captures(&content) {
                return Some(RawVersion {
                    raw: caps[1].to_string(),
                    path,
                });
            }
        }
        None
    }
}

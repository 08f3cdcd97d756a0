//! Textual package usage detection.
//!
//! A package counts as used when any scanned file contains one of a fixed
//! set of quoted-name patterns. This is a heuristic, not import resolution:
//! the bare-quote pattern has no word boundaries, so a short name like `a`
//! matches any quoted string starting with that letter.

use std::fs;
use std::path::Path;

use regex::{RegexSet, RegexSetBuilder};
use tracing::{debug, warn};

use super::scanner::SourceFileCache;

/// Builds the usage patterns for a package name.
///
/// Scoped names need no extra patterns: `regex::escape` already makes `@`
/// and `/` literal, so the `from`/`require` patterns cover them.
pub fn usage_patterns(package_name: &str) -> Vec<String> {
    let escaped = regex::escape(package_name);
    vec![
        format!(r#"from\s+['"]{}"#, escaped),
        format!(r#"require\(['"]{}"#, escaped),
        format!(r#"import.*['"]{}"#, escaped),
        format!(r#"['"]{}['"]"#, escaped),
    ]
}

/// Case-insensitive matcher for the usage patterns of one package.
#[derive(Debug, Clone)]
pub struct UsageMatcher {
    package_name: String,
    patterns: RegexSet,
}

impl UsageMatcher {
    /// Compile the patterns for `package_name`.
    pub fn new(package_name: &str) -> Result<Self, regex::Error> {
        let patterns = RegexSetBuilder::new(usage_patterns(package_name))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            package_name: package_name.to_string(),
            patterns,
        })
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Returns true if any pattern matches somewhere in `source`.
    pub fn matches_source(&self, source: &str) -> bool {
        self.patterns.is_match(source)
    }

    /// Reads `path` and tests it. Unreadable files count as no match.
    pub fn matches_file(&self, path: &Path) -> bool {
        match fs::read(path) {
            Ok(bytes) => self.matches_source(&String::from_utf8_lossy(&bytes)),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable file");
                false
            }
        }
    }
}

/// Checks whether `package_name` is referenced by any cached source file.
///
/// Files are tested in cache order and the scan stops at the first match.
pub fn check_package_usage(package_name: &str, sources: &SourceFileCache) -> bool {
    let matcher = match UsageMatcher::new(package_name) {
        Ok(matcher) => matcher,
        Err(e) => {
            warn!(package = package_name, error = %e, "cannot build usage patterns");
            return false;
        }
    };

    sources.files().iter().any(|file| matcher.matches_file(file))
}

//! Shared types for manifest and package list parsing.
//!
//! This module defines the data structures read from `package.json`,
//! `package-lock.json` and the user-supplied package list.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Installed package name → installed version, in lockfile order.
pub type InstalledPackageMap = IndexMap<String, String>;

/// Direct dependency name → version range, in manifest order.
pub type DirectDependencyMap = IndexMap<String, String>;

/// Represents the parts of a package.json file used by the audit.
///
/// Unknown fields (scripts, author, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PackageJson {
    /// The name of the package.
    pub name: Option<String>,

    /// Production dependencies required at runtime.
    pub dependencies: Option<IndexMap<String, String>>,

    /// Development-only dependencies (testing, building, etc.).
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: Option<IndexMap<String, String>>,
}

impl PackageJson {
    /// Returns the total count of declared dependencies, duplicates included.
    pub fn dependency_count(&self) -> usize {
        self.dependencies.as_ref().map_or(0, |d| d.len())
            + self.dev_dependencies.as_ref().map_or(0, |d| d.len())
    }
}

/// Represents the parts of a package-lock.json file used by the audit.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PackageLock {
    /// Install path (e.g. `node_modules/@scope/pkg`) → entry.
    /// The root project is stored under the empty key.
    pub packages: Option<IndexMap<String, LockEntry>>,
}

/// A single `packages` entry in a lockfile.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LockEntry {
    pub version: Option<String>,
}

/// One row of the package list being audited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    /// The package name (e.g., "react", "@types/node").
    pub name: String,

    /// The version given in the list, if any.
    pub declared_version: Option<String>,
}

impl PackageEntry {
    /// Creates a new PackageEntry instance.
    pub fn new(name: impl Into<String>, declared_version: Option<String>) -> Self {
        Self {
            name: name.into(),
            declared_version,
        }
    }

    /// Returns true if the name has the `@scope/name` form.
    pub fn is_scoped(&self) -> bool {
        is_scoped(&self.name)
    }
}

impl fmt::Display for PackageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.declared_version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Returns true if a package name starts with the `@` scope marker.
pub fn is_scoped(name: &str) -> bool {
    name.starts_with('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_entry_new() {
        let entry = PackageEntry::new("react", Some("18.2.0".to_string()));
        assert_eq!(entry.name, "react");
        assert_eq!(entry.declared_version.as_deref(), Some("18.2.0"));
        assert!(!entry.is_scoped());
    }

    #[test]
    fn test_package_entry_display() {
        let entry = PackageEntry::new("@types/node", Some("20.1.0".to_string()));
        assert_eq!(format!("{}", entry), "@types/node@20.1.0");
        assert_eq!(format!("{}", PackageEntry::new("lodash", None)), "lodash");
    }

    #[test]
    fn test_package_json_default() {
        let pkg = PackageJson::default();
        assert!(pkg.name.is_none());
        assert_eq!(pkg.dependency_count(), 0);
    }

    #[test]
    fn test_lock_entry_ignores_unknown_fields() {
        let entry: LockEntry =
            serde_json::from_str(r#"{"version": "1.0.0", "resolved": "x", "dev": true}"#).unwrap();
        assert_eq!(entry.version.as_deref(), Some("1.0.0"));
    }
}

//! Parser for npm package-lock.json files.
//!
//! Flattens the lockfile's `packages` map (keyed by install path) into a
//! package name → installed version map.

use std::fs;
use std::path::Path;

use tracing::warn;

use super::package_json::{read_direct_dependencies, ParseResult};
use super::types::{is_scoped, InstalledPackageMap, PackageLock};

const NODE_MODULES_PREFIX: &str = "node_modules/";

/// Parses a package-lock.json from a string.
pub fn parse_str(content: &str) -> ParseResult<PackageLock> {
    let lock: PackageLock = serde_json::from_str(content)?;
    Ok(lock)
}

/// Parses a package-lock.json file from a file path.
pub fn parse_file(path: &Path) -> ParseResult<PackageLock> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Derives the package name from a lockfile install path.
///
/// One leading `node_modules/` is stripped; scoped packages keep their first
/// two segments, everything else keeps only the first. Nested installs such
/// as `node_modules/a/node_modules/b` therefore map to `a`.
///
/// ```
/// use pkgscope::parser::package_lock::package_name_from_install_path;
///
/// assert_eq!(package_name_from_install_path("node_modules/@scope/pkg"), "@scope/pkg");
/// assert_eq!(package_name_from_install_path("node_modules/lodash"), "lodash");
/// ```
pub fn package_name_from_install_path(install_path: &str) -> String {
    let rest = install_path
        .strip_prefix(NODE_MODULES_PREFIX)
        .unwrap_or(install_path);
    let mut segments = rest.split('/');
    let first = segments.next().unwrap_or_default();

    if is_scoped(first) {
        match segments.next() {
            Some(second) => format!("{}/{}", first, second),
            None => first.to_string(),
        }
    } else {
        first.to_string()
    }
}

/// Builds the installed package map from a parsed lockfile.
///
/// The root entry (`""`) and entries without a version are skipped. When two
/// paths derive the same name, the later one's version wins.
pub fn installed_packages(lock: &PackageLock) -> InstalledPackageMap {
    let mut installed = InstalledPackageMap::new();

    let Some(packages) = &lock.packages else {
        return installed;
    };

    for (install_path, entry) in packages {
        if install_path.is_empty() {
            continue;
        }
        let Some(version) = entry.version.as_deref().filter(|v| !v.is_empty()) else {
            continue;
        };
        installed.insert(
            package_name_from_install_path(install_path),
            version.to_string(),
        );
    }

    installed
}

/// Reads the installed packages from the lockfile at `lock_path`.
///
/// If the lockfile cannot be read or parsed, the direct dependencies of the
/// manifest at `manifest_path` are returned instead, unmerged.
pub fn read_installed_packages(lock_path: &Path, manifest_path: &Path) -> InstalledPackageMap {
    match parse_file(lock_path) {
        Ok(lock) => installed_packages(&lock),
        Err(e) => {
            warn!(
                path = %lock_path.display(),
                error = %e,
                "cannot read package-lock.json, falling back to package.json"
            );
            read_direct_dependencies(manifest_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE_LOCK: &str = r#"{
        "name": "test-app",
        "lockfileVersion": 3,
        "packages": {
            "": {"name": "test-app", "version": "1.0.0"},
            "node_modules/@scope/pkg": {"version": "1.2.3"},
            "node_modules/lodash": {"version": "4.17.21"},
            "node_modules/react": {"version": "18.2.0", "dev": false},
            "node_modules/react/node_modules/loose-envify": {"version": "1.4.0"},
            "node_modules/no-version": {"resolved": "https://example.com"}
        }
    }"#;

    #[test]
    fn test_package_name_from_install_path() {
        assert_eq!(package_name_from_install_path("node_modules/@scope/pkg"), "@scope/pkg");
        assert_eq!(package_name_from_install_path("node_modules/lodash"), "lodash");
        assert_eq!(
            package_name_from_install_path("node_modules/react/node_modules/loose-envify"),
            "react"
        );
        assert_eq!(package_name_from_install_path("packages/local"), "packages");
        assert_eq!(package_name_from_install_path("node_modules/@lonely"), "@lonely");
    }

    #[test]
    fn test_installed_packages_skips_root_and_unversioned() {
        let lock = parse_str(SAMPLE_LOCK).unwrap();
        let installed = installed_packages(&lock);

        assert_eq!(installed.get("@scope/pkg").map(String::as_str), Some("1.2.3"));
        assert!(!installed.contains_key(""));
        assert!(!installed.contains_key("test-app"));
        assert!(!installed.contains_key("no-version"));
        assert_eq!(installed.len(), 3);
    }

    #[test]
    fn test_installed_packages_later_entry_wins() {
        let lock = parse_str(r#"{
            "packages": {
                "node_modules/debug": {"version": "4.3.4"},
                "node_modules/debug/node_modules/ms": {"version": "2.1.2"},
                "node_modules/ms": {"version": "2.1.3"}
            }
        }"#)
        .unwrap();
        let installed = installed_packages(&lock);

        // `debug/node_modules/ms` derives `debug`, overwriting 4.3.4
        assert_eq!(installed["debug"], "2.1.2");
        assert_eq!(installed["ms"], "2.1.3");
        let names: Vec<_> = installed.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["debug", "ms"]);
    }

    #[test]
    fn test_installed_packages_without_packages_key() {
        let lock = parse_str(r#"{"lockfileVersion": 1}"#).unwrap();
        assert!(installed_packages(&lock).is_empty());
    }

    #[test]
    fn test_read_installed_packages_falls_back_to_manifest() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("package.json");
        fs::write(
            &manifest,
            r#"{"dependencies": {"express": "^4.18.0"}, "devDependencies": {"jest": "^29.0.0"}}"#,
        )
        .unwrap();
        let lock = dir.path().join("package-lock.json");
        fs::write(&lock, "not json").unwrap();

        let installed = read_installed_packages(&lock, &manifest);
        assert_eq!(installed.len(), 2);
        assert_eq!(installed["express"], "^4.18.0");
    }

    #[test]
    fn test_read_installed_packages_both_missing() {
        let dir = TempDir::new().unwrap();
        let installed = read_installed_packages(
            &dir.path().join("package-lock.json"),
            &dir.path().join("package.json"),
        );
        assert!(installed.is_empty());
    }
}

//! Parser for npm package.json files.
//!
//! This module reads the direct dependency declarations of a project.

use std::fs;
use std::path::Path;

use tracing::warn;

use super::types::{DirectDependencyMap, PackageJson};

/// Errors that can occur during manifest and lockfile parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to parse JSON content.
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a package.json file from a file path.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use pkgscope::parser::package_json::parse_file;
///
/// let pkg = parse_file(Path::new("package.json")).unwrap();
/// println!("Package: {:?}", pkg.name);
/// ```
pub fn parse_file(path: &Path) -> ParseResult<PackageJson> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a package.json from a string.
///
/// # Example
///
/// ```
/// use pkgscope::parser::package_json::parse_str;
///
/// let json = r#"{"name": "my-app", "dependencies": {"react": "^18.0.0"}}"#;
/// let pkg = parse_str(json).unwrap();
/// assert_eq!(pkg.name, Some("my-app".to_string()));
/// ```
pub fn parse_str(content: &str) -> ParseResult<PackageJson> {
    let pkg: PackageJson = serde_json::from_str(content)?;
    Ok(pkg)
}

/// Merges `dependencies` and `devDependencies` into one map.
///
/// A name declared in both sections takes the devDependencies range but
/// keeps the position it had in `dependencies`.
///
/// # Example
///
/// ```
/// use pkgscope::parser::package_json::{direct_dependencies, parse_str};
///
/// let pkg = parse_str(r#"{
///     "dependencies": {"react": "^18.0.0"},
///     "devDependencies": {"typescript": "^5.0.0"}
/// }"#).unwrap();
///
/// let deps = direct_dependencies(&pkg);
/// assert_eq!(deps.len(), 2);
/// assert_eq!(deps["typescript"], "^5.0.0");
/// ```
pub fn direct_dependencies(pkg: &PackageJson) -> DirectDependencyMap {
    let mut deps = DirectDependencyMap::new();

    for section in [&pkg.dependencies, &pkg.dev_dependencies]
        .into_iter()
        .flatten()
    {
        for (name, version) in section {
            deps.insert(name.clone(), version.clone());
        }
    }

    deps
}

/// Reads the direct dependencies of the manifest at `path`.
///
/// Never fails: an unreadable or malformed manifest is logged and yields an
/// empty map.
pub fn read_direct_dependencies(path: &Path) -> DirectDependencyMap {
    match parse_file(path) {
        Ok(pkg) => direct_dependencies(&pkg),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read package.json");
            DirectDependencyMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE_PACKAGE_JSON: &str = r#"{
        "name": "test-app",
        "version": "1.0.0",
        "dependencies": {
            "react": "^18.2.0",
            "lodash": "^4.17.21",
            "axios": "^1.6.0"
        },
        "devDependencies": {
            "typescript": "^5.0.0",
            "lodash": "^4.17.0"
        }
    }"#;

    #[test]
    fn test_parse_str_valid() {
        let pkg = parse_str(SAMPLE_PACKAGE_JSON).unwrap();

        assert_eq!(pkg.name, Some("test-app".to_string()));
        assert_eq!(pkg.dependency_count(), 5);
    }

    #[test]
    fn test_parse_str_invalid_json() {
        let result = parse_str("{ invalid json }");

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParseError::JsonError(_)));
    }

    #[test]
    fn test_direct_dependencies_dev_overrides() {
        let pkg = parse_str(SAMPLE_PACKAGE_JSON).unwrap();
        let deps = direct_dependencies(&pkg);

        assert_eq!(deps.len(), 4);
        assert_eq!(deps["lodash"], "^4.17.0");

        // lodash keeps its slot from `dependencies`
        let names: Vec<_> = deps.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["react", "lodash", "axios", "typescript"]);
    }

    #[test]
    fn test_direct_dependencies_empty() {
        let pkg = parse_str(r#"{"name": "no-deps"}"#).unwrap();
        assert!(direct_dependencies(&pkg).is_empty());
    }

    #[test]
    fn test_read_direct_dependencies_missing_file() {
        let dir = TempDir::new().unwrap();
        let deps = read_direct_dependencies(&dir.path().join("package.json"));
        assert!(deps.is_empty());
    }

    #[test]
    fn test_read_direct_dependencies_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, "{ \"dependencies\": ").unwrap();

        assert!(read_direct_dependencies(&path).is_empty());
    }

    #[test]
    fn test_read_direct_dependencies_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, SAMPLE_PACKAGE_JSON).unwrap();

        let deps = read_direct_dependencies(&path);
        assert_eq!(deps.get("react").map(String::as_str), Some("^18.2.0"));
    }

    #[test]
    fn test_parse_error_display() {
        let io_err = ParseError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        assert!(io_err.to_string().contains("Failed to read file"));
    }
}

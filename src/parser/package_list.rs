//! Loader for the tab-separated package list being audited.
//!
//! Each non-blank line is `name` or `name<TAB>version`.

use std::fs;
use std::path::{Path, PathBuf};

use super::types::PackageEntry;

/// Errors that can occur while loading the package list.
#[derive(Debug, thiserror::Error)]
pub enum PackageListError {
    /// The list file could not be read.
    #[error("Cannot read package list {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parses package list content.
///
/// Blank lines are ignored, columns are trimmed, and a missing or empty
/// version column becomes `None`. Extra columns are ignored.
///
/// ```
/// use pkgscope::parser::package_list::parse_str;
///
/// let entries = parse_str("react\t18.2.0\n\nlodash\n");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[1].declared_version, None);
/// ```
pub fn parse_str(content: &str) -> Vec<PackageEntry> {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut columns = line.split('\t');
            let name = columns.next().unwrap_or_default().trim();
            let version = columns
                .next()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string);
            PackageEntry::new(name, version)
        })
        .collect()
}

/// Reads and parses the package list at `path`.
pub fn read_package_list(path: &Path) -> Result<Vec<PackageEntry>, PackageListError> {
    let content = fs::read_to_string(path).map_err(|source| PackageListError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_str(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_str_columns() {
        let entries = parse_str("react\t18.2.0\n@types/node\t20.1.0\naxios\n");

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], PackageEntry::new("react", Some("18.2.0".into())));
        assert_eq!(entries[1].name, "@types/node");
        assert_eq!(entries[2], PackageEntry::new("axios", None));
    }

    #[test]
    fn test_parse_str_trims_and_skips_blank_lines() {
        let entries = parse_str("  lodash \t 4.17.21 \r\n\r\n   \n\tleft\nzod\t\n");

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], PackageEntry::new("lodash", Some("4.17.21".into())));
        // a line with an empty name column is still a record
        assert_eq!(entries[1], PackageEntry::new("", Some("left".into())));
        assert_eq!(entries[2], PackageEntry::new("zod", None));
    }

    #[test]
    fn test_parse_str_keeps_duplicates() {
        let entries = parse_str("react\t17.0.0\nreact\t18.2.0\n");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_read_package_list_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = read_package_list(&dir.path().join("missing.txt"));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Cannot read package list"));
    }

    #[test]
    fn test_read_package_list_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package-list.txt");
        fs::write(&path, "express\t4.18.2\n").unwrap();

        let entries = read_package_list(&path).unwrap();
        assert_eq!(entries, vec![PackageEntry::new("express", Some("4.18.2".into()))]);
    }
}

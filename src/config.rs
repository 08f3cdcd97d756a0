//! Run configuration.

use std::path::PathBuf;

use crate::export::ExportFormat;

pub const DEFAULT_PACKAGE_LIST: &str = "package-list.txt";
pub const DEFAULT_SOURCE_DIR: &str = "src";
pub const DEFAULT_OUTPUT: &str = "package-usage-report.txt";
pub const DEFAULT_MANIFEST: &str = "package.json";
pub const DEFAULT_LOCKFILE: &str = "package-lock.json";

/// Every input and output location of one audit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Tab-separated package list to audit.
    pub package_list: PathBuf,
    /// Root of the source tree scanned for usage.
    pub source_dir: PathBuf,
    /// Report file, overwritten on each run.
    pub output: PathBuf,
    /// npm manifest (`package.json`).
    pub manifest: PathBuf,
    /// npm lockfile (`package-lock.json`).
    pub lockfile: PathBuf,
    /// Report format.
    pub format: ExportFormat,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            package_list: PathBuf::from(DEFAULT_PACKAGE_LIST),
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            lockfile: PathBuf::from(DEFAULT_LOCKFILE),
            format: ExportFormat::Text,
        }
    }
}

impl AuditConfig {
    /// Config rooted at `project_dir`, with the default file names inside it.
    pub fn in_project(project_dir: impl Into<PathBuf>) -> Self {
        let dir = project_dir.into();
        Self {
            package_list: dir.join(DEFAULT_PACKAGE_LIST),
            source_dir: dir.join(DEFAULT_SOURCE_DIR),
            output: dir.join(DEFAULT_OUTPUT),
            manifest: dir.join(DEFAULT_MANIFEST),
            lockfile: dir.join(DEFAULT_LOCKFILE),
            format: ExportFormat::Text,
        }
    }
}

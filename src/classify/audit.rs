//! Bucketing of listed packages by install and usage status.

use serde::Serialize;
use tracing::info;

use super::lookup::{find_installed_package, is_listed};
use crate::analysis::{check_package_usage, SourceFileCache};
use crate::parser::{InstalledPackageMap, PackageEntry};

/// Progress is logged after every this many entries.
pub const PROGRESS_INTERVAL: usize = 50;

/// A listed package together with the version found installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedPackage {
    pub name: String,
    pub declared_version: Option<String>,
    pub installed_version: Option<String>,
}

/// An installed package that no list entry names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnlistedPackage {
    pub name: String,
    pub installed_version: Option<String>,
}

/// Which of the three list buckets an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageStatus {
    /// Installed and referenced from source.
    Used,
    /// Installed but never referenced.
    Unused,
    /// Not found among the installed packages.
    NotInstalled,
}

impl UsageStatus {
    pub fn from_flags(is_installed: bool, is_used: bool) -> Self {
        match (is_installed, is_used) {
            (true, true) => UsageStatus::Used,
            (true, false) => UsageStatus::Unused,
            (false, _) => UsageStatus::NotInstalled,
        }
    }
}

/// Result of auditing a package list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Number of entries in the package list.
    pub total: usize,
    pub used: Vec<ClassifiedPackage>,
    pub unused: Vec<ClassifiedPackage>,
    pub not_installed: Vec<ClassifiedPackage>,
    pub installed_but_not_in_list: Vec<UnlistedPackage>,
}

impl AuditReport {
    /// Adds a classified entry to its bucket.
    pub fn push(&mut self, status: UsageStatus, package: ClassifiedPackage) {
        match status {
            UsageStatus::Used => self.used.push(package),
            UsageStatus::Unused => self.unused.push(package),
            UsageStatus::NotInstalled => self.not_installed.push(package),
        }
    }

    /// Sum of the three list buckets; equals `total` for a finished audit.
    pub fn classified_count(&self) -> usize {
        self.used.len() + self.unused.len() + self.not_installed.len()
    }
}

/// Classifies every entry of `entries`, in order.
///
/// Source files are only scanned for installed packages. The reverse pass
/// collects installed packages that no entry names exactly.
pub fn classify(
    entries: &[PackageEntry],
    installed: &InstalledPackageMap,
    sources: &SourceFileCache,
) -> AuditReport {
    let mut report = AuditReport {
        total: entries.len(),
        ..AuditReport::default()
    };

    for (index, entry) in entries.iter().enumerate() {
        let status = find_installed_package(&entry.name, installed);
        let is_used = status.is_installed && check_package_usage(&entry.name, sources);

        let package = ClassifiedPackage {
            name: entry.name.clone(),
            declared_version: entry.declared_version.clone(),
            installed_version: status.installed_version,
        };
        report.push(UsageStatus::from_flags(status.is_installed, is_used), package);

        if (index + 1) % PROGRESS_INTERVAL == 0 {
            info!(processed = index + 1, total = entries.len(), "checking packages");
        }
    }

    report.installed_but_not_in_list = installed
        .iter()
        .filter(|(name, _)| !is_listed(name, entries))
        .map(|(name, version)| UnlistedPackage {
            name: name.clone(),
            installed_version: Some(version.clone()),
        })
        .collect();

    report
}

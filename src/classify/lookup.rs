//! Package name matching against the installed map.
//!
//! The forward lookup ([`find_installed_package`]) is deliberately loose,
//! while the reverse check ([`is_listed`]) is exact. The two must stay
//! separate: unifying them changes which bucket packages land in.

use crate::parser::types::is_scoped;
use crate::parser::{InstalledPackageMap, PackageEntry};

/// Installation status of one listed package.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstallStatus {
    pub is_installed: bool,
    pub installed_version: Option<String>,
}

impl InstallStatus {
    fn installed(version: &str) -> Self {
        Self {
            is_installed: true,
            installed_version: Some(version.to_string()),
        }
    }
}

/// Resolves whether `name` is installed, and at which version.
///
/// Exact key lookup comes first. Otherwise:
/// - a scoped name `@scope/pkg` matches the first installed key that starts
///   with `@scope` and ends with `/pkg` (so `@scoped/pkg` also matches);
/// - an unscoped name matches the first unscoped installed key whose first
///   `/` segment equals it.
pub fn find_installed_package(name: &str, installed: &InstalledPackageMap) -> InstallStatus {
    if let Some(version) = installed.get(name) {
        return InstallStatus::installed(version);
    }

    let found = if is_scoped(name) {
        let (scope, unscoped) = match name.split_once('/') {
            Some((scope, rest)) => (scope, rest.split('/').next()),
            None => (name, None),
        };
        installed.iter().find(|(installed_name, _)| {
            installed_name.as_str() == name
                || unscoped.is_some_and(|pkg| {
                    installed_name.starts_with(scope)
                        && installed_name.ends_with(&format!("/{}", pkg))
                })
        })
    } else {
        installed.iter().find(|(installed_name, _)| {
            !is_scoped(installed_name)
                && installed_name.split('/').next() == Some(name)
        })
    };

    found
        .map(|(_, version)| InstallStatus::installed(version))
        .unwrap_or_default()
}

/// Returns true if some list entry has exactly the installed package's name.
pub fn is_listed(installed_name: &str, entries: &[PackageEntry]) -> bool {
    entries.iter().any(|entry| entry.name == installed_name)
}

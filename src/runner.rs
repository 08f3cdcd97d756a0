//! End-to-end audit run: read inputs, classify, write the report.

use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use crate::analysis::SourceFileCache;
use crate::classify::{classify, AuditReport};
use crate::config::AuditConfig;
use crate::export::{export_to_string, ExportData};
use crate::parser::{read_direct_dependencies, read_installed_packages, read_package_list};

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub report: AuditReport,
    /// Number of `dependencies` + `devDependencies` in the manifest.
    pub direct_dependency_count: usize,
    /// Number of packages in the installed map.
    pub installed_count: usize,
}

/// Runs one audit as described by `config`.
///
/// Only an unreadable package list (or an unwritable report) is an error;
/// manifest, lockfile and source problems degrade to empty data. The report
/// file is not touched when the package list cannot be read.
pub fn run_audit(config: &AuditConfig) -> Result<AuditOutcome> {
    let entries = read_package_list(&config.package_list)?;
    let installed = read_installed_packages(&config.lockfile, &config.manifest);
    let direct = read_direct_dependencies(&config.manifest);

    info!(
        listed = entries.len(),
        direct = direct.len(),
        installed = installed.len(),
        "checking package usage"
    );

    let sources = SourceFileCache::new(&config.source_dir);
    let report = classify(&entries, &installed, &sources);

    let rendered = export_to_string(config.format, &ExportData::now(&report))
        .context("Failed to render report")?;
    fs::write(&config.output, rendered)
        .with_context(|| format!("Failed to write report to {}", config.output.display()))?;

    info!(path = %config.output.display(), "report written");

    Ok(AuditOutcome {
        report,
        direct_dependency_count: direct.len(),
        installed_count: installed.len(),
    })
}

//! Markdown export implementation.
//!
//! Exports audit results in Markdown format for documentation and reporting.

use super::{version_or_missing, ExportData, Exporter};
use crate::classify::ClassifiedPackage;
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl MarkdownExporter {
    fn package_table<W: Write>(
        writer: &mut W,
        title: &str,
        packages: &[ClassifiedPackage],
    ) -> io::Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        writeln!(writer, "### {} ({})", title, packages.len())?;
        writeln!(writer)?;
        writeln!(writer, "| Package | Listed Version | Installed Version |")?;
        writeln!(writer, "|---------|----------------|-------------------|")?;
        for pkg in packages {
            writeln!(
                writer,
                "| {} | {} | {} |",
                pkg.name,
                version_or_missing(pkg.declared_version.as_deref()),
                version_or_missing(pkg.installed_version.as_deref())
            )?;
        }
        writeln!(writer)
    }
}

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &ExportData<'_>, writer: &mut W) -> io::Result<()> {
        let report = data.report;

        // Title
        writeln!(writer, "# Package Usage Report")?;
        writeln!(writer)?;
        writeln!(writer, "**Generated:** {}", data.generated_at)?;
        writeln!(writer)?;

        // Summary section
        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Total Packages | {} |", report.total)?;
        writeln!(writer, "| Used | {} |", report.used.len())?;
        writeln!(writer, "| Installed but Unused | {} |", report.unused.len())?;
        writeln!(writer, "| Not Installed | {} |", report.not_installed.len())?;
        writeln!(
            writer,
            "| Installed but Not in List | {} |",
            report.installed_but_not_in_list.len()
        )?;
        writeln!(writer)?;

        writeln!(writer, "## Packages")?;
        writeln!(writer)?;

        Self::package_table(writer, "Used", &report.used)?;
        Self::package_table(writer, "Installed but Unused", &report.unused)?;
        Self::package_table(writer, "Not Installed", &report.not_installed)?;

        if !report.installed_but_not_in_list.is_empty() {
            writeln!(
                writer,
                "### Installed but Not in List ({})",
                report.installed_but_not_in_list.len()
            )?;
            writeln!(writer)?;
            writeln!(writer, "| Package | Installed Version |")?;
            writeln!(writer, "|---------|-------------------|")?;
            for pkg in &report.installed_but_not_in_list {
                writeln!(
                    writer,
                    "| {} | {} |",
                    pkg.name,
                    version_or_missing(pkg.installed_version.as_deref())
                )?;
            }
            writeln!(writer)?;
        }

        // Footer
        writeln!(writer, "---")?;
        writeln!(writer, "*Generated by pkgscope*")?;

        Ok(())
    }
}

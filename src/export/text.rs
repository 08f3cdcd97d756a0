//! Plain text export implementation.
//!
//! Writes the fixed-format report file: a header, summary counts, then one
//! tab-separated section per bucket.

use super::{version_or_missing, ExportData, Exporter};
use crate::classify::ClassifiedPackage;
use std::io::{self, Write};

/// Marker line for a section with no entries.
pub const EMPTY_SECTION: &str = "none";

const RULE_WIDTH: usize = 80;

/// Plain text exporter implementation.
pub struct TextExporter;

impl TextExporter {
    fn rule<W: Write>(writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", "=".repeat(RULE_WIDTH))
    }

    fn heading<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
        Self::rule(writer)?;
        writeln!(writer, "{}", title)?;
        Self::rule(writer)
    }

    /// Writes `name<TAB>declared<TAB>installed` rows.
    fn installed_section<W: Write>(
        writer: &mut W,
        title: &str,
        packages: &[ClassifiedPackage],
    ) -> io::Result<()> {
        Self::heading(writer, title)?;
        if packages.is_empty() {
            writeln!(writer, "{}", EMPTY_SECTION)?;
        }
        for pkg in packages {
            writeln!(
                writer,
                "{}\t{}\t{}",
                pkg.name,
                version_or_missing(pkg.declared_version.as_deref()),
                version_or_missing(pkg.installed_version.as_deref())
            )?;
        }
        Ok(())
    }

    /// Writes two-column `name<TAB>version` rows.
    fn two_column_section<'a, W: Write>(
        writer: &mut W,
        title: &str,
        rows: impl ExactSizeIterator<Item = (&'a str, Option<&'a str>)>,
    ) -> io::Result<()> {
        Self::heading(writer, title)?;
        if rows.len() == 0 {
            writeln!(writer, "{}", EMPTY_SECTION)?;
        }
        for (name, version) in rows {
            writeln!(writer, "{}\t{}", name, version_or_missing(version))?;
        }
        Ok(())
    }
}

impl Exporter for TextExporter {
    fn export<W: Write>(&self, data: &ExportData<'_>, writer: &mut W) -> io::Result<()> {
        let report = data.report;

        Self::rule(writer)?;
        writeln!(writer, "Package Usage Report")?;
        writeln!(writer, "Generated: {}", data.generated_at)?;
        Self::rule(writer)?;
        writeln!(writer)?;

        writeln!(writer, "Total packages: {}", report.total)?;
        writeln!(writer, "Used packages: {}", report.used.len())?;
        writeln!(writer, "Installed but unused packages: {}", report.unused.len())?;
        writeln!(writer, "Not installed packages: {}", report.not_installed.len())?;
        writeln!(
            writer,
            "Installed but not in list: {}",
            report.installed_but_not_in_list.len()
        )?;
        writeln!(writer)?;

        Self::installed_section(writer, "Used packages", &report.used)?;
        writeln!(writer)?;

        Self::installed_section(writer, "Installed but unused packages", &report.unused)?;
        writeln!(writer)?;

        Self::two_column_section(
            writer,
            "Not installed packages",
            report
                .not_installed
                .iter()
                .map(|p| (p.name.as_str(), p.declared_version.as_deref())),
        )?;
        writeln!(writer)?;

        Self::two_column_section(
            writer,
            "Installed but not in list",
            report
                .installed_but_not_in_list
                .iter()
                .map(|p| (p.name.as_str(), p.installed_version.as_deref())),
        )
    }
}

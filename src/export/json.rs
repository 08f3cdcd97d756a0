//! JSON export implementation.
//!
//! Exports audit results in JSON format for machine-readable output.

use super::{ExportData, Exporter};
use crate::classify::{ClassifiedPackage, UnlistedPackage};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    total_packages: usize,
    used: usize,
    unused: usize,
    not_installed: usize,
    installed_but_not_in_list: usize,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    generated_at: &'a str,
    summary: JsonSummary,
    used: &'a [ClassifiedPackage],
    unused: &'a [ClassifiedPackage],
    not_installed: &'a [ClassifiedPackage],
    installed_but_not_in_list: &'a [UnlistedPackage],
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &ExportData<'_>, writer: &mut W) -> io::Result<()> {
        let report = data.report;
        let export = JsonExport {
            generated_at: &data.generated_at,
            summary: JsonSummary {
                total_packages: report.total,
                used: report.used.len(),
                unused: report.unused.len(),
                not_installed: report.not_installed.len(),
                installed_but_not_in_list: report.installed_but_not_in_list.len(),
            },
            used: &report.used,
            unused: &report.unused,
            not_installed: &report.not_installed,
            installed_but_not_in_list: &report.installed_but_not_in_list,
        };

        serde_json::to_writer_pretty(&mut *writer, &export)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::test_support::sample_report;
    use crate::export::{export_to_string, ExportFormat};

    #[test]
    fn test_json_export_structure() {
        let report = sample_report();
        let data = ExportData::new(&report, "2024-01-01 12:00:00");
        let output = export_to_string(ExportFormat::Json, &data).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["generated_at"], "2024-01-01 12:00:00");
        assert_eq!(value["summary"]["total_packages"], 3);
        assert_eq!(value["summary"]["installed_but_not_in_list"], 1);
        assert_eq!(value["used"][0]["name"], "react");
        assert_eq!(value["unused"][0]["declared_version"], serde_json::Value::Null);
        assert_eq!(value["installed_but_not_in_list"][0]["installed_version"], "5.3.3");
    }
}

//! Export functionality for audit results.
//!
//! This module provides exporters for writing an [`AuditReport`] as plain
//! text (the default report file), JSON, or Markdown.

pub mod json;
pub mod markdown;
pub mod text;

use crate::classify::AuditReport;
use std::io::{self, Write};

/// Placeholder written for an absent version.
pub const MISSING_VALUE: &str = "N/A";

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Tab-separated plain text sections
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
    /// Markdown format - documentation/reporting
    Markdown,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Data container for export operations.
#[derive(Debug, Clone)]
pub struct ExportData<'a> {
    /// The finished audit
    pub report: &'a AuditReport,
    /// Human-readable generation time, embedded in the output
    pub generated_at: String,
}

impl<'a> ExportData<'a> {
    pub fn new(report: &'a AuditReport, generated_at: impl Into<String>) -> Self {
        Self {
            report,
            generated_at: generated_at.into(),
        }
    }

    /// Export data stamped with the current local time.
    pub fn now(report: &'a AuditReport) -> Self {
        let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self::new(report, generated_at)
    }
}

/// Returns the version or the [`MISSING_VALUE`] placeholder if absent or empty.
pub fn version_or_missing(version: Option<&str>) -> &str {
    version.filter(|v| !v.is_empty()).unwrap_or(MISSING_VALUE)
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &ExportData<'_>, writer: &mut W) -> io::Result<()>;
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &ExportData<'_>,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Text => text::TextExporter.export(data, writer),
        ExportFormat::Json => json::JsonExporter.export(data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
    }
}

/// Export data to a string in the specified format.
pub fn export_to_string(format: ExportFormat, data: &ExportData<'_>) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(
            "md".parse::<ExportFormat>().unwrap(),
            ExportFormat::Markdown
        );
        assert!("csv".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_format_display() {
        assert_eq!(format!("{}", ExportFormat::Text), "text");
        assert_eq!(format!("{}", ExportFormat::Json), "json");
        assert_eq!(format!("{}", ExportFormat::Markdown), "markdown");
        assert_eq!(ExportFormat::default(), ExportFormat::Text);
    }

    #[test]
    fn test_version_or_missing() {
        assert_eq!(version_or_missing(Some("1.0.0")), "1.0.0");
        assert_eq!(version_or_missing(Some("")), MISSING_VALUE);
        assert_eq!(version_or_missing(None), MISSING_VALUE);
    }

    #[test]
    fn test_export_is_deterministic_for_fixed_timestamp() {
        let report = test_support::sample_report();
        let data = ExportData::new(&report, "2024-01-01 00:00:00");

        for format in [ExportFormat::Text, ExportFormat::Json, ExportFormat::Markdown] {
            let first = export_to_string(format, &data).unwrap();
            let second = export_to_string(format, &data).unwrap();
            assert_eq!(first, second);
        }
    }
}

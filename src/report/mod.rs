//! Report generation with multiple output formats
//!
//! CDD Principle: Anti-Corruption Layer - Formatters translate domain objects to external formats
//! - LookupReport (domain) is converted to JSON or terminal text
//! - The `json` format is the bare field mapping so scripts can rely on its shape
//! - Domain logic remains pure while supporting multiple presentation needs

use crate::domain::record::{LookupReport, WhoisError, WhoisResult};
use std::io::Write;

/// Supported output formats for lookup reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Field name to list of values, nothing else
    Json,
    /// JSON envelope with domain, TLD and query time
    Report,
    /// Human-readable listing
    Human,
}

impl OutputFormat {
    /// Parse format from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "report" => Some(Self::Report),
            "human" => Some(Self::Human),
            _ => None,
        }
    }

    /// Get all available format names
    pub fn all_formats() -> &'static [&'static str] {
        &["json", "report", "human"]
    }
}

/// Options for customizing report output
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Whether to use colored output (for human format)
    pub use_colors: bool,
    /// Pretty-print JSON formats
    pub pretty: bool,
    /// Whether to list fields that matched nothing (for human format)
    pub show_empty: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            use_colors: true,
            pretty: false,
            show_empty: true,
        }
    }
}

/// Main report formatter that dispatches to specific formatters
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter {
    options: ReportOptions,
}

impl ReportFormatter {
    /// Create a new report formatter with options
    pub fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReportOptions {
        &self.options
    }

    /// Format a lookup report in the specified format
    pub fn format_report(&self, report: &LookupReport, format: OutputFormat) -> WhoisResult<String> {
        match format {
            OutputFormat::Json => self.to_json(&report.fields),
            OutputFormat::Report => self.to_json(report),
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    /// Write a formatted report to a writer
    pub fn write_report<W: Write>(
        &self,
        report: &LookupReport,
        format: OutputFormat,
        mut writer: W,
    ) -> WhoisResult<()> {
        let formatted = self.format_report(report, format)?;
        writeln!(writer, "{formatted}")?;
        Ok(())
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> WhoisResult<String> {
        let result = if self.options.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        result.map_err(|e| WhoisError::serialization(format!("JSON serialization failed: {e}")))
    }

    /// Format report in human-readable format
    fn format_human(&self, report: &LookupReport) -> String {
        let mut output = String::new();

        if self.options.use_colors {
            output.push_str(&format!(
                "\x1b[1m{}\x1b[0m \x1b[2m(.{} ruleset, {})\x1b[0m\n",
                report.domain,
                report.tld,
                report.queried_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        } else {
            output.push_str(&format!(
                "{} (.{} ruleset, {})\n",
                report.domain,
                report.tld,
                report.queried_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        for field in report.fields.iter() {
            if field.is_empty() && !self.options.show_empty {
                continue;
            }

            let name = if self.options.use_colors {
                format!("\x1b[36m{}\x1b[0m", field.name)
            } else {
                field.name.clone()
            };

            match field.values.as_slice() {
                [] => {
                    if self.options.use_colors {
                        output.push_str(&format!("  {name}: \x1b[2m-\x1b[0m\n"));
                    } else {
                        output.push_str(&format!("  {name}: -\n"));
                    }
                }
                [single] => output.push_str(&format!("  {name}: {}\n", single.trim_end())),
                values => {
                    output.push_str(&format!("  {name}:\n"));
                    for value in values {
                        output.push_str(&format!("    - {}\n", value.trim_end()));
                    }
                }
            }
        }

        output.push_str(&format!(
            "\n{} of {} fields matched, {} values\n",
            report.fields.matched_fields(),
            report.fields.len(),
            report.fields.total_values()
        ));

        output
    }
}

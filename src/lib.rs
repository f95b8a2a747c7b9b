//! whois-fields - Structured fields from raw WHOIS responses
//!
//! Architecture: Clean Architecture - Library interface serves as the application layer
//! - Pure extraction logic separated from process invocation
//! - The per-TLD rulesets are compiled once and shared read-only
//! - WhoisLookup ties a response source, the registry and a formatter together

pub mod config;
pub mod domain;
pub mod extractor;
pub mod lookup;
pub mod patterns;
pub mod report;

// Re-export main types for convenient access
pub use domain::record::{ExtractionResult, FieldMatches, LookupReport, WhoisError, WhoisResult};

pub use config::{ConfigBuilder, LookupConfig, OutputConfig, WhoisConfig};

pub use extractor::{extract, extract_bytes};

pub use lookup::{tld_of, CommandSource, FileSource, WhoisSource};

pub use patterns::{registry, ruleset_for, supported_tlds, Pattern, Ruleset, RulesetRegistry};

pub use report::{OutputFormat, ReportFormatter, ReportOptions};

use std::path::Path;

/// Main entry point: fetches a response and extracts its fields
pub struct WhoisLookup {
    source: Box<dyn WhoisSource>,
    report_formatter: ReportFormatter,
}

impl WhoisLookup {
    /// Create a lookup with the given configuration
    pub fn new_with_config(config: WhoisConfig) -> WhoisResult<Self> {
        config.validate()?;

        let report_formatter = ReportFormatter::new(ReportOptions {
            pretty: config.output.pretty,
            ..Default::default()
        });

        Ok(Self {
            source: Box::new(CommandSource::from_config(&config.lookup)),
            report_formatter,
        })
    }

    /// Create a lookup with default configuration
    pub fn new() -> WhoisResult<Self> {
        Self::new_with_config(WhoisConfig::default())
    }

    /// Create a lookup loading configuration from file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> WhoisResult<Self> {
        let config = WhoisConfig::load_from_file(path)?;
        Self::new_with_config(config)
    }

    /// Replace where responses come from
    pub fn with_source<S: WhoisSource + 'static>(mut self, source: S) -> Self {
        self.source = Box::new(source);
        self
    }

    /// Set custom report formatter
    pub fn with_report_formatter(mut self, formatter: ReportFormatter) -> Self {
        self.report_formatter = formatter;
        self
    }

    /// Look up `domain` and extract the fields of its TLD's ruleset
    ///
    /// The TLD is resolved before the source is queried, so an unsupported
    /// TLD never triggers a lookup.
    pub fn lookup(&self, domain: &str) -> WhoisResult<LookupReport> {
        let tld = tld_of(domain);
        let ruleset = ruleset_for(&tld)?;

        tracing::debug!("Looking up '{}' with the '{}' ruleset", domain, tld);
        let text = self.source.query(domain)?;

        Ok(LookupReport::new(domain, tld, extract(&text, &ruleset)))
    }

    /// Extract fields from a response that was obtained elsewhere
    pub fn parse(&self, domain: &str, text: &str) -> WhoisResult<LookupReport> {
        parse_response(domain, text)
    }

    /// Format a lookup report for output
    pub fn format_report(&self, report: &LookupReport, format: OutputFormat) -> WhoisResult<String> {
        self.report_formatter.format_report(report, format)
    }
}

/// Extract fields from `text` using the ruleset selected by `domain`'s TLD
pub fn parse_response(domain: &str, text: &str) -> WhoisResult<LookupReport> {
    let tld = tld_of(domain);
    let ruleset = ruleset_for(&tld)?;
    Ok(LookupReport::new(domain, tld, extract(text, &ruleset)))
}

/// Run `whois <domain>` and return the extracted fields as a JSON object
pub fn whois(domain: &str) -> WhoisResult<String> {
    let lookup = WhoisLookup::new()?;
    let report = lookup.lookup(domain)?;
    lookup.format_report(&report, OutputFormat::Json)
}

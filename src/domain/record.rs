//! Core domain models for extracted WHOIS records and lookup errors
//!
//! Architecture: Rich Domain Models - extraction results keep the shape of the ruleset that produced them
//! - ExtractionResult preserves field declaration order and keeps empty fields as empty lists
//! - LookupReport wraps one extraction with the query that produced it
//! - WhoisError is the single error type crossing every module boundary

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// All values matched for one field, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMatches {
    /// Field name as declared in the ruleset
    pub name: String,
    /// Raw matched text, one entry per occurrence
    pub values: Vec<String>,
}

impl FieldMatches {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self { name: name.into(), values }
    }

    /// Whether the field's pattern matched nothing
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Mapping from field name to every value matched for it
///
/// Keys keep the order of the ruleset that produced the result, and every
/// declared field is present even when it matched nothing. Serializes as a
/// JSON object of `field -> [values]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    fields: Vec<FieldMatches>,
}

impl ExtractionResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append the matches for a field
    pub fn push(&mut self, field: FieldMatches) {
        self.fields.push(field);
    }

    /// Values matched for `name`, or `None` if the field is not declared
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.values.as_slice())
    }

    /// Whether `name` is one of the declared fields
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Iterate over all fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &FieldMatches> {
        self.fields.iter()
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields with at least one match
    pub fn matched_fields(&self) -> usize {
        self.fields.iter().filter(|f| !f.is_empty()).count()
    }

    /// Total number of matched values across all fields
    pub fn total_values(&self) -> usize {
        self.fields.iter().map(|f| f.values.len()).sum()
    }
}

impl Serialize for ExtractionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            map.serialize_entry(&field.name, &field.values)?;
        }
        map.end()
    }
}

/// The outcome of one lookup: the query plus what was extracted from it
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    /// Domain as given by the caller
    pub domain: String,
    /// TLD label used to select the ruleset
    pub tld: String,
    /// When the response was parsed
    pub queried_at: DateTime<Utc>,
    /// Extracted fields
    pub fields: ExtractionResult,
}

impl LookupReport {
    pub fn new(domain: impl Into<String>, tld: impl Into<String>, fields: ExtractionResult) -> Self {
        Self {
            domain: domain.into(),
            tld: tld.into(),
            queried_at: Utc::now(),
            fields,
        }
    }

    /// Whether any field matched at least once
    pub fn has_matches(&self) -> bool {
        self.fields.matched_fields() > 0
    }
}

/// Error types that can occur during a lookup
#[derive(Debug, thiserror::Error)]
pub enum WhoisError {
    /// No ruleset is registered for the domain's top-level label
    #[error("Unsupported TLD: '{tld}'")]
    UnsupportedTld { tld: String },

    /// The WHOIS client could not produce a response
    #[error("WHOIS lookup failed for '{domain}'")]
    LookupFailed { domain: String },

    /// Configuration file could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A field pattern could not be compiled or registered
    #[error("Pattern error: {message}")]
    Pattern { message: String },

    /// Reading a response or config file failed
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Result could not be rendered
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl WhoisError {
    /// Create an unsupported TLD error
    pub fn unsupported_tld(tld: impl Into<String>) -> Self {
        Self::UnsupportedTld { tld: tld.into() }
    }

    /// Create a lookup failure
    pub fn lookup_failed(domain: impl Into<String>) -> Self {
        Self::LookupFailed {
            domain: domain.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a pattern error
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Result type for WHOIS operations
pub type WhoisResult<T> = Result<T, WhoisError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ExtractionResult {
        let mut result = ExtractionResult::new();
        result.push(FieldMatches::new("domain_name", vec!["EXAMPLE.COM".to_string()]));
        result.push(FieldMatches::new(
            "name_servers",
            vec!["ns2.example.com".to_string(), "ns1.example.com".to_string()],
        ));
        result.push(FieldMatches::new("registrar", Vec::new()));
        result
    }

    #[test]
    fn test_lookup_by_field_name() {
        let result = sample();

        assert_eq!(result.get("domain_name"), Some(&["EXAMPLE.COM".to_string()][..]));
        assert_eq!(result.get("registrar"), Some(&[][..]));
        assert_eq!(result.get("missing"), None);
        assert!(result.contains_field("registrar"));
        assert_eq!(result.matched_fields(), 2);
        assert_eq!(result.total_values(), 3);
    }

    #[test]
    fn test_serializes_in_declaration_order() {
        let json = serde_json::to_string(&sample()).unwrap();

        assert_eq!(
            json,
            r#"{"domain_name":["EXAMPLE.COM"],"name_servers":["ns2.example.com","ns1.example.com"],"registrar":[]}"#
        );
    }

    #[test]
    fn test_report_envelope() {
        let report = LookupReport::new("example.com", "com", sample());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["domain"], "example.com");
        assert_eq!(value["tld"], "com");
        assert!(value["queried_at"].is_string());
        assert_eq!(value["fields"]["registrar"], serde_json::json!([]));
        assert!(report.has_matches());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(WhoisError::unsupported_tld("zz").to_string(), "Unsupported TLD: 'zz'");
        assert_eq!(
            WhoisError::lookup_failed("example.com").to_string(),
            "WHOIS lookup failed for 'example.com'"
        );
        assert!(WhoisError::config("bad").to_string().starts_with("Configuration error"));
    }
}

//! Field extraction over raw WHOIS responses
//!
//! CDD Principle: Domain Services - The extractor applies a ruleset to one response
//! - Every field of the ruleset is evaluated and reported, matched or not
//! - Values are the raw matched text: no trimming, parsing or deduplication

use crate::domain::record::{ExtractionResult, FieldMatches};
use crate::patterns::Ruleset;

/// Apply every field pattern of `ruleset` to `text`
pub fn extract(text: &str, ruleset: &Ruleset) -> ExtractionResult {
    tracing::debug!(
        "Extracting {} fields from {} bytes of response text",
        ruleset.len(),
        text.len()
    );

    let mut result = ExtractionResult::new();
    for rule in ruleset.iter() {
        let values = rule.pattern.find_all(text);
        tracing::debug!("Field '{}' matched {} times", rule.name, values.len());
        result.push(FieldMatches::new(rule.name.clone(), values));
    }

    result
}

/// Apply `ruleset` to a response given as raw bytes
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn extract_bytes(bytes: &[u8], ruleset: &Ruleset) -> ExtractionResult {
    extract(&String::from_utf8_lossy(bytes), ruleset)
}

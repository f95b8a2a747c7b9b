//! Field patterns and the per-TLD ruleset registry
//!
//! Architectural Principle: Repository - The registry owns every compiled ruleset for the process
//! - Pattern wraps one compiled regex and knows which part of a match is the value
//! - Ruleset is an ordered, duplicate-free list of (field, pattern) rules
//! - RulesetRegistry maps TLD labels to shared rulesets, with aliasing by `Arc`

mod tables;

use crate::domain::record::{WhoisError, WhoisResult};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;

lazy_static! {
    /// Built-in registry, compiled on first use and never mutated afterwards
    static ref BUILTIN_REGISTRY: RulesetRegistry = RulesetRegistry::builtin()
        .unwrap_or_else(|e| panic!("built-in WHOIS rulesets failed to load: {e}"));
}

/// A compiled field pattern
///
/// Patterns with a capturing group yield the text of group 1 for each match.
/// Patterns without one yield the whole match.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern from its source text
    pub fn new(source: &str) -> WhoisResult<Self> {
        let regex = Regex::new(source)
            .map_err(|e| WhoisError::pattern(format!("Invalid regex '{source}': {e}")))?;
        Ok(Self { regex })
    }

    /// The pattern's source text
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether matches yield a capture group rather than the whole match
    pub fn has_capture(&self) -> bool {
        self.regex.captures_len() > 1
    }

    /// Every non-overlapping match in `text`, in order of occurrence
    pub fn find_all(&self, text: &str) -> Vec<String> {
        if self.has_capture() {
            self.regex
                .captures_iter(text)
                .map(|caps| caps.get(1).map_or_else(String::new, |m| m.as_str().to_string()))
                .collect()
        } else {
            self.regex.find_iter(text).map(|m| m.as_str().to_string()).collect()
        }
    }
}

/// A single named field rule
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub name: String,
    pub pattern: Pattern,
}

/// Ordered set of field rules used for one TLD
#[derive(Debug, Clone, Default)]
pub struct Ruleset {
    rules: Vec<FieldRule>,
}

impl Ruleset {
    /// Create an empty ruleset
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Compile a ruleset from `(field, pattern)` pairs
    pub fn from_table(table: &[(&str, &str)]) -> WhoisResult<Self> {
        let mut ruleset = Self::new();
        for (name, source) in table {
            ruleset.add_rule(*name, source)?;
        }
        Ok(ruleset)
    }

    /// Compile and append a field rule
    pub fn add_rule(&mut self, name: impl Into<String>, source: &str) -> WhoisResult<()> {
        let name = name.into();
        tracing::debug!("Adding field '{}' with pattern '{}'", name, source);

        if self.get(&name).is_some() {
            return Err(WhoisError::pattern(format!("Duplicate field '{name}'")));
        }

        let pattern = Pattern::new(source)
            .map_err(|e| WhoisError::pattern(format!("Field '{name}': {e}")))?;
        self.rules.push(FieldRule { name, pattern });
        Ok(())
    }

    /// Pattern for a field, if declared
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.rules.iter().find(|r| r.name == name).map(|r| &r.pattern)
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Mapping from TLD label to its ruleset
#[derive(Debug, Clone, Default)]
pub struct RulesetRegistry {
    rulesets: HashMap<String, Arc<Ruleset>>,
    aliases: HashMap<String, String>,
}

impl RulesetRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile the built-in tables
    pub fn builtin() -> WhoisResult<Self> {
        let mut registry = Self::new();

        for (tld, table) in tables::BUILTIN {
            let ruleset = Ruleset::from_table(table)
                .map_err(|e| WhoisError::pattern(format!("Ruleset '{tld}': {e}")))?;
            registry.insert(*tld, ruleset);
        }

        for (alias, target) in tables::ALIASES {
            registry.alias(*alias, target)?;
        }

        tracing::debug!(
            "Loaded {} rulesets for {} TLDs",
            tables::BUILTIN.len(),
            registry.len()
        );

        Ok(registry)
    }

    /// Register a ruleset, replacing any previous entry for `tld`
    pub fn insert(&mut self, tld: impl Into<String>, ruleset: Ruleset) {
        let tld = tld.into();
        self.aliases.remove(&tld);
        self.rulesets.insert(tld, Arc::new(ruleset));
    }

    /// Make `alias` resolve to the same ruleset instance as `target`
    pub fn alias(&mut self, alias: impl Into<String>, target: &str) -> WhoisResult<()> {
        let shared = self.ruleset_for(target).map_err(|_| {
            WhoisError::pattern(format!("Alias target '{target}' is not registered"))
        })?;
        let alias = alias.into();
        self.aliases.insert(alias.clone(), target.to_string());
        self.rulesets.insert(alias, shared);
        Ok(())
    }

    /// Ruleset registered for `tld`
    pub fn ruleset_for(&self, tld: &str) -> WhoisResult<Arc<Ruleset>> {
        self.rulesets
            .get(tld)
            .cloned()
            .ok_or_else(|| WhoisError::unsupported_tld(tld))
    }

    /// The label `tld` aliases, if it is an alias
    pub fn alias_target(&self, tld: &str) -> Option<&str> {
        self.aliases.get(tld).map(String::as_str)
    }

    /// Registered TLD labels in sorted order
    pub fn tlds(&self) -> Vec<&str> {
        let mut tlds: Vec<&str> = self.rulesets.keys().map(String::as_str).collect();
        tlds.sort_unstable();
        tlds
    }

    /// Number of registered labels, aliases included
    pub fn len(&self) -> usize {
        self.rulesets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rulesets.is_empty()
    }
}

/// The process-wide built-in registry
pub fn registry() -> &'static RulesetRegistry {
    &BUILTIN_REGISTRY
}

/// Ruleset for `tld` from the built-in registry
pub fn ruleset_for(tld: &str) -> WhoisResult<Arc<Ruleset>> {
    registry().ruleset_for(tld)
}

/// TLD labels supported by the built-in registry
pub fn supported_tlds() -> Vec<&'static str> {
    registry().tlds()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_builtin_registry_compiles() {
        let registry = RulesetRegistry::builtin().unwrap();
        assert_eq!(registry.tlds(), vec!["com", "me", "name", "net", "org", "ru", "uk", "us"]);
    }

    #[rstest]
    #[case("com", 10)]
    #[case("net", 10)]
    #[case("org", 10)]
    #[case("ru", 7)]
    #[case("name", 14)]
    #[case("us", 64)]
    #[case("me", 61)]
    #[case("uk", 8)]
    fn test_ruleset_sizes(#[case] tld: &str, #[case] fields: usize) {
        let ruleset = ruleset_for(tld).unwrap();
        assert_eq!(ruleset.len(), fields);
    }

    #[test]
    fn test_com_field_names() {
        let ruleset = ruleset_for("com").unwrap();
        let names: Vec<&str> = ruleset.field_names().collect();

        assert_eq!(
            names,
            vec![
                "domain_name",
                "registrar",
                "whois_server",
                "referral_url",
                "updated_date",
                "creation_date",
                "expiration_date",
                "name_servers",
                "status",
                "emails",
            ]
        );
    }

    #[test]
    fn test_uk_field_names() {
        let ruleset = ruleset_for("uk").unwrap();
        let names: Vec<&str> = ruleset.field_names().collect();

        assert_eq!(
            names,
            vec![
                "domain_name",
                "registrar",
                "registrar_url",
                "status",
                "registrant_name",
                "creation_date",
                "expiration_date",
                "updated_date",
            ]
        );
    }

    const RU_FIELDS: &[&str] = &[
        "domain_name", "registrar", "creation_date", "expiration_date", "name_servers",
        "status", "emails",
    ];

    const NAME_FIELDS: &[&str] = &[
        "domain_name_id", "domain_name", "registrar_id", "registrar", "registrant_id",
        "admin_id", "technical_id", "billing_id", "creation_date", "expiration_date",
        "updated_date", "name_server_ids", "name_servers", "status",
    ];

    const US_FIELDS: &[&str] = &[
        "domain_name", "domain_id", "registrar", "registrar_id", "registrar_url", "status",
        "registrant_id", "registrant_name", "registrant_address1", "registrant_address2",
        "registrant_city", "registrant_state_province", "registrant_postal_code",
        "registrant_country", "registrant_country_code", "registrant_phone_number",
        "registrant_email", "registrant_application_purpose", "registrant_nexus_category",
        "admin_id", "admin_name", "admin_address1", "admin_address2", "admin_city",
        "admin_state_province", "admin_postal_code", "admin_country", "admin_country_code",
        "admin_phone_number", "admin_email", "admin_application_purpose",
        "admin_nexus_category", "billing_id", "billing_name", "billing_address1",
        "billing_address2", "billing_city", "billing_state_province", "billing_postal_code",
        "billing_country", "billing_country_code", "billing_phone_number", "billing_email",
        "billing_application_purpose", "billing_nexus_category", "tech_id", "tech_name",
        "tech_address1", "tech_address2", "tech_city", "tech_state_province",
        "tech_postal_code", "tech_country", "tech_country_code", "tech_phone_number",
        "tech_email", "tech_application_purpose", "tech_nexus_category", "name_servers",
        "created_by_registrar", "last_updated_by_registrar", "creation_date", "expiration_date",
        "updated_date",
    ];

    const ME_FIELDS: &[&str] = &[
        "domain_id", "domain_name", "creation_date", "updated_date", "expiration_date",
        "transfer_date", "trademark_name", "trademark_country", "trademark_number",
        "trademark_application_date", "trademark_registration_date", "registrar", "created_by",
        "updated_by", "status", "registrant_id", "registrant_name", "registrant_org",
        "registrant_address", "registrant_address2", "registrant_address3", "registrant_city",
        "registrant_state_province", "registrant_country", "registrant_postal_code",
        "registrant_phone", "registrant_phone_ext", "registrant_fax", "registrant_fax_ext",
        "registrant_email", "admin_id", "admin_name", "admin_org", "admin_address",
        "admin_address2", "admin_address3", "admin_city", "admin_state_province",
        "admin_country", "admin_postal_code", "admin_phone", "admin_phone_ext", "admin_fax",
        "admin_fax_ext", "admin_email", "tech_id", "tech_name", "tech_org", "tech_address",
        "tech_address2", "tech_address3", "tech_city", "tech_state_province", "tech_country",
        "tech_postal_code", "tech_phone", "tech_phone_ext", "tech_fax", "tech_fax_ext",
        "tech_email", "name_servers",
    ];

    #[rstest]
    #[case("ru", RU_FIELDS)]
    #[case("name", NAME_FIELDS)]
    #[case("us", US_FIELDS)]
    #[case("me", ME_FIELDS)]
    fn test_exact_field_names(#[case] tld: &str, #[case] expected: &[&str]) {
        let ruleset = ruleset_for(tld).unwrap();
        let names: Vec<&str> = ruleset.field_names().collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_aliases_share_the_com_ruleset() {
        let com = ruleset_for("com").unwrap();
        let net = ruleset_for("net").unwrap();
        let org = ruleset_for("org").unwrap();

        assert!(Arc::ptr_eq(&com, &net));
        assert!(Arc::ptr_eq(&com, &org));
        assert_eq!(registry().alias_target("net"), Some("com"));
        assert_eq!(registry().alias_target("com"), None);
    }

    #[test]
    fn test_unsupported_tld() {
        let err = ruleset_for("zz").unwrap_err();
        assert!(matches!(err, WhoisError::UnsupportedTld { ref tld } if tld == "zz"));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(ruleset_for("COM").is_err());
        assert!(ruleset_for("").is_err());
    }

    #[test]
    fn test_pattern_capture_modes() {
        let labelled = Pattern::new(r"Domain Name:\s?(.+)").unwrap();
        let bare = Pattern::new(r"[\w.-]+@[\w.-]+\.[\w]{2,4}").unwrap();

        assert!(labelled.has_capture());
        assert!(!bare.has_capture());
        assert_eq!(labelled.find_all("Domain Name: EXAMPLE.COM"), vec!["EXAMPLE.COM"]);
        assert_eq!(bare.find_all("mail admin@example.com now"), vec!["admin@example.com"]);
    }

    #[test]
    fn test_unmatched_optional_group_yields_empty_value() {
        let pattern = Pattern::new(r"Status:(x)?").unwrap();
        assert_eq!(pattern.find_all("Status:\nStatus:x\n"), vec!["", "x"]);
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let mut ruleset = Ruleset::new();
        let err = ruleset.add_rule("broken", r"Domain Name:(").unwrap_err();

        assert!(matches!(err, WhoisError::Pattern { .. }));
        assert!(err.to_string().contains("broken"));
        assert!(ruleset.is_empty());
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let err = Ruleset::from_table(&[("status", r"Status:(.+)"), ("status", r"State:(.+)")])
            .unwrap_err();
        assert!(err.to_string().contains("Duplicate field 'status'"));
    }

    #[test]
    fn test_custom_registry_aliasing() {
        let mut registry = RulesetRegistry::new();
        registry.insert("io", Ruleset::from_table(&[("domain_name", r"Domain:\s*(.+)")]).unwrap());
        registry.alias("sh", "io").unwrap();

        let io = registry.ruleset_for("io").unwrap();
        let sh = registry.ruleset_for("sh").unwrap();
        assert!(Arc::ptr_eq(&io, &sh));
        assert!(registry.alias("ac", "missing").is_err());

        registry.insert("sh", Ruleset::new());
        assert_eq!(registry.alias_target("sh"), None);
        assert!(registry.ruleset_for("sh").unwrap().is_empty());
    }
}

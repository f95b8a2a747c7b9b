//! Configuration loading and management for whois-fields
//!
//! Architecture: Anti-Corruption Layer - Configuration translates external YAML formats
//! - Raw YAML structures are converted to clean domain objects
//! - Defaults reproduce the plain `whois <domain>` invocation and compact JSON output
//! - Field tables are not configurable; they live with the pattern registry

use crate::domain::record::{WhoisError, WhoisResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhoisConfig {
    /// Configuration format version
    pub version: String,
    /// How the raw response is obtained
    #[serde(default)]
    pub lookup: LookupConfig,
    /// How results are printed
    #[serde(default)]
    pub output: OutputConfig,
}

/// External WHOIS client settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Program to run
    #[serde(default = "default_command")]
    pub command: String,
    /// Arguments inserted before the domain
    #[serde(default)]
    pub args: Vec<String>,
}

/// Output settings used when the CLI gets no explicit flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// One of `json`, `report`, `human`
    #[serde(default = "default_format")]
    pub format: String,
    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            pretty: false,
        }
    }
}

fn default_command() -> String {
    "whois".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

impl WhoisConfig {
    /// Load configuration from a YAML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> WhoisResult<Self> {
        let contents = fs::read_to_string(&path).map_err(|e| {
            WhoisError::config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            WhoisError::config(format!(
                "Failed to parse config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from string content
    pub fn load_from_str(content: &str) -> WhoisResult<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| WhoisError::config(format!("Failed to parse config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Default configuration
    pub fn with_defaults() -> Self {
        Self {
            version: "1.0".to_string(),
            lookup: LookupConfig::default(),
            output: OutputConfig::default(),
        }
    }

    /// Validate the configuration for consistency and correctness
    pub fn validate(&self) -> WhoisResult<()> {
        if !["1.0"].contains(&self.version.as_str()) {
            return Err(WhoisError::config(format!(
                "Unsupported configuration version: {}. Supported versions: 1.0",
                self.version
            )));
        }

        if self.lookup.command.trim().is_empty() {
            return Err(WhoisError::config("Lookup command must not be empty"));
        }

        if crate::report::OutputFormat::from_str(&self.output.format).is_none() {
            return Err(WhoisError::config(format!(
                "Unknown output format '{}'. Supported formats: {}",
                self.output.format,
                crate::report::OutputFormat::all_formats().join(", ")
            )));
        }

        Ok(())
    }

    /// Convert to JSON for serialization
    pub fn to_json(&self) -> WhoisResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WhoisError::config(format!("Failed to serialize config: {e}")))
    }

    /// Convert to YAML in the same shape `load_from_str` accepts
    pub fn to_yaml(&self) -> WhoisResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| WhoisError::config(format!("Failed to serialize config: {e}")))
    }
}

impl Default for WhoisConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Configuration builder for programmatic construction
pub struct ConfigBuilder {
    config: WhoisConfig,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self { config: WhoisConfig::default() }
    }

    /// Set the WHOIS client program
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.config.lookup.command = command.into();
        self
    }

    /// Append an argument passed before the domain
    pub fn add_arg(mut self, arg: impl Into<String>) -> Self {
        self.config.lookup.args.push(arg.into());
        self
    }

    /// Set the default output format
    pub fn output_format(mut self, format: impl Into<String>) -> Self {
        self.config.output.format = format.into();
        self
    }

    /// Pretty-print JSON output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.config.output.pretty = pretty;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> WhoisResult<WhoisConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_valid() {
        let config = WhoisConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.lookup.command, "whois");
        assert!(config.lookup.args.is_empty());
        assert_eq!(config.output.format, "json");
        assert!(!config.output.pretty);
    }

    #[test]
    fn test_load_from_str_fills_missing_sections() {
        let config = WhoisConfig::load_from_str("version: \"1.0\"\n").unwrap();
        assert_eq!(config, WhoisConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let yaml = r#"
version: "1.0"
lookup:
  command: /usr/bin/whois
  args: ["-h", "whois.nic.uk"]
output:
  format: human
  pretty: true
"#;
        let config = WhoisConfig::load_from_str(yaml).unwrap();

        assert_eq!(config.lookup.command, "/usr/bin/whois");
        assert_eq!(config.lookup.args, vec!["-h", "whois.nic.uk"]);
        assert_eq!(config.output.format, "human");
        assert!(config.output.pretty);
    }

    #[test]
    fn test_rejects_unknown_version() {
        let err = WhoisConfig::load_from_str("version: \"2.0\"\n").unwrap_err();
        assert!(err.to_string().contains("Unsupported configuration version: 2.0"));
    }

    #[test]
    fn test_rejects_empty_command() {
        let err = ConfigBuilder::new().command("  ").build().unwrap_err();
        assert!(err.to_string().contains("Lookup command must not be empty"));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = ConfigBuilder::new().output_format("xml").build().unwrap_err();
        assert!(err.to_string().contains("Unknown output format 'xml'"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("whois_fields.yaml");

        let config = ConfigBuilder::new().add_arg("-H").pretty(true).build().unwrap();
        fs::write(&path, config.to_yaml().unwrap()).unwrap();

        assert_eq!(WhoisConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = WhoisConfig::load_from_file(temp_dir.path().join("nope.yaml")).unwrap_err();

        assert!(matches!(err, WhoisError::Configuration { .. }));
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_to_json() {
        let json = WhoisConfig::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["lookup"]["command"], "whois");
        assert_eq!(value["output"]["format"], "json");
    }
}

//! Sources of raw WHOIS responses
//!
//! CDD Principle: Infrastructure Layer - Lookups hide how response text is obtained
//! - CommandSource shells out to the system `whois` client
//! - FileSource replays a saved response without touching the network
//! - Both sit behind the WhoisSource trait so the facade never knows which one it holds

use crate::config::LookupConfig;
use crate::domain::record::{WhoisError, WhoisResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Something that can produce the raw WHOIS response for a domain
pub trait WhoisSource {
    /// Fetch the response text for `domain`
    fn query(&self, domain: &str) -> WhoisResult<String>;
}

/// Runs an external WHOIS client and returns its standard output
#[derive(Debug, Clone)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    /// Use `program` with no extra arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Build from the `lookup` section of the configuration
    pub fn from_config(config: &LookupConfig) -> Self {
        Self {
            program: config.command.clone(),
            args: config.args.clone(),
        }
    }

    /// Arguments placed before the domain on every invocation
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for CommandSource {
    fn default() -> Self {
        Self::new("whois")
    }
}

impl WhoisSource for CommandSource {
    fn query(&self, domain: &str) -> WhoisResult<String> {
        tracing::debug!(
            "Running '{}' with args {:?} for domain '{}'",
            self.program,
            self.args,
            domain
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(domain)
            .output()
            .map_err(|e| {
                tracing::warn!("Failed to run '{}' for {}: {}", self.program, domain, e);
                WhoisError::lookup_failed(domain)
            })?;

        if !output.status.success() {
            tracing::warn!("'{}' exited with {} for {}", self.program, output.status, domain);
            return Err(WhoisError::lookup_failed(domain));
        }

        tracing::debug!("Received {} bytes of WHOIS output", output.stdout.len());
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Serves a response previously saved to disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl WhoisSource for FileSource {
    fn query(&self, domain: &str) -> WhoisResult<String> {
        tracing::debug!("Reading saved response for '{}' from {}", domain, self.path.display());
        let bytes = fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Top-level label of `domain`: the text after the last `.`, lowercased
///
/// A single trailing root dot is ignored. Multi-label public suffixes such
/// as `co.uk` resolve to their last label only.
pub fn tld_of(domain: &str) -> String {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let label = match domain.rsplit_once('.') {
        Some((_, tld)) => tld,
        None => domain,
    };
    label.to_ascii_lowercase()
}

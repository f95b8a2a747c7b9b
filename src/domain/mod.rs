//! Domain layer for whois-fields
//!
//! CDD Principle: Domain Model - Pure data shapes for extracted registration records
//! - Contains the extraction result, the lookup report and the shared error type
//! - Independent of process invocation, configuration files or output formats

pub mod record;

// Re-export main domain types for convenience
pub use record::*;

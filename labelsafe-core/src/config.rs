//! Configuration management for `labelsafe-core`.
//!
//! This module defines the serializable description of a naming grammar and the
//! built-in presets. A `SanitizerConfig` is plain data; calling [`SanitizerConfig::build`]
//! validates and compiles it into a [`Sanitizer`].
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::ConfigError;
use crate::sanitizer::Sanitizer;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Acceptance grammar of an RFC-1123 DNS label.
pub const SUBDOMAIN_LABEL_ACCEPTANCE: &str = r"^[a-z0-9][a-z0-9-]+[a-z0-9]$";
/// Runs of characters that may appear in a DNS label.
pub const SUBDOMAIN_LABEL_EXTRACTION: &str = r"[a-z0-9]+";
/// Maximum length of a DNS label.
pub const SUBDOMAIN_LABEL_MAX_LENGTH: usize = 63;

/// Acceptance grammar of an RFC-1123 subdomain (dot-separated labels).
pub const SUBDOMAIN_ACCEPTANCE: &str = r"^[a-z0-9]([a-z0-9.-]*[a-z0-9])?$";
/// Alphanumeric runs, keeping interior dots.
pub const SUBDOMAIN_EXTRACTION: &str = r"[a-z0-9]+(?:\.[a-z0-9]+)*";
/// Maximum length of a DNS subdomain.
pub const SUBDOMAIN_MAX_LENGTH: usize = 253;

pub const DEFAULT_SEPARATOR: &str = "-";

/// Describes a naming grammar: what a valid name looks like, which parts of an
/// arbitrary input are kept, how they are joined and how long the result may be.
///
/// Missing fields fall back to the subdomain-label preset when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Pattern a string must match in full to be accepted unchanged.
    pub acceptance_pattern: String,
    /// Pattern whose successive matches are the substrings kept from an input.
    pub extraction_pattern: String,
    /// Joins extracted tokens and delimits the hash suffix.
    pub separator: String,
    /// Inclusive upper bound on output length, in characters.
    pub max_length: usize,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self::subdomain_label()
    }
}

impl SanitizerConfig {
    /// RFC-1123 DNS label: lowercase alphanumerics and `-`, at most 63 characters.
    pub fn subdomain_label() -> Self {
        Self {
            acceptance_pattern: SUBDOMAIN_LABEL_ACCEPTANCE.to_string(),
            extraction_pattern: SUBDOMAIN_LABEL_EXTRACTION.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            max_length: SUBDOMAIN_LABEL_MAX_LENGTH,
        }
    }

    /// RFC-1123 subdomain: labels joined by `.`, at most 253 characters.
    pub fn subdomain() -> Self {
        Self {
            acceptance_pattern: SUBDOMAIN_ACCEPTANCE.to_string(),
            extraction_pattern: SUBDOMAIN_EXTRACTION.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            max_length: SUBDOMAIN_MAX_LENGTH,
        }
    }

    /// Parses a grammar from a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: SanitizerConfig =
            serde_yml::from_str(text).context("Failed to parse sanitizer config")?;
        debug!(
            "Parsed sanitizer config with max length {} and separator '{}'.",
            config.max_length, config.separator
        );
        Ok(config)
    }

    /// Loads a grammar from a YAML file.
    ///
    /// The file is only parsed here; call [`SanitizerConfig::build`] to validate it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading sanitizer config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded sanitizer config from file {}.", path.display());
        Ok(config)
    }

    /// Validates and compiles this grammar.
    pub fn build(&self) -> Result<Sanitizer, ConfigError> {
        Sanitizer::from_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_subdomain_label() {
        let config = SanitizerConfig::default();
        assert_eq!(config.acceptance_pattern, SUBDOMAIN_LABEL_ACCEPTANCE);
        assert_eq!(config.extraction_pattern, SUBDOMAIN_LABEL_EXTRACTION);
        assert_eq!(config.separator, "-");
        assert_eq!(config.max_length, 63);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() -> Result<()> {
        let config = SanitizerConfig::from_yaml_str("max_length: 40\n")?;
        assert_eq!(config.max_length, 40);
        assert_eq!(config.separator, DEFAULT_SEPARATOR);
        assert_eq!(config.acceptance_pattern, SUBDOMAIN_LABEL_ACCEPTANCE);
        Ok(())
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(SanitizerConfig::from_yaml_str("max_length: [not, a, number]").is_err());
    }

    #[test]
    fn test_presets_build() {
        assert!(SanitizerConfig::subdomain_label().build().is_ok());
        assert!(SanitizerConfig::subdomain().build().is_ok());
    }
}

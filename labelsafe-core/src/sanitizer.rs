// labelsafe-core/src/sanitizer.rs
//! The `Sanitizer`: validity checks, sanitization and joining.
//!
//! A `Sanitizer` rewrites an unacceptable input by keeping the substrings the
//! extraction grammar matches and gluing them together with the separator. When
//! the result does not fit the length bound, or nothing could be extracted, it is
//! truncated and suffixed with a hash of the original input so that inputs which
//! only differ past the cut-off still map to different names.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, trace};
use once_cell::sync::Lazy;

use crate::config::SanitizerConfig;
use crate::engine::NameSanitizer;
use crate::errors::ConfigError;
use crate::hash::{content_hash, HASH_HEX_LEN};
use crate::sanitizers::compiler::{compile_grammar, CompiledGrammar};

/// The built-in subdomain-label sanitizer, compiled once on first use.
pub(crate) static DEFAULT_SANITIZER: Lazy<Sanitizer> = Lazy::new(|| {
    SanitizerConfig::subdomain_label()
        .build()
        .expect("built-in subdomain-label grammar must compile")
});

/// Coerces strings into names that satisfy a configurable grammar.
///
/// Cloning is cheap: compiled regexes share their program.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    grammar: CompiledGrammar,
    config: SanitizerConfig,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Sanitizer {
    /// A sanitizer for RFC-1123 DNS labels (`[a-z0-9-]`, at most 63 characters).
    pub fn with_defaults() -> Self {
        DEFAULT_SANITIZER.clone()
    }

    /// Builds a sanitizer from caller-supplied grammars.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either pattern fails to compile, if
    /// `max_length` is zero, or if `separator` alone is longer than `max_length`.
    pub fn with_config(
        acceptance_pattern: &str,
        extraction_pattern: &str,
        separator: &str,
        max_length: usize,
    ) -> Result<Self, ConfigError> {
        Self::from_config(&SanitizerConfig {
            acceptance_pattern: acceptance_pattern.to_string(),
            extraction_pattern: extraction_pattern.to_string(),
            separator: separator.to_string(),
            max_length,
        })
    }

    /// Builds a sanitizer from a [`SanitizerConfig`].
    pub fn from_config(config: &SanitizerConfig) -> Result<Self, ConfigError> {
        if config.max_length < 1 {
            return Err(ConfigError::InvalidMaxLength(config.max_length));
        }
        if char_len(&config.separator) > config.max_length {
            return Err(ConfigError::SeparatorTooLong {
                separator: config.separator.clone(),
                max_length: config.max_length,
            });
        }

        let grammar = compile_grammar(&config.acceptance_pattern, &config.extraction_pattern)?;
        debug!(
            "Sanitizer ready: separator '{}', max length {}.",
            config.separator, config.max_length
        );

        Ok(Self {
            grammar,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    pub fn separator(&self) -> &str {
        &self.config.separator
    }

    pub fn max_length(&self) -> usize {
        self.config.max_length
    }

    /// Returns `true` if `input` matches the acceptance grammar in full and fits
    /// within the maximum length.
    pub fn is_valid(&self, input: &str) -> bool {
        char_len(input) <= self.config.max_length && self.grammar.acceptance.is_match(input)
    }

    /// Returns an acceptable form of `input`.
    ///
    /// Valid inputs come back unchanged. Anything else is rebuilt from its
    /// extractable tokens; if those do not fit (or there are none) the result is
    /// truncated and ends in `separator + hash`, where the hash covers all of `input`.
    pub fn sanitize(&self, input: &str) -> String {
        if self.is_valid(input) {
            trace!("'{}' is already valid.", input);
            return input.to_string();
        }

        let joined = self
            .grammar
            .extraction
            .find_iter(input)
            .map(|m| m.as_str())
            .filter(|token| !token.is_empty())
            .collect::<Vec<&str>>()
            .join(self.config.separator.as_str());

        if !joined.is_empty() && char_len(&joined) <= self.config.max_length {
            trace!("'{}' sanitized to '{}'.", input, joined);
            return joined;
        }

        self.truncate_with_hash(input, &joined)
    }

    /// Joins `parts` with the separator, then sanitizes the combined string.
    ///
    /// The hash suffix, if one is needed, is computed over the combined raw string.
    pub fn join<I, S>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut combined = String::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                combined.push_str(&self.config.separator);
            }
            combined.push_str(part.as_ref());
        }
        self.sanitize(&combined)
    }

    /// Number of hash digits that go into a suffix.
    ///
    /// Shrinks to `max_length / 2` for very short names, and never leaves the
    /// separator without room.
    fn hash_len(&self) -> usize {
        let max_length = self.config.max_length;
        let wanted = if max_length < HASH_HEX_LEN {
            max_length / 2
        } else {
            HASH_HEX_LEN
        };
        // `from_config` guarantees the separator fits.
        wanted.min(max_length - char_len(&self.config.separator))
    }

    fn truncate_with_hash(&self, original: &str, joined: &str) -> String {
        let separator = &self.config.separator;
        let hash_len = self.hash_len();
        let keep = self.config.max_length - hash_len - char_len(separator);
        let hash = content_hash(original);

        let mut out = String::with_capacity(joined.len().min(keep * 4) + separator.len() + hash_len);
        out.extend(joined.chars().take(keep));
        out.push_str(separator);
        out.push_str(&hash[..hash_len]);

        debug!(
            "'{}' does not fit in {} characters; using hashed name '{}'.",
            original, self.config.max_length, out
        );
        out
    }
}

impl NameSanitizer for Sanitizer {
    fn is_valid(&self, input: &str) -> bool {
        Sanitizer::is_valid(self, input)
    }

    fn sanitize(&self, input: &str) -> String {
        Sanitizer::sanitize(self, input)
    }

    fn join_parts(&self, parts: &[&str]) -> String {
        self.join(parts)
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

//! errors.rs - Custom error types for the labelsafe-core library.
//!
//! Every failure this library can report happens while building a `Sanitizer`.
//! Once construction succeeds, validation and sanitization are infallible.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Errors raised while turning a grammar into a usable `Sanitizer`.
///
/// Marked `#[non_exhaustive]` so new construction checks can be added
/// without breaking downstream `match` statements.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Failed to compile {0} pattern: {1}")]
    PatternCompilation(String, regex::Error),

    #[error("{0} pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Maximum length must be at least 1, got {0}")]
    InvalidMaxLength(usize),

    #[error("Separator '{separator}' does not fit within the maximum length of {max_length}")]
    SeparatorTooLong { separator: String, max_length: usize },
}

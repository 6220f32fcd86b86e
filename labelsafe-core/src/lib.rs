// labelsafe-core/src/lib.rs
//! # labelsafe Core Library
//!
//! `labelsafe-core` turns arbitrary strings into identifiers that satisfy a strict
//! naming grammar, by default the RFC-1123 DNS label shape used for Kubernetes
//! object names and many cloud resource names: lowercase alphanumerics and `-`,
//! no leading or trailing `-`, at most 63 characters.
//!
//! The library is pure and stateless. A [`Sanitizer`] is built once from a grammar
//! and can then be shared freely between threads.
//!
//! ## Modules
//!
//! * `config`: Defines [`SanitizerConfig`], the built-in presets and YAML loading.
//! * `sanitizers`: Compiles acceptance and extraction grammars.
//! * `sanitizer`: The [`Sanitizer`] itself.
//! * `engine`: The [`NameSanitizer`] trait callers can depend on.
//! * `hash`: The content hash used for collision-avoiding suffixes.
//! * `oneshot`: Convenience functions over the default grammar.
//! * `errors`: [`ConfigError`].
//!
//! ## How sanitization works
//!
//! 1. A string that already satisfies the acceptance grammar and length bound is
//!    returned unchanged.
//! 2. Otherwise every match of the extraction grammar is collected, left to right,
//!    and the matches are joined with the separator.
//! 3. If that result is empty or too long, it is cut short and suffixed with the
//!    separator and an FNV-1a hash of the original input, so two long inputs that
//!    share a prefix still end up with different names.
//!
//! ## Usage Example
//!
//! ```rust
//! use labelsafe_core::{Sanitizer, SanitizerConfig};
//!
//! let sanitizer = Sanitizer::with_defaults();
//! assert_eq!(sanitizer.sanitize("some/string%included*special&characters"),
//!            "some-string-included-special-characters");
//! assert_eq!(sanitizer.join(["some", "string"]), "some-string");
//! assert!(!sanitizer.is_valid("some/string"));
//!
//! let subdomain = SanitizerConfig::subdomain().build().unwrap();
//! assert!(subdomain.is_valid("api.example.com"));
//! ```
//!
//! ## Error Handling
//!
//! Only construction can fail, with a [`ConfigError`]. Loading a config file returns
//! `anyhow::Result` with context attached.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod hash;
pub mod oneshot;
pub mod sanitizer;
pub mod sanitizers;

/// Re-exports the grammar description and its presets.
pub use config::{SanitizerConfig, MAX_PATTERN_LENGTH};

/// Re-exports the construction error type.
pub use errors::ConfigError;

/// Re-exports the sanitizer trait and its implementation.
pub use engine::NameSanitizer;
pub use sanitizer::Sanitizer;

/// Re-exports the one-shot helpers for the default DNS label grammar.
pub use oneshot::{is_valid_label, join_label, sanitize_label};

pub use hash::content_hash;

//! oneshot.rs - Convenience functions over the built-in DNS label grammar.
//!
//! These wrap a shared, lazily compiled default [`Sanitizer`](crate::Sanitizer)
//! for callers that never need a custom grammar.
//!
//! License: MIT OR APACHE 2.0

use crate::sanitizer::DEFAULT_SANITIZER;

/// Returns `true` if `input` is already a valid DNS label.
pub fn is_valid_label(input: &str) -> bool {
    DEFAULT_SANITIZER.is_valid(input)
}

/// Coerces `input` into a DNS label.
pub fn sanitize_label(input: &str) -> String {
    DEFAULT_SANITIZER.sanitize(input)
}

/// Joins `parts` with `-` and coerces the result into a DNS label.
pub fn join_label<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DEFAULT_SANITIZER.join(parts)
}

// labelsafe-core/src/engine.rs
//! Defines the `NameSanitizer` trait.
//!
//! Code that needs safe names usually only cares about three questions: is this
//! name acceptable, what is the acceptable form of this string, and what is the
//! acceptable form of these parts put together. This trait captures that contract
//! so callers can hold a `&dyn NameSanitizer` (or a test double) instead of the
//! concrete [`Sanitizer`](crate::Sanitizer).
//!
//! License: MIT OR APACHE 2.0

/// The behaviour shared by every sanitizer implementation.
///
/// Implementations are immutable after construction and must be usable from
/// several threads at once.
pub trait NameSanitizer: Send + Sync {
    /// Returns `true` when `input` is already an acceptable name.
    fn is_valid(&self, input: &str) -> bool;

    /// Returns the acceptable form of `input`.
    ///
    /// Acceptable inputs are returned unchanged. This never fails.
    fn sanitize(&self, input: &str) -> String;

    /// Joins `parts` with the separator, then sanitizes the combined string.
    fn join_parts(&self, parts: &[&str]) -> String;
}

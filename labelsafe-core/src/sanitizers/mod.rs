//! Grammar handling for labelsafe.
//!
//! This module turns the textual acceptance and extraction patterns of a
//! `SanitizerConfig` into compiled regular expressions. The acceptance grammar is
//! anchored so that it must match an input in full; the extraction grammar is left
//! unanchored because its successive matches are what gets kept from an input.

pub mod compiler;

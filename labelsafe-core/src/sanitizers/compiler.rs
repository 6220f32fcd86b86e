//! compiler.rs - Compiles the acceptance and extraction grammars.
//!
//! Both grammars are user-supplied strings, so they go through the same
//! length guard and compiled-size cap before a `Sanitizer` is built from them.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::MAX_PATTERN_LENGTH;
use crate::errors::ConfigError;

/// Upper bound on the compiled program size of a single grammar.
const COMPILED_SIZE_LIMIT: usize = 10 * (1 << 20);

/// The pair of compiled grammars a `Sanitizer` works with.
#[derive(Debug, Clone)]
pub struct CompiledGrammar {
    /// Matches only strings that satisfy the acceptance grammar in full.
    pub acceptance: Regex,
    /// Yields the safe substrings of an arbitrary input, left to right.
    pub extraction: Regex,
}

/// Wraps a pattern so it has to match the whole input.
///
/// Patterns that already carry `^`/`$` are unaffected; the extra anchors are redundant.
fn anchor(pattern: &str) -> String {
    format!("^(?:{})$", pattern)
}

/// Compiles one pattern, labelling errors with `name` ("acceptance" / "extraction").
///
/// The length guard applies to the pattern as written, before any anchoring.
pub fn compile_pattern(name: &str, pattern: &str, anchored: bool) -> Result<Regex, ConfigError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(ConfigError::PatternLengthExceeded(
            name.to_string(),
            pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    let source = if anchored {
        anchor(pattern)
    } else {
        pattern.to_string()
    };

    RegexBuilder::new(&source)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
        .map_err(|e| ConfigError::PatternCompilation(name.to_string(), e))
}

/// Compiles both grammars, anchoring the acceptance pattern at both ends.
pub fn compile_grammar(
    acceptance_pattern: &str,
    extraction_pattern: &str,
) -> Result<CompiledGrammar, ConfigError> {
    debug!(
        "Compiling grammar: acceptance '{}', extraction '{}'",
        acceptance_pattern, extraction_pattern
    );

    let acceptance = compile_pattern("acceptance", acceptance_pattern, true)?;
    let extraction = compile_pattern("extraction", extraction_pattern, false)?;

    Ok(CompiledGrammar {
        acceptance,
        extraction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptance_is_anchored() {
        let grammar = compile_grammar("[a-z]", "[a-z]").unwrap();
        assert!(grammar.acceptance.is_match("a"));
        assert!(!grammar.acceptance.is_match("ab"));
        assert!(!grammar.acceptance.is_match("1a"));
    }

    #[test]
    fn test_extraction_is_not_anchored() {
        let grammar = compile_grammar("[a-z]+", "[a-z]+").unwrap();
        let found: Vec<&str> = grammar
            .extraction
            .find_iter("ab/cd")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["ab", "cd"]);
    }

    #[test]
    fn test_invalid_pattern_names_the_grammar() {
        let err = compile_grammar("[a-z", "[a-z]").unwrap_err();
        assert!(matches!(err, ConfigError::PatternCompilation(ref name, _) if name == "acceptance"));

        let err = compile_grammar("[a-z]", "(unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::PatternCompilation(ref name, _) if name == "extraction"));
    }

    #[test]
    fn test_overlong_pattern_rejected() {
        let long = "a".repeat(MAX_PATTERN_LENGTH + 1);
        let err = compile_pattern("extraction", &long, false).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::PatternLengthExceeded(_, len, max) if len == MAX_PATTERN_LENGTH + 1 && max == MAX_PATTERN_LENGTH
        ));
    }
}

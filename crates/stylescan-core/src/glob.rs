// crates/stylescan-core/src/glob.rs
// ============================================================================
// Module: Stylescan Glob Patterns
// Description: Validated glob-pattern strings for content declarations.
// Purpose: Enforce glob syntax invariants at the construction boundary.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Content declarations name the files the engine scans as glob patterns:
//! `*` matches within a path segment and `**` matches across segments. This
//! module validates pattern *syntax* only. Resolving a pattern against a
//! project tree is the engine's job and is out of scope here.
//!
//! Patterns are resolved by the engine relative to the project root, so
//! absolute patterns and parent traversal are rejected.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum total length of a glob pattern in bytes.
pub const MAX_GLOB_LENGTH: usize = 4096;
/// Maximum length of a single `/`-separated pattern segment in bytes.
pub const MAX_GLOB_SEGMENT_LENGTH: usize = 255;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Glob pattern construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlobError {
    /// The pattern is empty or whitespace-only.
    #[error("glob pattern must be non-empty")]
    Empty,
    /// The pattern has leading or trailing whitespace.
    #[error("glob pattern must not have surrounding whitespace")]
    SurroundingWhitespace,
    /// The pattern exceeds the maximum total length.
    #[error("glob pattern exceeds {MAX_GLOB_LENGTH} bytes")]
    TooLong,
    /// A pattern segment exceeds the maximum segment length.
    #[error("glob pattern segment exceeds {MAX_GLOB_SEGMENT_LENGTH} bytes")]
    SegmentTooLong,
    /// The pattern contains a control character or backslash.
    #[error("glob pattern contains invalid character {0:?}")]
    InvalidCharacter(char),
    /// The pattern is absolute; patterns resolve relative to the project root.
    #[error("glob pattern must be relative to the project root")]
    Absolute,
    /// The pattern contains an empty segment (`//`).
    #[error("glob pattern contains an empty segment")]
    EmptySegment,
    /// The pattern traverses above the project root (`..`).
    #[error("glob pattern must not traverse above the project root")]
    ParentTraversal,
    /// `**` appears inside a segment instead of occupying a whole one.
    #[error("`**` must occupy an entire pattern segment")]
    MisplacedRecursiveWildcard,
}

// ============================================================================
// SECTION: Glob Pattern
// ============================================================================

/// A syntactically validated glob pattern.
///
/// # Invariants
/// - Non-empty, no surrounding whitespace, at most [`MAX_GLOB_LENGTH`] bytes.
/// - Forward-slash separators only; no control characters.
/// - Relative to the project root; no `..` segments, no empty segments.
/// - `**` only ever occupies an entire segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GlobPattern(String);

impl GlobPattern {
    /// Parses and validates a glob pattern.
    ///
    /// # Errors
    ///
    /// Returns [`GlobError`] when the pattern violates a syntax invariant.
    pub fn parse(pattern: &str) -> Result<Self, GlobError> {
        if pattern.is_empty() || pattern.trim().is_empty() {
            return Err(GlobError::Empty);
        }
        if pattern.trim() != pattern {
            return Err(GlobError::SurroundingWhitespace);
        }
        if pattern.len() > MAX_GLOB_LENGTH {
            return Err(GlobError::TooLong);
        }
        if let Some(invalid) = pattern.chars().find(|ch| ch.is_control() || *ch == '\\') {
            return Err(GlobError::InvalidCharacter(invalid));
        }
        if pattern.starts_with('/') {
            return Err(GlobError::Absolute);
        }
        for segment in pattern.split('/') {
            if segment.is_empty() {
                return Err(GlobError::EmptySegment);
            }
            if segment.len() > MAX_GLOB_SEGMENT_LENGTH {
                return Err(GlobError::SegmentTooLong);
            }
            if segment == ".." {
                return Err(GlobError::ParentTraversal);
            }
            if segment != "**" && segment.contains("**") {
                return Err(GlobError::MisplacedRecursiveWildcard);
            }
        }
        Ok(Self(pattern.to_string()))
    }

    /// Returns the pattern as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true when the pattern contains a `**` segment.
    #[must_use]
    pub fn is_recursive(&self) -> bool {
        self.0.split('/').any(|segment| segment == "**")
    }
}

impl TryFrom<String> for GlobPattern {
    type Error = GlobError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<GlobPattern> for String {
    fn from(pattern: GlobPattern) -> Self {
        pattern.0
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test fixtures use explicit asserts and unwraps for clarity."
    )]

    use super::*;

    #[test]
    fn parse_accepts_source_artifact_patterns() {
        for pattern in [
            "./internal/templates/**/*.templ",
            "./internal/templates/*.templ",
            "./internal/templates/*.go",
            "./internal/templates/**/*.go",
            "./internal/templates/*/*.go",
        ] {
            assert!(GlobPattern::parse(pattern).is_ok(), "{pattern} should parse");
        }
    }

    #[test]
    fn parse_rejects_empty_and_whitespace() {
        assert_eq!(GlobPattern::parse(""), Err(GlobError::Empty));
        assert_eq!(GlobPattern::parse("   "), Err(GlobError::Empty));
        assert_eq!(GlobPattern::parse(" src/*.rs"), Err(GlobError::SurroundingWhitespace));
        assert_eq!(GlobPattern::parse("src/*.rs "), Err(GlobError::SurroundingWhitespace));
    }

    #[test]
    fn parse_rejects_backslash() {
        assert_eq!(
            GlobPattern::parse("src\\templates\\*.templ"),
            Err(GlobError::InvalidCharacter('\\'))
        );
    }

    #[test]
    fn parse_rejects_control_characters() {
        assert_eq!(GlobPattern::parse("src/\u{0}.rs"), Err(GlobError::InvalidCharacter('\u{0}')));
        assert_eq!(GlobPattern::parse("src/a\tb"), Err(GlobError::InvalidCharacter('\t')));
    }

    #[test]
    fn parse_rejects_absolute_patterns() {
        assert_eq!(GlobPattern::parse("/etc/**"), Err(GlobError::Absolute));
    }

    #[test]
    fn parse_rejects_parent_traversal() {
        assert_eq!(GlobPattern::parse("../shared/**"), Err(GlobError::ParentTraversal));
        assert_eq!(GlobPattern::parse("a/../b"), Err(GlobError::ParentTraversal));
    }

    #[test]
    fn parse_rejects_empty_segments() {
        assert_eq!(GlobPattern::parse("a//b"), Err(GlobError::EmptySegment));
        assert_eq!(GlobPattern::parse("a/"), Err(GlobError::EmptySegment));
    }

    #[test]
    fn parse_rejects_misplaced_recursive_wildcard() {
        assert_eq!(GlobPattern::parse("a**b"), Err(GlobError::MisplacedRecursiveWildcard));
        assert_eq!(GlobPattern::parse("**x/y"), Err(GlobError::MisplacedRecursiveWildcard));
        assert_eq!(GlobPattern::parse("a/b**"), Err(GlobError::MisplacedRecursiveWildcard));
    }

    #[test]
    fn parse_accepts_interior_spaces() {
        assert!(GlobPattern::parse("my docs/**/*.md").is_ok());
    }

    #[test]
    fn parse_rejects_too_long_pattern() {
        let segment = "a".repeat(MAX_GLOB_SEGMENT_LENGTH);
        let mut pattern = String::new();
        while pattern.len() <= MAX_GLOB_LENGTH {
            pattern.push_str(&segment);
            pattern.push('/');
        }
        pattern.push('*');
        assert_eq!(GlobPattern::parse(&pattern), Err(GlobError::TooLong));
    }

    #[test]
    fn parse_rejects_too_long_segment() {
        let segment = "a".repeat(MAX_GLOB_SEGMENT_LENGTH + 1);
        assert_eq!(GlobPattern::parse(&segment), Err(GlobError::SegmentTooLong));
    }

    #[test]
    fn is_recursive_detects_recursive_segments() {
        let recursive = GlobPattern::parse("src/**/*.rs").expect("valid pattern");
        assert!(recursive.is_recursive());
        let flat = GlobPattern::parse("src/*.rs").expect("valid pattern");
        assert!(!flat.is_recursive());
    }

    #[test]
    fn serde_round_trip_preserves_pattern() {
        let pattern = GlobPattern::parse("./internal/templates/**/*.templ").expect("valid");
        let json = serde_json::to_string(&pattern).expect("serialize");
        let back: GlobPattern = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, pattern);
    }

    #[test]
    fn serde_rejects_invalid_pattern() {
        let result: Result<GlobPattern, _> = serde_json::from_str("\"a**b\"");
        assert!(result.is_err(), "invalid glob should fail to deserialize");
    }
}

// crates/stylescan-core/src/identifiers.rs
// ============================================================================
// Module: Stylescan Identifiers
// Description: Canonical validated identifiers for Stylescan declarations.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! This module defines the validated identifiers used throughout Stylescan.
//! Identifiers serialize as plain strings on the wire and enforce their
//! character-set and length invariants at construction boundaries, including
//! during deserialization.

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

/// Maximum length of a plugin identifier in bytes.
pub const MAX_PLUGIN_ID_LENGTH: usize = 128;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Identifier construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    /// The identifier is empty.
    #[error("identifier must be non-empty")]
    Empty,
    /// The identifier exceeds the maximum length.
    #[error("identifier exceeds {MAX_PLUGIN_ID_LENGTH} bytes")]
    TooLong,
    /// The identifier contains a character outside the allowed set.
    #[error("identifier contains invalid character {0:?}")]
    InvalidCharacter(char),
    /// The identifier starts with a separator character.
    #[error("identifier must start with a lowercase letter or digit")]
    InvalidStart,
}

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Plugin identifier referenced from the `plugins` sequence.
///
/// # Invariants
/// - Non-empty, at most [`MAX_PLUGIN_ID_LENGTH`] bytes.
/// - Lowercase ASCII letters, digits, `-`, and `_` only.
/// - Starts with a letter or digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PluginId(String);

impl PluginId {
    /// Parses a plugin identifier, validating the character set and length.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError`] when the identifier violates an invariant.
    pub fn parse(id: &str) -> Result<Self, IdentifierError> {
        if id.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if id.len() > MAX_PLUGIN_ID_LENGTH {
            return Err(IdentifierError::TooLong);
        }
        if let Some(invalid) = id
            .chars()
            .find(|ch| !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(*ch, '-' | '_')))
        {
            return Err(IdentifierError::InvalidCharacter(invalid));
        }
        if id.starts_with(['-', '_']) {
            return Err(IdentifierError::InvalidStart);
        }
        Ok(Self(id.to_string()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PluginId {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PluginId> for String {
    fn from(id: PluginId) -> Self {
        id.0
    }
}

impl fmt::Display for PluginId {
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
    fn plugin_id_accepts_lowercase_names() {
        let id = PluginId::parse("typography").expect("valid id");
        assert_eq!(id.as_str(), "typography");
    }

    #[test]
    fn plugin_id_accepts_digits_and_separators() {
        assert!(PluginId::parse("forms-v2").is_ok());
        assert!(PluginId::parse("aspect_ratio").is_ok());
        assert!(PluginId::parse("3d-transforms").is_ok());
    }

    #[test]
    fn plugin_id_rejects_empty() {
        assert_eq!(PluginId::parse(""), Err(IdentifierError::Empty));
    }

    #[test]
    fn plugin_id_rejects_uppercase() {
        assert_eq!(PluginId::parse("Typography"), Err(IdentifierError::InvalidCharacter('T')));
    }

    #[test]
    fn plugin_id_rejects_whitespace() {
        assert_eq!(PluginId::parse("a b"), Err(IdentifierError::InvalidCharacter(' ')));
    }

    #[test]
    fn plugin_id_rejects_leading_separator() {
        assert_eq!(PluginId::parse("-forms"), Err(IdentifierError::InvalidStart));
        assert_eq!(PluginId::parse("_forms"), Err(IdentifierError::InvalidStart));
    }

    #[test]
    fn plugin_id_rejects_too_long() {
        let id = "a".repeat(MAX_PLUGIN_ID_LENGTH + 1);
        assert_eq!(PluginId::parse(&id), Err(IdentifierError::TooLong));
    }

    #[test]
    fn plugin_id_accepts_max_length() {
        let id = "a".repeat(MAX_PLUGIN_ID_LENGTH);
        assert!(PluginId::parse(&id).is_ok());
    }

    #[test]
    fn plugin_id_round_trips_through_serde() {
        let id = PluginId::parse("typography").expect("valid id");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"typography\"");
        let back: PluginId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn plugin_id_deserialization_enforces_invariants() {
        let result: Result<PluginId, _> = serde_json::from_str("\"Not Valid\"");
        assert!(result.is_err(), "invalid identifier should fail to deserialize");
    }
}

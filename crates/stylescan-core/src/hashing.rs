// crates/stylescan-core/src/hashing.rs
// ============================================================================
// Module: Stylescan Canonical Hashing
// Description: Canonical JSON serialization and SHA-256 fingerprints.
// Purpose: Provide deterministic identity for configuration declarations.
// Dependencies: serde, serde_jcs, serde_json, sha2
// ============================================================================

//! ## Overview
//! Fingerprints identify a configuration declaration by hashing its RFC 8785
//! canonical JSON form. Structurally equal declarations always hash to the
//! same digest, independent of key order in the source file or the process
//! that computed it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Canonicalization and hashing errors.
#[derive(Debug, Error)]
pub enum HashError {
    /// The value could not be serialized to canonical JSON.
    #[error("canonical json error: {0}")]
    Canonicalize(String),
}

// ============================================================================
// SECTION: Hash Types
// ============================================================================

/// Supported hash algorithms for fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    /// SHA-256.
    #[default]
    Sha256,
}

impl HashAlgorithm {
    /// Returns the canonical name of the algorithm.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hash digest with its producing algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashDigest {
    /// Algorithm that produced the digest.
    pub algorithm: HashAlgorithm,
    /// Lowercase hex encoding of the digest bytes.
    pub value: String,
}

impl HashDigest {
    /// Creates a digest from raw bytes, encoding them as lowercase hex.
    #[must_use]
    pub fn new(algorithm: HashAlgorithm, bytes: &[u8]) -> Self {
        let value = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
        Self {
            algorithm,
            value,
        }
    }
}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.value)
    }
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Serializes a value to RFC 8785 canonical JSON bytes.
///
/// # Errors
///
/// Returns [`HashError`] when the value cannot be canonicalized.
pub fn canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, HashError> {
    serde_jcs::to_vec(value).map_err(|err| HashError::Canonicalize(err.to_string()))
}

/// Computes the SHA-256 fingerprint of a value's canonical JSON form.
///
/// # Errors
///
/// Returns [`HashError`] when the value cannot be canonicalized.
pub fn fingerprint<T: Serialize>(value: &T) -> Result<HashDigest, HashError> {
    let bytes = canonical_json_bytes(value)?;
    let digest = Sha256::digest(&bytes);
    Ok(HashDigest::new(HashAlgorithm::Sha256, &digest))
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

    use serde_json::json;

    use super::*;

    #[test]
    fn fingerprint_is_deterministic_across_calls() {
        let value = json!({"a": 1, "b": [1, 2, 3], "c": {"nested": true}});
        let first = fingerprint(&value).expect("first");
        let second = fingerprint(&value).expect("second");
        assert_eq!(first, second, "fingerprint must be deterministic");
    }

    #[test]
    fn fingerprint_is_independent_of_key_order() {
        let left = json!({"mode": "jit", "content": ["src/**"]});
        let right = json!({"content": ["src/**"], "mode": "jit"});
        let left_digest = fingerprint(&left).expect("left");
        let right_digest = fingerprint(&right).expect("right");
        assert_eq!(left_digest, right_digest, "canonical form must sort keys");
    }

    #[test]
    fn fingerprint_differs_for_different_values() {
        let left = fingerprint(&json!({"mode": "jit"})).expect("left");
        let right = fingerprint(&json!({"mode": "full"})).expect("right");
        assert_ne!(left, right);
    }

    #[test]
    fn digest_produces_lowercase_hex() {
        let digest = HashDigest::new(HashAlgorithm::Sha256, &[0xAB, 0xCD, 0xEF, 0x12]);
        assert_eq!(digest.value, "abcdef12", "hex must be lowercase");
    }

    #[test]
    fn digest_display_includes_algorithm() {
        let digest = HashDigest::new(HashAlgorithm::Sha256, &[0x00, 0xFF]);
        assert_eq!(digest.to_string(), "sha256:00ff");
    }

    #[test]
    fn canonical_bytes_handle_unicode() {
        let value = json!({"token": "héllo-wörld"});
        assert!(canonical_json_bytes(&value).is_ok());
    }
}

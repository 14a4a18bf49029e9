// crates/stylescan-config/src/lib.rs
// ============================================================================
// Module: Stylescan Config Library
// Description: Canonical config model, validation, and artifact generation.
// Purpose: Single source of truth for stylescan.toml semantics.
// Dependencies: stylescan-core, serde, toml
// ============================================================================

//! ## Overview
//! `stylescan-config` defines the canonical configuration model for the
//! Stylescan engine: the `stylescan.toml` declaration with its four keys
//! (`mode`, `content`, `theme`, `plugins`). It provides strict, fail-closed
//! validation and deterministic generators for the config schema, example,
//! and docs. The engine that scans content and emits CSS consumes this
//! model; it does not live in this repository.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod docs;
pub mod examples;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use docs::config_docs_markdown;
pub use docs::verify_config_docs;
pub use docs::write_config_docs;
pub use examples::config_toml_example;
pub use schema::config_schema;

// crates/stylescan-config/src/schema.rs
// ============================================================================
// Module: Config Schemas
// Description: JSON schema builders for stylescan.toml.
// Purpose: Provide canonical validation schema for config artifacts.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for Stylescan configuration. The
//! schema is generated from the canonical config model and is used by
//! tooling, docs, and validation pipelines. Enum values, limits, and
//! defaults stay in lockstep with the runtime constants.

use serde_json::Value;
use serde_json::json;
use stylescan_core::MAX_GLOB_LENGTH;
use stylescan_core::MAX_PLUGIN_ID_LENGTH;

use crate::config::MAX_CONTENT_GLOBS;
use crate::config::MAX_PLUGINS;
use crate::config::MAX_THEME_KEY_LENGTH;
use crate::config::MAX_THEME_VALUE_LENGTH;

/// Returns the JSON schema for `stylescan.toml`.
#[must_use]
pub fn config_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "stylescan://schemas/config.schema.json",
        "title": "Stylescan Configuration",
        "description": "Configuration for the Stylescan on-demand CSS engine.",
        "type": "object",
        "properties": {
            "mode": mode_schema(),
            "content": content_schema(),
            "theme": theme_config_schema(),
            "plugins": {
                "type": "array",
                "items": plugin_config_schema(),
                "maxItems": MAX_PLUGINS,
                "default": [],
                "description": "Ordered plugin references."
            }
        },
        "required": ["content"],
        "additionalProperties": false,
        "$defs": {
            "token_value": token_value_schema()
        }
    })
}

// ============================================================================
// SECTION: Mode / Content
// ============================================================================

/// Schema for the build mode selector.
fn mode_schema() -> Value {
    json!({
        "type": "string",
        "enum": ["jit", "full"],
        "default": "jit",
        "description": "Build strategy: on-demand compilation or full scan."
    })
}

/// Schema for the content glob declarations.
fn content_schema() -> Value {
    json!({
        "type": "array",
        "items": glob_pattern_schema(),
        "minItems": 1,
        "maxItems": MAX_CONTENT_GLOBS,
        "uniqueItems": true,
        "description": "Glob patterns naming the files scanned for utility-class tokens."
    })
}

/// Schema for a single glob pattern.
fn glob_pattern_schema() -> Value {
    json!({
        "type": "string",
        "minLength": 1,
        "maxLength": MAX_GLOB_LENGTH,
        "description": "Glob pattern resolved relative to the project root."
    })
}

// ============================================================================
// SECTION: Theme / Plugins
// ============================================================================

/// Schema for the theme extension mapping.
fn theme_config_schema() -> Value {
    json!({
        "type": "object",
        "description": "Design-token extension mapping.",
        "properties": {
            "extend": {
                "type": "object",
                "additionalProperties": { "$ref": "#/$defs/token_value" },
                "propertyNames": { "minLength": 1, "maxLength": MAX_THEME_KEY_LENGTH },
                "default": {},
                "description": "Token groups merged over the built-in theme."
            }
        },
        "additionalProperties": false
    })
}

/// Schema for a theme token value: a literal or a nested group.
fn token_value_schema() -> Value {
    json!({
        "oneOf": [
            {
                "type": "string",
                "minLength": 1,
                "maxLength": MAX_THEME_VALUE_LENGTH,
                "description": "Literal token value."
            },
            {
                "type": "object",
                "additionalProperties": { "$ref": "#/$defs/token_value" },
                "propertyNames": { "minLength": 1, "maxLength": MAX_THEME_KEY_LENGTH },
                "description": "Nested token group."
            }
        ]
    })
}

/// Schema for plugin entries.
fn plugin_config_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": plugin_id_schema(),
            "options": schema_for_json_value("Plugin-specific options blob.")
        },
        "additionalProperties": false
    })
}

/// Schema for a plugin identifier.
fn plugin_id_schema() -> Value {
    json!({
        "type": "string",
        "pattern": "^[a-z0-9][a-z0-9_-]*$",
        "maxLength": MAX_PLUGIN_ID_LENGTH,
        "description": "Plugin identifier."
    })
}

// ============================================================================
// SECTION: Schema Helpers
// ============================================================================

/// Schema for arbitrary JSON values.
fn schema_for_json_value(description: &str) -> Value {
    json!({
        "type": ["null", "boolean", "number", "string", "array", "object"],
        "description": description
    })
}

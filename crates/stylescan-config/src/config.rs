// crates/stylescan-config/src/config.rs
// ============================================================================
// Module: Stylescan Configuration
// Description: Configuration loading and validation for Stylescan.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: stylescan-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! The declaration is immutable once loaded: the engine reads it exactly once
//! per build, and re-loading the same file yields a structurally equal object
//! with an identical fingerprint. Missing or invalid configuration fails
//! closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use stylescan_core::GlobPattern;
use stylescan_core::HashDigest;
use stylescan_core::HashError;
use stylescan_core::PluginId;
use stylescan_core::hashing;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "stylescan.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "STYLESCAN_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of content glob patterns.
pub(crate) const MAX_CONTENT_GLOBS: usize = 256;
/// Maximum number of plugin entries.
pub(crate) const MAX_PLUGINS: usize = 64;
/// Maximum nesting depth of theme token groups.
pub(crate) const MAX_THEME_DEPTH: usize = 8;
/// Maximum total number of theme token values.
pub(crate) const MAX_THEME_TOKENS: usize = 4096;
/// Maximum length of a theme key in bytes.
pub(crate) const MAX_THEME_KEY_LENGTH: usize = 128;
/// Maximum length of a theme token value in bytes.
pub(crate) const MAX_THEME_VALUE_LENGTH: usize = 1024;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Stylescan build configuration.
///
/// The declaration exposes exactly four keys: `mode`, `content`, `theme`,
/// and `plugins`. Unknown keys are rejected at parse time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StylescanConfig {
    /// Build strategy selector.
    #[serde(default)]
    pub mode: BuildMode,
    /// Glob patterns naming the files scanned for utility-class tokens.
    #[serde(default)]
    pub content: Vec<GlobPattern>,
    /// Design-token extension mapping.
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Ordered plugin references.
    #[serde(default)]
    pub plugins: Vec<PluginConfig>,
}

impl StylescanConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// Resolution order: explicit path, then the `STYLESCAN_CONFIG`
    /// environment variable, then `./stylescan.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_content()?;
        self.theme.validate()?;
        self.validate_plugins()?;
        Ok(())
    }

    /// Returns the canonical fingerprint of the declaration.
    ///
    /// Structurally equal declarations always produce identical digests,
    /// independent of key order in the source file.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when the declaration cannot be canonicalized.
    pub fn fingerprint(&self) -> Result<HashDigest, HashError> {
        hashing::fingerprint(self)
    }

    /// Validates the content glob declarations.
    fn validate_content(&self) -> Result<(), ConfigError> {
        if self.content.is_empty() {
            return Err(ConfigError::Invalid(
                "content must declare at least one glob pattern".to_string(),
            ));
        }
        if self.content.len() > MAX_CONTENT_GLOBS {
            return Err(ConfigError::Invalid(format!(
                "content declares more than {MAX_CONTENT_GLOBS} glob patterns"
            )));
        }
        let mut seen = BTreeSet::new();
        for pattern in &self.content {
            if !seen.insert(pattern.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "content declares duplicate glob pattern: {pattern}"
                )));
            }
        }
        Ok(())
    }

    /// Validates the plugin declarations.
    fn validate_plugins(&self) -> Result<(), ConfigError> {
        if self.plugins.len() > MAX_PLUGINS {
            return Err(ConfigError::Invalid(format!(
                "plugins declares more than {MAX_PLUGINS} entries"
            )));
        }
        let mut seen = BTreeSet::new();
        for plugin in &self.plugins {
            if !seen.insert(plugin.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "plugins declares duplicate plugin: {}",
                    plugin.name
                )));
            }
        }
        Ok(())
    }
}

/// Build strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BuildMode {
    /// On-demand compilation: emit only the rules for tokens actually found.
    #[default]
    Jit,
    /// Full scan: emit the complete stylesheet for every known rule.
    Full,
}

impl BuildMode {
    /// Returns the canonical wire name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jit => "jit",
            Self::Full => "full",
        }
    }
}

/// Design-token extension mapping.
///
/// `extend` adds tokens on top of the engine's built-in theme without
/// replacing existing scales. An empty mapping leaves the theme untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Token groups keyed by scale name (for example `colors`, `spacing`).
    #[serde(default)]
    pub extend: BTreeMap<String, TokenValue>,
}

impl ThemeConfig {
    /// Validates the theme extension mapping.
    fn validate(&self) -> Result<(), ConfigError> {
        let mut tokens = 0_usize;
        for (key, value) in &self.extend {
            validate_theme_key(key)?;
            validate_token_value(value, 1, &mut tokens)?;
        }
        Ok(())
    }
}

/// A theme token: a literal value or a nested group of tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    /// A literal token value (for example `#1d4ed8` or `4.5rem`).
    Value(String),
    /// A nested group of tokens (for example `colors.brand.*`).
    Group(BTreeMap<String, TokenValue>),
}

/// A plugin reference with optional plugin-specific options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginConfig {
    /// Plugin identifier.
    pub name: PluginId,
    /// Plugin-specific options blob (opaque to the config layer).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<toml::Value>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a theme group or token key.
fn validate_theme_key(key: &str) -> Result<(), ConfigError> {
    if key.trim().is_empty() {
        return Err(ConfigError::Invalid("theme.extend key must be non-empty".to_string()));
    }
    if key.len() > MAX_THEME_KEY_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "theme.extend key exceeds {MAX_THEME_KEY_LENGTH} bytes"
        )));
    }
    if key.chars().any(char::is_control) {
        return Err(ConfigError::Invalid(
            "theme.extend key must not contain control characters".to_string(),
        ));
    }
    Ok(())
}

/// Validates a theme token value, tracking nesting depth and token count.
fn validate_token_value(
    value: &TokenValue,
    depth: usize,
    tokens: &mut usize,
) -> Result<(), ConfigError> {
    if depth > MAX_THEME_DEPTH {
        return Err(ConfigError::Invalid(format!(
            "theme.extend exceeds nesting depth {MAX_THEME_DEPTH}"
        )));
    }
    match value {
        TokenValue::Value(text) => {
            *tokens += 1;
            if *tokens > MAX_THEME_TOKENS {
                return Err(ConfigError::Invalid(format!(
                    "theme.extend declares more than {MAX_THEME_TOKENS} tokens"
                )));
            }
            if text.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "theme.extend value must be non-empty".to_string(),
                ));
            }
            if text.len() > MAX_THEME_VALUE_LENGTH {
                return Err(ConfigError::Invalid(format!(
                    "theme.extend value exceeds {MAX_THEME_VALUE_LENGTH} bytes"
                )));
            }
            if text.chars().any(char::is_control) {
                return Err(ConfigError::Invalid(
                    "theme.extend value must not contain control characters".to_string(),
                ));
            }
            Ok(())
        }
        TokenValue::Group(entries) => {
            for (key, nested) in entries {
                validate_theme_key(key)?;
                validate_token_value(nested, depth + 1, tokens)?;
            }
            Ok(())
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

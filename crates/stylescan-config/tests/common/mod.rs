// crates/stylescan-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for stylescan-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use stylescan_config::StylescanConfig;

/// A minimal valid `stylescan.toml` declaration.
pub const MINIMAL_TOML: &str = "content = [\"src/**/*.html\"]\n";

/// Parses a TOML string into a `StylescanConfig` for tests.
pub fn config_from_toml(toml_str: &str) -> Result<StylescanConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with a single content glob.
pub fn minimal_config() -> Result<StylescanConfig, toml::de::Error> {
    config_from_toml(MINIMAL_TOML)
}

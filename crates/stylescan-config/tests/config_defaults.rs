//! Config defaults and core validation tests for stylescan-config.
// crates/stylescan-config/tests/config_defaults.rs
// =============================================================================
// Module: Config Defaults and Core Validation Tests
// Description: Validate default behavior and core config invariants.
// Purpose: Ensure minimal config is valid and critical invariants are enforced.
// =============================================================================

use stylescan_config::BuildMode;
use stylescan_config::ConfigError;
use stylescan_config::StylescanConfig;

mod common;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<(), ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(()) => Err("expected invalid config".to_string()),
    }
}

#[test]
fn minimal_config_validates() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    Ok(())
}

#[test]
fn mode_defaults_to_jit() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    if config.mode != BuildMode::Jit {
        return Err("mode should default to jit".to_string());
    }
    Ok(())
}

#[test]
fn theme_and_plugins_default_to_empty() -> TestResult {
    let config = common::minimal_config().map_err(|err| err.to_string())?;
    if !config.theme.extend.is_empty() {
        return Err("theme.extend should default to empty".to_string());
    }
    if !config.plugins.is_empty() {
        return Err("plugins should default to empty".to_string());
    }
    Ok(())
}

#[test]
fn empty_declaration_fails_closed() -> TestResult {
    let config = common::config_from_toml("").map_err(|err| err.to_string())?;
    assert_invalid(config.validate(), "content must declare at least one glob pattern")?;
    Ok(())
}

#[test]
fn default_object_equals_empty_declaration() -> TestResult {
    let parsed = common::config_from_toml("").map_err(|err| err.to_string())?;
    if parsed != StylescanConfig::default() {
        return Err("empty declaration should equal the default object".to_string());
    }
    Ok(())
}

#[test]
fn parsing_the_same_declaration_twice_is_idempotent() -> TestResult {
    let first = common::minimal_config().map_err(|err| err.to_string())?;
    let second = common::minimal_config().map_err(|err| err.to_string())?;
    if first != second {
        return Err("re-parsing the same declaration must yield equal objects".to_string());
    }
    let first_digest = first.fingerprint().map_err(|err| err.to_string())?;
    let second_digest = second.fingerprint().map_err(|err| err.to_string())?;
    if first_digest != second_digest {
        return Err("equal declarations must produce equal fingerprints".to_string());
    }
    Ok(())
}

#[test]
fn declaration_order_of_content_is_preserved() -> TestResult {
    let config = common::config_from_toml(
        "content = [\"b/**/*.html\", \"a/**/*.html\"]\n",
    )
    .map_err(|err| err.to_string())?;
    let patterns: Vec<&str> = config.content.iter().map(|pattern| pattern.as_str()).collect();
    if patterns != ["b/**/*.html", "a/**/*.html"] {
        return Err("content order must be preserved as declared".to_string());
    }
    Ok(())
}

#[test]
fn example_declaration_loads_and_validates() -> TestResult {
    let config = common::config_from_toml(&stylescan_config::config_toml_example())
        .map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    if config.mode != BuildMode::Jit {
        return Err("example should declare jit mode".to_string());
    }
    if config.content.len() != 5 {
        return Err("example should carry the five canonical content globs".to_string());
    }
    Ok(())
}

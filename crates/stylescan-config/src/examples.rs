// crates/stylescan-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical examples for Stylescan configuration. Outputs are deterministic
//! and kept in sync with schema and docs by the config test suites.

/// Returns a canonical example `stylescan.toml` configuration.
#[must_use]
pub fn config_toml_example() -> String {
    String::from(
        r##"mode = "jit"

content = [
    "./internal/templates/**/*.templ",
    "./internal/templates/*.templ",
    "./internal/templates/*.go",
    "./internal/templates/**/*.go",
    "./internal/templates/*/*.go",
]

[theme.extend.colors]
brand = "#1d4ed8"
surface = "#f8fafc"

[theme.extend.spacing]
"18" = "4.5rem"

[[plugins]]
name = "typography"
options = { rhythm = "relaxed" }
"##,
    )
}

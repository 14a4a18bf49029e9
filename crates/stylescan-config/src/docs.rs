// crates/stylescan-config/src/docs.rs
// ============================================================================
// Module: Config Docs Generator
// Description: Markdown generator for stylescan.toml documentation.
// Purpose: Keep config docs in sync with schema and validation.
// Dependencies: serde_json, std
// ============================================================================

//! ## Overview
//! Generates the `stylescan.toml` reference from the canonical configuration
//! schema. The output is deterministic: the same schema always renders the
//! same document, and `verify_config_docs` detects drift between the
//! generated output and a file on disk.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::schema::config_schema;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default output path for generated configuration docs.
const DOCS_PATH: &str = "Docs/configuration/stylescan.toml.md";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when generating or verifying config docs.
#[derive(Debug, Error)]
pub enum DocsError {
    /// IO failure while writing docs.
    #[error("docs io error: {0}")]
    Io(String),
    /// Schema traversal or rendering error.
    #[error("docs schema error: {0}")]
    Schema(String),
    /// Generated docs do not match the committed file.
    #[error("docs drift: {0}")]
    Drift(String),
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Generates the configuration markdown documentation.
///
/// # Errors
///
/// Returns [`DocsError`] when schema traversal fails.
pub fn config_docs_markdown() -> Result<String, DocsError> {
    let schema = config_schema();
    let mut out = String::new();

    out.push_str("<!--\n");
    out.push_str("Docs/configuration/stylescan.toml.md\n");
    out.push_str("============================================================================\n");
    out.push_str("Document: Stylescan Configuration\n");
    out.push_str("Description: Reference for stylescan.toml configuration fields.\n");
    out.push_str("Purpose: Document the mode, content, theme, and plugins declarations.\n");
    out.push_str("Generated: This file is auto-generated; do not edit manually.\n");
    out.push_str("============================================================================\n");
    out.push_str("-->\n\n");

    out.push_str("# stylescan.toml Configuration\n\n");
    out.push_str("## Overview\n\n");
    out.push_str("`stylescan.toml` declares what the Stylescan engine scans and how it\n");
    out.push_str("builds: the build mode, the content globs searched for utility-class\n");
    out.push_str("tokens, design-token extensions, and plugin references. The declaration\n");
    out.push_str("is validated on load and fails closed on errors.\n\n");

    out.push_str("## Top-Level Sections\n\n");

    for section in build_sections() {
        out.push_str("### ");
        out.push_str(section.heading);
        out.push_str("\n\n");
        if !section.description.is_empty() {
            out.push_str(section.description);
            out.push_str("\n\n");
        }
        let table = render_table(&schema, &section).map_err(DocsError::Schema)?;
        out.push_str(&table);
        out.push('\n');
    }

    Ok(out)
}

/// Writes the generated docs to the given path (default: repository docs).
///
/// # Errors
///
/// Returns [`DocsError`] when rendering or writing fails.
pub fn write_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let rendered = config_docs_markdown()?;
    let target = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|err| DocsError::Io(err.to_string()))?;
    }
    fs::write(target, rendered).map_err(|err| DocsError::Io(err.to_string()))
}

/// Verifies that the docs at the given path match the generated output.
///
/// # Errors
///
/// Returns [`DocsError::Drift`] when the file differs from the generated
/// output, and [`DocsError::Io`] when the file cannot be read.
pub fn verify_config_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let rendered = config_docs_markdown()?;
    let target = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let committed = fs::read_to_string(target).map_err(|err| DocsError::Io(err.to_string()))?;
    if committed != rendered {
        return Err(DocsError::Drift(format!(
            "{} differs from generated output; re-run the docs writer",
            target.display()
        )));
    }
    Ok(())
}

// ============================================================================
// SECTION: Section Specs
// ============================================================================

/// A documented field row, addressed by JSON pointer into the schema.
struct RowSpec {
    /// Field name as shown in the table.
    field: &'static str,
    /// JSON pointer to the field's schema.
    pointer: &'static str,
}

/// A top-level documentation section.
struct SectionSpec {
    /// Section heading.
    heading: &'static str,
    /// Prose description rendered above the table.
    description: &'static str,
    /// Field rows rendered into the table.
    rows: &'static [RowSpec],
}

/// Returns the documented sections in declaration order.
fn build_sections() -> Vec<SectionSpec> {
    vec![
        SectionSpec {
            heading: "mode",
            description: "Build strategy selector. `jit` emits only the rules for tokens \
                          actually observed in scanned content; `full` emits the complete \
                          stylesheet.",
            rows: &[RowSpec {
                field: "mode",
                pointer: "/properties/mode",
            }],
        },
        SectionSpec {
            heading: "content",
            description: "Glob patterns naming the files the engine scans. Patterns resolve \
                          relative to the project root; order is irrelevant because matches \
                          are unioned.",
            rows: &[RowSpec {
                field: "content",
                pointer: "/properties/content",
            }],
        },
        SectionSpec {
            heading: "theme",
            description: "Design-token extensions merged over the engine's built-in theme.",
            rows: &[RowSpec {
                field: "theme.extend",
                pointer: "/properties/theme/properties/extend",
            }],
        },
        SectionSpec {
            heading: "plugins",
            description: "Ordered plugin references, each with an optional options blob.",
            rows: &[
                RowSpec {
                    field: "plugins[].name",
                    pointer: "/properties/plugins/items/properties/name",
                },
                RowSpec {
                    field: "plugins[].options",
                    pointer: "/properties/plugins/items/properties/options",
                },
            ],
        },
    ]
}

// ============================================================================
// SECTION: Rendering Helpers
// ============================================================================

/// Renders a section's field table from the schema.
fn render_table(schema: &Value, section: &SectionSpec) -> Result<String, String> {
    let mut out = String::new();
    out.push_str("| Field | Type | Default | Description |\n");
    out.push_str("|---|---|---|---|\n");
    for row in section.rows {
        let field_schema = schema
            .pointer(row.pointer)
            .ok_or_else(|| format!("missing schema node at {}", row.pointer))?;
        let kind = format_schema_type(field_schema);
        let default =
            field_schema.get("default").map_or_else(|| "-".to_string(), format_default_value);
        let description = field_schema
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default();
        writeln!(
            out,
            "| `{}` | {} | {} | {} |",
            row.field,
            escape_table_cell(&kind),
            escape_table_cell(&default),
            escape_table_cell(description)
        )
        .map_err(|err| err.to_string())?;
    }
    Ok(out)
}

/// Formats the type cell for a schema node.
fn format_schema_type(schema: &Value) -> String {
    if let Some(values) = schema.get("enum").and_then(Value::as_array) {
        let names: Vec<String> = values.iter().map(format_default_value).collect();
        return format!("enum({})", names.join(" \\| "));
    }
    match schema.get("type") {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Array(names)) => {
            let parts: Vec<&str> = names.iter().filter_map(Value::as_str).collect();
            parts.join(" \\| ")
        }
        _ => "object".to_string(),
    }
}

/// Formats a default value for display in a table cell.
fn format_default_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Escapes pipe characters inside a table cell.
fn escape_table_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

// ============================================================================
// SECTION: Tests
// ============================================================================

// crates/stylescan-cli/src/main.rs
// ============================================================================
// Module: Stylescan CLI Entry Point
// Description: Command dispatcher for Stylescan configuration tooling.
// Purpose: Validate declarations and render derived config artifacts.
// Dependencies: clap, serde_json, stylescan-config, thiserror
// ============================================================================

//! ## Overview
//! The Stylescan CLI loads, checks, and renders the `stylescan.toml`
//! declaration and its derived artifacts (fingerprint, schema, example,
//! docs). It performs no content scanning and no CSS generation; those
//! belong to the engine that consumes the declaration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use stylescan_config::StylescanConfig;
use stylescan_config::config_schema;
use stylescan_config::config_toml_example;
use stylescan_config::verify_config_docs;
use stylescan_config::write_config_docs;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// Stylescan configuration tooling.
#[derive(Parser, Debug)]
#[command(name = "stylescan", version, about = "Stylescan configuration tooling")]
struct Cli {
    /// Selected top-level command.
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration inspection and artifact generation.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a Stylescan configuration file.
    Validate(ConfigPathArgs),
    /// Print the canonical fingerprint of a configuration file.
    Fingerprint(ConfigPathArgs),
    /// Print the JSON schema for stylescan.toml.
    Schema,
    /// Print the canonical example stylescan.toml.
    Example,
    /// Generate or verify the configuration reference docs.
    Docs {
        /// Selected docs subcommand.
        #[command(subcommand)]
        command: DocsCommand,
    },
}

/// Arguments selecting a configuration file.
#[derive(Args, Debug)]
struct ConfigPathArgs {
    /// Path to the configuration file (defaults to ./stylescan.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Docs subcommands.
#[derive(Subcommand, Debug)]
enum DocsCommand {
    /// Write the generated configuration reference.
    Write(DocsWriteArgs),
    /// Verify the configuration reference matches the generated output.
    Verify(DocsVerifyArgs),
}

/// Arguments for `config docs write`.
#[derive(Args, Debug)]
struct DocsWriteArgs {
    /// Output path (defaults to Docs/configuration/stylescan.toml.md).
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Arguments for `config docs verify`.
#[derive(Args, Debug)]
struct DocsVerifyArgs {
    /// Docs path (defaults to Docs/configuration/stylescan.toml.md).
    #[arg(long)]
    path: Option<PathBuf>,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI execution error carrying a user-facing message.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// User-facing failure message.
    message: String,
}

impl CliError {
    /// Creates a CLI error from a message.
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result alias for CLI command handlers.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// Binary entry point.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Config {
            command,
        } => command_config(command),
    }
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(args) => command_config_validate(&args),
        ConfigCommand::Fingerprint(args) => command_config_fingerprint(&args),
        ConfigCommand::Schema => command_config_schema(),
        ConfigCommand::Example => command_config_example(),
        ConfigCommand::Docs {
            command,
        } => match command {
            DocsCommand::Write(args) => command_config_docs_write(&args),
            DocsCommand::Verify(args) => command_config_docs_verify(&args),
        },
    }
}

/// Executes the config validation command.
fn command_config_validate(args: &ConfigPathArgs) -> CliResult<ExitCode> {
    let _config = load_config(args)?;
    write_stdout_line("configuration is valid")?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the config fingerprint command.
fn command_config_fingerprint(args: &ConfigPathArgs) -> CliResult<ExitCode> {
    let config = load_config(args)?;
    let digest = config
        .fingerprint()
        .map_err(|err| CliError::new(format!("fingerprint failed: {err}")))?;
    write_stdout_line(&digest.to_string())?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the configuration JSON schema.
fn command_config_schema() -> CliResult<ExitCode> {
    let rendered = serde_json::to_string_pretty(&config_schema())
        .map_err(|err| CliError::new(format!("schema rendering failed: {err}")))?;
    write_stdout_line(&rendered)?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the canonical example configuration.
fn command_config_example() -> CliResult<ExitCode> {
    write_stdout_line(config_toml_example().trim_end())?;
    Ok(ExitCode::SUCCESS)
}

/// Writes the generated configuration docs.
fn command_config_docs_write(args: &DocsWriteArgs) -> CliResult<ExitCode> {
    write_config_docs(args.out.as_deref())
        .map_err(|err| CliError::new(format!("docs write failed: {err}")))?;
    write_stdout_line("configuration docs written")?;
    Ok(ExitCode::SUCCESS)
}

/// Verifies the configuration docs against the generated output.
fn command_config_docs_verify(args: &DocsVerifyArgs) -> CliResult<ExitCode> {
    verify_config_docs(args.path.as_deref())
        .map_err(|err| CliError::new(format!("docs verify failed: {err}")))?;
    write_stdout_line("configuration docs are up to date")?;
    Ok(ExitCode::SUCCESS)
}

/// Loads the configuration named by the command arguments.
fn load_config(args: &ConfigPathArgs) -> CliResult<StylescanConfig> {
    StylescanConfig::load(args.config.as_deref())
        .map_err(|err| CliError::new(format!("configuration rejected: {err}")))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a line to stdout without the denied print macros.
fn write_stdout_line(message: &str) -> CliResult<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{message}").map_err(|err| CliError::new(format!("stdout error: {err}")))
}

/// Reports a failure on stderr and returns a failing exit code.
fn emit_error(message: &str) -> ExitCode {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle, "error: {message}");
    ExitCode::FAILURE
}

// ============================================================================
// SECTION: Tests
// ============================================================================

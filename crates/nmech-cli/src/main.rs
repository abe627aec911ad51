//! # nmech CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nmech_cli::example::{run_example, ExampleArgs};
use nmech_cli::render::{run_render, RenderArgs};
use nmech_cli::schema::{run_schema, SchemaArgs};
use nmech_cli::validate::{run_validate, ValidateArgs};
use nmech_cli::CliConfig;

/// NeuroMech model documents.
///
/// Builds the Mujoco and NeuroMech example documents, renders documents to
/// JSON, XML and YAML, validates documents and prints their JSON Schemas.
#[derive(Parser, Debug)]
#[command(name = "nmech", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output directory for rendered documents.
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build an example document and write it in every format.
    Example(ExampleArgs),

    /// Re-render a JSON or YAML document.
    Render(RenderArgs),

    /// Validate a JSON or YAML document.
    Validate(ValidateArgs),

    /// Print the JSON Schema of a document model.
    Schema(SchemaArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("nmech CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = CliConfig::load(cli.config.as_deref()).and_then(|config| {
        let output_dir = cli.output_dir.as_deref();
        match &cli.command {
            Commands::Example(args) => run_example(args, &config.resolve(output_dir, &args.format)),
            Commands::Render(args) => run_render(args, &config.resolve(output_dir, &args.format)),
            Commands::Validate(args) => run_validate(args),
            Commands::Schema(args) => run_schema(args, &config.resolve(output_dir, &[])),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

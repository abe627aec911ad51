//! # Schema Subcommand
//!
//! Prints the generated JSON Schema of a document model, optionally also
//! writing it to `<output_dir>/<name>.schema.json`.

use anyhow::{Context, Result};
use clap::Args;

use crate::{ModelKind, Settings};

/// Arguments for the `nmech schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Document model whose schema to print.
    #[arg(long, value_enum)]
    pub kind: ModelKind,

    /// Also write the schema into the output directory.
    #[arg(long)]
    pub write: bool,
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs, settings: &Settings) -> Result<u8> {
    let spec = args.kind.root_spec();
    let schema = nmech_schema::schema_for(spec);
    let text = serde_json::to_string_pretty(&schema)?;
    println!("{text}");

    if args.write {
        std::fs::create_dir_all(&settings.output_dir)?;
        let path = settings.output_dir.join(nmech_schema::schema_name(spec));
        std::fs::write(&path, format!("{text}\n"))
            .with_context(|| format!("cannot write {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote schema");
    }
    Ok(0)
}

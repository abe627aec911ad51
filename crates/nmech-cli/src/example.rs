//! # Example Subcommand
//!
//! Builds one of the example documents, writes it in every requested
//! format and prints the full document as YAML.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use nmech_core::{Document, Format};

use crate::{ModelKind, Settings};

/// Arguments for the `nmech example` subcommand.
#[derive(Args, Debug)]
pub struct ExampleArgs {
    /// Which example document to build.
    #[arg(value_enum)]
    pub kind: ModelKind,

    /// Formats to write (comma-separated). Defaults to the configured formats.
    #[arg(long, value_delimiter = ',')]
    pub format: Vec<Format>,
}

/// Execute the example subcommand.
pub fn run_example(args: &ExampleArgs, settings: &Settings) -> Result<u8> {
    match args.kind {
        ModelKind::Mujoco => emit(&nmech_mujoco::example_document(), settings),
        ModelKind::Neuromech => emit(&nmech_neuromech::example_document(), settings),
    }?;
    Ok(0)
}

/// Write `doc` in every configured format, then print it as YAML.
pub fn emit<D: Document>(doc: &D, settings: &Settings) -> Result<Vec<PathBuf>> {
    let written = nmech_render::write_document(doc, &settings.output_dir, &settings.formats, &settings.render)
        .with_context(|| format!("failed to write document '{}'", doc.id()))?;
    for path in &written {
        println!("Written: {}", path.display());
    }

    println!(" >> Full document details in YAML format:\n");
    println!("{}", nmech_render::to_yaml(doc)?);
    Ok(written)
}

//! # Render Subcommand
//!
//! Loads a JSON or YAML document and writes it in the requested formats,
//! named after the document identifier.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use nmech_core::{Document, Format};

use crate::{ModelKind, Settings};

/// Arguments for the `nmech render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Document to render (.json, .yaml or .yml).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Document model of the input.
    #[arg(long, value_enum)]
    pub kind: ModelKind,

    /// Formats to write (comma-separated). Defaults to the configured formats.
    #[arg(long, value_delimiter = ',')]
    pub format: Vec<Format>,
}

/// Execute the render subcommand.
pub fn run_render(args: &RenderArgs, settings: &Settings) -> Result<u8> {
    let written = match args.kind {
        ModelKind::Mujoco => rerender::<nmech_mujoco::Mujoco>(&args.path, settings),
        ModelKind::Neuromech => rerender::<nmech_neuromech::NeuroMech>(&args.path, settings),
    }?;
    for path in &written {
        println!("Written: {}", path.display());
    }
    Ok(0)
}

fn rerender<D: Document>(path: &Path, settings: &Settings) -> Result<Vec<PathBuf>> {
    let doc: D = nmech_render::load_document(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    tracing::info!(id = doc.id(), formats = settings.formats.len(), "rendering document");
    let written = nmech_render::write_document(&doc, &settings.output_dir, &settings.formats, &settings.render)?;
    Ok(written)
}

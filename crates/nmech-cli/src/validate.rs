//! # Validate Subcommand
//!
//! Validates a JSON or YAML document in two passes: the generated JSON
//! Schema (reports every violation), then checked construction of the
//! typed document (reports the first missing, mistyped or unknown field).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use nmech_core::Record;
use nmech_schema::{DocumentValidator, SchemaValidationError};

use crate::ModelKind;

/// Arguments for the `nmech validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Document to validate (.json, .yaml or .yml).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Document model of the input.
    #[arg(long, value_enum)]
    pub kind: ModelKind,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 when the document is valid, 1 otherwise.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let validator = DocumentValidator::new(args.kind.root_spec())
        .context("failed to compile document schema")?;

    match validator.validate_file(&args.path) {
        Ok(()) => {}
        Err(SchemaValidationError::ValidationFailed { violations, .. }) => {
            println!("FAIL: {} ({} violation(s))", args.path.display(), violations.len());
            println!("{violations}");
            return Ok(1);
        }
        Err(e) => {
            return Err(anyhow::Error::new(e).context(format!("cannot validate {}", args.path.display())));
        }
    }

    let constructed = match args.kind {
        ModelKind::Mujoco => construct::<nmech_mujoco::Mujoco>(&args.path),
        ModelKind::Neuromech => construct::<nmech_neuromech::NeuroMech>(&args.path),
    };
    match constructed {
        Ok(()) => {
            println!("OK: {} is a valid {} document", args.path.display(), args.kind);
            Ok(0)
        }
        Err(e) => {
            println!("FAIL: {}: {e}", args.path.display());
            Ok(1)
        }
    }
}

fn construct<R: Record>(path: &Path) -> Result<(), nmech_core::DocumentError> {
    nmech_core::read_record::<R>(path).map(|_| ())
}

//! # nmech-cli — Command-Line Interface
//!
//! Provides the `nmech` command:
//!
//! - `nmech example <mujoco|neuromech>` — build the example document, write
//!   `<id>.json`, `<id>.xml`, `<id>.yaml`, and print it as YAML.
//! - `nmech render <PATH> --kind <KIND>` — load a JSON/YAML document and
//!   write it in the requested formats.
//! - `nmech validate <PATH> --kind <KIND>` — JSON Schema validation
//!   followed by checked construction.
//! - `nmech schema --kind <KIND>` — print the generated JSON Schema.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the handlers.
//! - Handlers delegate to the model, render and schema crates.
//! - Handlers return an exit code: 0 on success, 1 on validation failure.

pub mod config;
pub mod example;
pub mod render;
pub mod schema;
pub mod validate;

use std::fmt;

use clap::ValueEnum;
use nmech_core::RecordSpec;

pub use config::{CliConfig, Settings};

/// The document models the CLI knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelKind {
    /// Mujoco scene description.
    Mujoco,
    /// NeuroMech anatomical description.
    Neuromech,
}

impl ModelKind {
    /// Descriptor of the document root.
    pub fn root_spec(self) -> &'static RecordSpec {
        match self {
            Self::Mujoco => &nmech_mujoco::MUJOCO,
            Self::Neuromech => &nmech_neuromech::NEUROMECH,
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.root_spec().name)
    }
}

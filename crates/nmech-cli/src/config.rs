//! # CLI Configuration
//!
//! Optional YAML configuration file (`--config`). Command-line flags take
//! precedence over file values; file values take precedence over defaults.
//!
//! ```yaml
//! output_dir: build/models
//! formats: [json, yaml]
//! indent: 2
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nmech_core::Format;
use nmech_render::RenderOptions;
use serde::{Deserialize, Serialize};

/// Contents of the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Directory rendered documents are written to.
    pub output_dir: PathBuf,
    /// Formats written when `--format` is not given.
    pub formats: Vec<Format>,
    /// Spaces per indentation level in JSON and XML output.
    pub indent: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            formats: Format::ALL.to_vec(),
            indent: RenderOptions::default().indent,
        }
    }
}

impl CliConfig {
    /// Load the configuration file, or the defaults when none is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Resolve effective settings, letting command-line values win.
    pub fn resolve(&self, output_dir: Option<&Path>, formats: &[Format]) -> Settings {
        let mut formats = if formats.is_empty() {
            self.formats.clone()
        } else {
            formats.to_vec()
        };
        formats.sort();
        formats.dedup();
        Settings {
            output_dir: output_dir.map_or_else(|| self.output_dir.clone(), Path::to_path_buf),
            formats,
            render: RenderOptions { indent: self.indent },
        }
    }
}

/// Effective settings for one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub formats: Vec<Format>,
    pub render: RenderOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CliConfig::default().resolve(None, &[]);
        assert_eq!(settings.output_dir, PathBuf::from("."));
        assert_eq!(settings.formats, Format::ALL.to_vec());
        assert_eq!(settings.render.indent, 4);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: CliConfig = serde_yaml::from_str("indent: 2\n").unwrap();
        assert_eq!(config.indent, 2);
        assert_eq!(config.formats, Format::ALL.to_vec());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(serde_yaml::from_str::<CliConfig>("colour: red\n").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let config: CliConfig =
            serde_yaml::from_str("output_dir: from-file\nformats: [xml]\n").unwrap();
        let settings = config.resolve(Some(Path::new("from-flag")), &[Format::Yaml, Format::Json]);
        assert_eq!(settings.output_dir, PathBuf::from("from-flag"));
        assert_eq!(settings.formats, vec![Format::Json, Format::Yaml]);

        let settings = config.resolve(None, &[]);
        assert_eq!(settings.output_dir, PathBuf::from("from-file"));
        assert_eq!(settings.formats, vec![Format::Xml]);
    }

    #[test]
    fn test_repeated_formats_collapse() {
        let settings = CliConfig::default().resolve(None, &[Format::Json, Format::Json]);
        assert_eq!(settings.formats, vec![Format::Json]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/nmech.yaml"))).unwrap_err();
        assert!(err.to_string().contains("cannot read config file"));
    }
}

//! Configuration module

use crate::error::CliError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Detection configuration
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Rendering configuration used by the filter command
    #[serde(default)]
    pub rendering: RenderingConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;

        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))
    }

    /// Load the file if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

/// Detection-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct DetectionConfig {
    /// Expected locales; empty expects every currency
    pub locales: Vec<String>,

    /// Skip placeholder tokens such as `9990000000001999`
    pub placeholders: bool,

    /// Symbol => locale used when a symbol is shared by several currencies
    pub symbol_defaults: BTreeMap<String, String>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Rendering-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RenderingConfig {
    /// preserve, symbol, name or preferred
    pub symbol_mode: Option<String>,

    /// text, html or a literal replacement
    pub glyph: Option<String>,
}

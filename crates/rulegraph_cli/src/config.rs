//! CLI configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use jsonc_parser::ParseOptions;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

/// Settings read from `.rulegraph.jsonc` / `.rulegraph.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Output format used when `--format` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Node limit used when `--limit` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl CliConfig {
    /// Config file names, in discovery order.
    pub const CONFIG_FILES: &'static [&'static str] = &[".rulegraph.jsonc", ".rulegraph.json"];

    /// Renders the settings as a config file, headed by a comment listing the
    /// accepted keys.
    pub fn to_jsonc(&self) -> Result<String> {
        let body = serde_json::to_string_pretty(self).into_diagnostic()?;
        Ok(format!(
            "// rulegraph settings: \"format\" (\"text\" | \"json\"), \"limit\" (node count)\n{body}\n"
        ))
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config: {}", path.display()))?;

        Self::from_jsonc(&content)
            .wrap_err_with(|| format!("Invalid config: {}", path.display()))
    }

    /// Parses configuration from JSON or JSONC text. An empty document yields
    /// the defaults.
    pub fn from_jsonc(content: &str) -> Result<Self> {
        let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
            .map_err(|e| miette::miette!("{}", e))?;

        match value {
            Some(value) => serde_json::from_value(value).into_diagnostic(),
            None => Ok(Self::default()),
        }
    }

    /// Returns the first config file present in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}

//! Configuration management for SMPTE 12M tools

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use smpte12m_core::FrameRate;
use std::path::Path;

/// Settings shared by the `tc` subcommands. Command line flags win over
/// anything loaded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Rate used when neither `--rate` nor an `@rate` suffix is given
    pub default_rate: FrameRate,
    /// Rates `tc demo` runs at
    pub demo_rates: Vec<FrameRate>,
    /// Log level used when no `--verbose` or `--debug` flag is given
    pub log_level: Option<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            default_rate: FrameRate::Smpte2997NonDrop,
            demo_rates: vec![FrameRate::Smpte2997NonDrop, FrameRate::Smpte30],
            log_level: None,
        }
    }
}

impl ToolConfig {
    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        let config: Self = toml::from_str(&content)
            .context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    /// Load from `path` if one was given, otherwise use the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::output::OutputFormat;

const FORMAT_ENV: &str = "CRONFORM_FORMAT";
const LOG_ENV: &str = "CRONFORM_LOG";

/// CLI configuration loaded from TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Default output format (text, json)
    #[serde(default)]
    pub format: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Return the default config directory path: ~/.config/cronform/
    pub fn default_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("could not determine user config directory")?
            .join("cronform");
        Ok(config_dir)
    }

    /// Return the default config file path.
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.toml"))
    }

    /// Load config from the given path, or the default path, then apply
    /// `CRONFORM_*` environment overrides.
    /// Returns default config if the file does not exist.
    ///
    /// Nothing is logged here: the log filter comes from this config, so the
    /// caller installs the subscriber first and then calls
    /// [`LoadedConfig::log`].
    pub fn load(path: Option<&str>) -> Result<LoadedConfig> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        let found = path.exists();
        let mut config = if found {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        } else {
            Self::default()
        };

        let ignored = config.apply_overrides(|key| std::env::var(key).ok());
        Ok(LoadedConfig {
            config,
            path,
            found,
            ignored,
        })
    }

    /// Override file values from a key lookup (the environment, in practice).
    /// Empty values are skipped. Unknown formats are left out and returned
    /// as `(variable, value)` pairs.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Vec<(&'static str, String)> {
        let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut ignored = Vec::new();

        if let Some(raw) = lookup(FORMAT_ENV) {
            match OutputFormat::from_str(&raw, true) {
                Ok(format) => self.format = format,
                Err(_) => ignored.push((FORMAT_ENV, raw)),
            }
        }
        if let Some(level) = lookup(LOG_ENV) {
            self.log_level = level;
        }
        ignored
    }

    /// Resolve the output format.
    /// Priority: cli_override > env var > config file.
    pub fn resolve_format(&self, cli_override: Option<OutputFormat>) -> OutputFormat {
        cli_override.unwrap_or(self.format)
    }
}

/// A loaded [`CliConfig`] plus what happened while loading it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: CliConfig,
    pub path: PathBuf,
    /// Whether `path` existed; defaults were used otherwise.
    pub found: bool,
    /// Environment overrides that were not applied.
    pub ignored: Vec<(&'static str, String)>,
}

impl LoadedConfig {
    /// Emit the load diagnostics. Call once tracing is installed.
    pub fn log(&self) {
        let config_path = &self.path;
        if self.found {
            debug!(?config_path, "Loaded config");
        } else {
            debug!(?config_path, "Config file not found, using defaults");
        }
        for (key, value) in &self.ignored {
            warn!(%value, "ignoring unknown {key}");
        }
    }
}

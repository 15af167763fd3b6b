//! User configuration (`~/.davos/config.toml`).
//!
//! ```toml
//! installer = ["python", "-m", "pip"]
//! show_stdout = true
//! ```

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

/// Settings read from the config file. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Installer argv prefix; `install <specs...>` is appended.
    pub installer: Vec<String>,
    /// Override for showing installer stdout on failure.
    pub show_stdout: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            installer: vec!["pip".to_string()],
            show_stdout: None,
        }
    }
}

impl Config {
    /// Load from the davos home, falling back to defaults if there is no file.
    pub fn load() -> Result<Self> {
        match davos_core::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse config file contents.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        if config.installer.first().is_none_or(|p| p.trim().is_empty()) {
            bail!("`installer` must name at least one program");
        }
        Ok(config)
    }
}

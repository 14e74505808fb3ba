// ABOUTME: Configuration loading for the terminal shell.
// ABOUTME: Reads ~/.terminal/config.toml, falling back to defaults for every missing field.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub shell: ShellConfig,
    pub log: LogConfig,
}

/// Behaviour of the interactive session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Print the welcome banner on start.
    pub banner: bool,
    /// Line count used by head/tail when none is given.
    pub default_lines: usize,
    /// Minimum column width for names in `ls` output.
    pub name_width: usize,
    /// Keep the process working directory in step with `cd`.
    pub sync_process_dir: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            banner: true,
            default_lines: 10,
            name_width: 20,
            sync_process_dir: true,
        }
    }
}

/// Command log settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load config from ~/.terminal/config.toml, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load config from an explicit path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Base directory for all terminal state.
    pub fn base_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".terminal")
    }

    /// Path to the config file.
    pub fn config_path() -> PathBuf {
        Self::base_dir().join("config.toml")
    }

    /// Directory that command logs are written under.
    pub fn log_dir(&self) -> PathBuf {
        self.log
            .dir
            .clone()
            .unwrap_or_else(|| Self::base_dir().join("logs"))
    }
}

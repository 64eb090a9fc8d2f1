//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directory name used under the platform config, data and picture dirs.
const APP_DIR: &str = "photojournal";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default journal directory
    pub dir: Option<PathBuf>,

    /// Directory that `save` copies images into
    pub library_dir: Option<PathBuf>,

    /// Command that `share` runs with the image path appended
    pub share_command: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/photojournal/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Resolve the journal directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Platform data directory (`~/.local/share/photojournal`)
    /// 4. Current working directory
    pub fn journal_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the media library directory.
    ///
    /// Precedence order:
    /// 1. CLI `--to` argument
    /// 2. Config file `library_dir` setting
    /// 3. Platform picture directory (`~/Pictures/photojournal`)
    /// 4. `library/` inside the journal directory
    pub fn library_dir(&self, cli_to: Option<&PathBuf>, journal_dir: &Path) -> PathBuf {
        cli_to
            .cloned()
            .or_else(|| self.library_dir.clone())
            .or_else(|| dirs::picture_dir().map(|d| d.join(APP_DIR)))
            .unwrap_or_else(|| journal_dir.join("library"))
    }

    /// Resolve the share command. `None` means sharing is unavailable.
    pub fn share_command(&self, cli_with: Option<&str>) -> Option<String> {
        cli_with
            .map(str::to_string)
            .or_else(|| self.share_command.clone())
    }
}

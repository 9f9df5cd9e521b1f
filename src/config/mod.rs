//! Configuration management for Flashdeck

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Selected theme name
    pub theme: String,

    /// Custom theme overrides (if any)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<Theme>,

    /// Vim mode enabled (h/l navigate alongside the arrow keys)
    pub vim_mode: bool,

    /// Text-to-speech program and leading arguments; the card front is
    /// appended as the last argument
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech_command: Option<Vec<String>>,

    /// Override for the card store location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Tokyo Night".to_string(),
            custom_theme: None,
            vim_mode: true,
            speech_command: None,
            data_file: None,
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it if missing
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "flashdeck").context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "flashdeck").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Get the card store path
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::data_dir()?.join("store.json")),
        }
    }

    /// Get the log file path used while the TUI owns the terminal
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("flashdeck.log"))
    }

    /// Get the active theme
    pub fn active_theme(&self) -> Theme {
        self.custom_theme.clone().unwrap_or_else(|| Theme::by_name(&self.theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_tokyo_night_theme() {
        let config = Config::default();
        assert_eq!(config.theme, "Tokyo Night");
    }

    #[test]
    fn default_config_has_no_speech() {
        assert!(Config::default().speech_command.is_none());
    }

    #[test]
    fn config_deserializes_from_json() {
        let json = r#"{"theme":"Custom","vim_mode":false,"speech_command":["espeak","-v","ko"]}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.theme, "Custom");
        assert!(!config.vim_mode);
        assert_eq!(config.speech_command.unwrap(), vec!["espeak", "-v", "ko"]);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn load_creates_default_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cfg").join("config.json");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, "Tokyo Night");
        assert!(config.vim_mode);
        assert!(path.exists());
    }

    #[test]
    fn data_file_override_wins() {
        let config =
            Config { data_file: Some(PathBuf::from("/tmp/deck.json")), ..Default::default() };
        assert_eq!(config.store_path().unwrap(), PathBuf::from("/tmp/deck.json"));
    }
}

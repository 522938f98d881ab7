//! Configuration for the lemonade tool itself
//!
//! This is not the emulator's settings store (see [`crate::settings`]);
//! it only tells the tool where the user directory is and how to log.

use crate::error::Result;
use crate::paths::{UserDirectory, APP_DIR_NAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Directory holding `config/`, `GameSettings/` and `cheats/`
    pub user_dir: PathBuf,
    /// Directory of bundled `<ID>.txt` cheat lists used when a title has
    /// no cheat file yet
    pub builtin_cheats_dir: Option<PathBuf>,
    pub log_level: LogLevel,
}

/// Logging level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            user_dir: UserDirectory::platform_default().root().to_path_buf(),
            builtin_cheats_dir: None,
            log_level: LogLevel::default(),
        }
    }
}

impl ToolConfig {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        match crate::fs::read_text(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.is_not_found() => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        crate::fs::write_text(path, &content)
    }

    /// Get the path to the configuration file
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join("lemonade.toml")
    }

    pub fn user_directory(&self) -> UserDirectory {
        UserDirectory::new(&self.user_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ToolConfig::default();
        assert!(config.user_dir.ends_with(APP_DIR_NAME));
        assert!(config.builtin_cheats_dir.is_none());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_config_serialization() {
        let config = ToolConfig {
            user_dir: PathBuf::from("/srv/lemonade"),
            builtin_cheats_dir: Some(PathBuf::from("/usr/share/lemonade/cheats")),
            log_level: LogLevel::Debug,
        };
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("log_level = \"debug\""));
        let parsed: ToolConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: ToolConfig = toml::from_str("log_level = \"warn\"\n").unwrap();
        assert_eq!(parsed.log_level, LogLevel::Warn);
        assert!(parsed.user_dir.ends_with(APP_DIR_NAME));
    }

    #[test]
    fn test_load_missing_and_save() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("lemonade.toml");

        let config = ToolConfig::load_from(&path).unwrap();
        assert_eq!(config, ToolConfig::default());

        let config = ToolConfig {
            log_level: LogLevel::Trace,
            ..ToolConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(ToolConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lemonade.toml");
        std::fs::write(&path, "log_level = [").unwrap();
        assert!(matches!(ToolConfig::load_from(&path), Err(crate::Error::Config(_))));
    }
}

//! User directory layout
//!
//! Everything the front-end and the native core share lives under one
//! user directory:
//!
//! - `config/<name>.ini` global settings files
//! - `GameSettings/<ID>.ini` per-title overrides
//! - `cheats/<ID>.txt` cheat lists

use crate::program_id::ProgramId;
use std::path::{Path, PathBuf};

/// Name of the user directory below the platform data directory
pub const APP_DIR_NAME: &str = "lemonade";

/// Resolved paths below a user directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirectory {
    root: PathBuf,
}

impl UserDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Platform default, e.g. `~/.local/share/lemonade`
    pub fn platform_default() -> Self {
        Self::new(
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR_NAME),
        )
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root.join("config")
    }

    /// Global settings file for a logical file name (without extension)
    pub fn config_file(&self, name: &str) -> PathBuf {
        self.config_dir().join(format!("{}.ini", name))
    }

    pub fn game_settings_dir(&self) -> PathBuf {
        self.root.join("GameSettings")
    }

    pub fn game_settings_file(&self, id: ProgramId) -> PathBuf {
        self.game_settings_dir().join(format!("{}.ini", id))
    }

    pub fn cheats_dir(&self) -> PathBuf {
        self.root.join("cheats")
    }

    pub fn cheat_file(&self, id: ProgramId) -> PathBuf {
        self.cheats_dir().join(format!("{}.txt", id))
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::platform_default()
    }
}

//! Error types for the lemonade settings and cheat tooling

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for settings and cheat file operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid program id: {0:?}")]
    InvalidProgramId(String),

    #[error("Invalid section name: {0:?}")]
    InvalidSection(String),

    #[error("Setting {key:?} cannot be stored: {reason}")]
    InvalidSetting { key: String, reason: &'static str },

    #[error("Refusing to overwrite {} which could not be read", .0.display())]
    Unreadable(PathBuf),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is an I/O error caused by a missing file
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for settings operations
pub type Result<T> = std::result::Result<T, Error>;

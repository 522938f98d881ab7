//! Core of the lemonade tooling
//!
//! This crate provides the settings store shared with the native 3DS
//! core (global settings plus per-game override layers), title ids,
//! the user directory layout, text file access, error handling and logging.

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod paths;
pub mod program_id;
pub mod settings;

pub use config::ToolConfig;
pub use error::{Error, Result};
pub use paths::UserDirectory;
pub use program_id::ProgramId;
pub use settings::{
    DirectoryHost, SaveReport, SectionName, Setting, SettingSection, SettingValue, Settings,
    SettingsHost,
};

//! Settings store
//!
//! Settings are grouped into sections and persisted as INI files shared
//! with the native core. A [`Settings`] instance is either the global
//! configuration or, when bound to a [`ProgramId`], a per-game layer:
//! the global files are loaded first and the title's override file is
//! merged on top, key by key.

pub mod ini;
pub mod overrides;
mod section;
mod setting;

pub use section::SettingSection;
pub use setting::{Setting, SettingValue};

use crate::error::{Error, Result};
use crate::fs;
use crate::paths::UserDirectory;
use crate::program_id::ProgramId;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Name of a settings section
///
/// Known sections sort in the fixed order they are written to disk.
/// Sections this build does not know about are kept as `Custom` so a
/// load/save cycle never drops them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SectionName {
    Interface,
    Core,
    System,
    Camera,
    Controls,
    Renderer,
    Layout,
    Utility,
    Audio,
    Debug,
    Custom(String),
}

impl SectionName {
    /// Every known section, in file order
    pub const ALL: [SectionName; 10] = [
        SectionName::Interface,
        SectionName::Core,
        SectionName::System,
        SectionName::Camera,
        SectionName::Controls,
        SectionName::Renderer,
        SectionName::Layout,
        SectionName::Utility,
        SectionName::Audio,
        SectionName::Debug,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Interface => "Interface",
            Self::Core => "Core",
            Self::System => "System",
            Self::Camera => "Camera",
            Self::Controls => "Controls",
            Self::Renderer => "Renderer",
            Self::Layout => "Layout",
            Self::Utility => "Utility",
            Self::Audio => "Audio",
            Self::Debug => "Debug",
            Self::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Check that the name can be written as a `[...]` header and read
    /// back as the same section
    pub fn check(&self) -> Result<()> {
        let Self::Custom(name) = self else {
            return Ok(());
        };

        let valid = !name.is_empty()
            && name.trim() == name
            && !name.contains(['[', ']', '\n', '\r'])
            && !Self::ALL.iter().any(|known| known.as_str() == name);

        if valid {
            Ok(())
        } else {
            Err(Error::InvalidSection(name.clone()))
        }
    }
}

impl FromStr for SectionName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        let parsed = Self::ALL
            .into_iter()
            .find(|known| known.as_str() == name)
            .unwrap_or_else(|| Self::Custom(name.to_string()));

        parsed.check().map_err(|_| Error::InvalidSection(s.to_string()))?;
        Ok(parsed)
    }
}

impl TryFrom<String> for SectionName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SectionName> for String {
    fn from(name: SectionName) -> Self {
        name.as_str().to_string()
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global settings files and the sections each one holds
///
/// Sections not listed anywhere (unknown sections read from disk) are
/// written to the first file.
pub const GLOBAL_FILES: &[(&str, &[SectionName])] = &[("config", &SectionName::ALL)];

/// Collaborators a settings session talks to
pub trait SettingsHost {
    /// Where the settings files live
    fn directory(&self) -> &UserDirectory;

    /// User-visible confirmation (a toast on the original front-end)
    fn notify(&self, message: &str);

    /// Push freshly saved settings into a running core
    fn reload_native(&self) {}
}

/// Host backed by a plain directory that logs its notifications
#[derive(Debug, Clone)]
pub struct DirectoryHost {
    directory: UserDirectory,
}

impl DirectoryHost {
    pub fn new(directory: UserDirectory) -> Self {
        Self { directory }
    }
}

impl SettingsHost for DirectoryHost {
    fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    fn notify(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Files written by a save
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReport {
    pub files: Vec<PathBuf>,
}

/// Root settings store
#[derive(Debug, Clone, Default)]
pub struct Settings {
    game_id: Option<ProgramId>,
    sections: BTreeMap<SectionName, SettingSection>,
    /// Global values underneath a per-game layer
    baseline: BTreeMap<SectionName, SettingSection>,
    /// Keys that belong to the per-game layer
    touched: IndexMap<SectionName, IndexSet<String>>,
    /// Sections as of the last load or save
    saved: BTreeMap<SectionName, SettingSection>,
    /// Files that exist but could not be read, never overwritten
    unreadable: Vec<PathBuf>,
    dirty: bool,
}

impl Settings {
    /// Empty global settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty settings bound to one title
    pub fn for_game(game_id: ProgramId) -> Self {
        Self {
            game_id: Some(game_id),
            ..Self::default()
        }
    }

    pub fn game_id(&self) -> Option<ProgramId> {
        self.game_id
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether anything changed since the last load or save
    ///
    /// Covers [`put_setting`](Self::put_setting) as well as edits made
    /// through [`section`](Self::section).
    pub fn is_dirty(&self) -> bool {
        self.dirty || !non_empty(&self.sections).eq(non_empty(&self.saved))
    }

    /// Get a section, creating it if it does not exist yet
    pub fn section(&mut self, name: SectionName) -> &mut SettingSection {
        self.sections
            .entry(name.clone())
            .or_insert_with(|| SettingSection::new(name))
    }

    /// Get a section without creating it
    pub fn section_ref(&self, name: &SectionName) -> Option<&SettingSection> {
        self.sections.get(name)
    }

    /// Sections in file order
    pub fn sections(&self) -> impl Iterator<Item = &SettingSection> {
        self.sections.values()
    }

    pub fn get(&self, section: &SectionName, key: &str) -> Option<&SettingValue> {
        self.sections.get(section)?.value(key)
    }

    pub fn get_int(&self, section: &SectionName, key: &str) -> Option<i32> {
        self.get(section, key)?.as_int()
    }

    pub fn get_bool(&self, section: &SectionName, key: &str) -> Option<bool> {
        self.get(section, key)?.as_bool()
    }

    pub fn get_str(&self, section: &SectionName, key: &str) -> Option<&str> {
        self.get(section, key)?.as_str()
    }

    /// Insert or overwrite a setting in its section
    ///
    /// Settings the INI files cannot hold are rejected and leave the store
    /// unchanged.
    pub fn put_setting(&mut self, setting: Setting) -> Result<()> {
        setting.check()?;
        self.mark_touched(&setting.section, &setting.key);
        self.dirty = true;
        self.section(setting.section.clone()).insert(setting);
        Ok(())
    }

    /// Load the global files and, when bound, the title's overrides
    ///
    /// Replaces all sections. Missing or unreadable files count as empty;
    /// unreadable ones are remembered so a later save does not clobber
    /// them.
    pub fn load_settings(&mut self, host: &dyn SettingsHost) {
        self.sections.clear();
        self.baseline.clear();
        self.touched.clear();
        self.unreadable.clear();
        self.dirty = false;

        let directory = host.directory();
        for (file_name, _) in GLOBAL_FILES {
            for (name, section) in self.read_sections(&directory.config_file(file_name)) {
                self.sections.insert(name, section);
            }
        }

        if let Some(id) = self.game_id {
            self.baseline = self.sections.clone();
            let overrides = self.read_sections(&directory.game_settings_file(id));
            for section in overrides.values() {
                for setting in section.iter() {
                    self.mark_touched(section.name(), &setting.key);
                }
            }
            self.merge_sections(overrides);
        }
        self.saved = self.sections.clone();

        tracing::info!(
            "Loaded {} settings sections{}",
            self.sections.len(),
            self.game_id.map(|id| format!(" for {}", id)).unwrap_or_default()
        );
    }

    /// Bind to `game_id` and load
    pub fn load_settings_for(&mut self, game_id: Option<ProgramId>, host: &dyn SettingsHost) {
        self.game_id = game_id;
        self.load_settings(host);
    }

    /// Merge sections on top of the current ones, key by key
    pub fn merge_sections(&mut self, updated: impl IntoIterator<Item = (SectionName, SettingSection)>) {
        for (name, section) in updated {
            match self.sections.get_mut(&name) {
                Some(original) => original.merge(section),
                None => {
                    self.sections.insert(name, section);
                }
            }
        }
    }

    /// Fill in built-in compatibility hacks for the bound title
    ///
    /// Values already present are left alone, and the hacks are not
    /// written to the title's override file. Returns how many were applied.
    pub fn apply_builtin_overrides(&mut self) -> usize {
        let Some(id) = self.game_id else {
            return 0;
        };

        let mut applied = 0;
        for setting in overrides::builtin_overrides(id) {
            if self.get(&setting.section, &setting.key).is_some() {
                continue;
            }
            for layer in [&mut self.baseline, &mut self.saved] {
                layer
                    .entry(setting.section.clone())
                    .or_insert_with(|| SettingSection::new(setting.section.clone()))
                    .insert(setting.clone());
            }
            self.section(setting.section.clone()).insert(setting);
            applied += 1;
        }

        if applied > 0 {
            tracing::debug!("Applied {} built-in overrides for {}", applied, id);
        }
        applied
    }

    /// Write settings back to disk
    ///
    /// Global settings go to every global file; a per-game layer writes
    /// only its own keys to the title's override file. Files that could
    /// not be read on load are left alone and reported as
    /// [`Error::Unreadable`].
    pub fn save_settings(&mut self, host: &dyn SettingsHost) -> Result<SaveReport> {
        let directory = host.directory();
        let mut report = SaveReport::default();

        match self.game_id {
            None => {
                for (index, (file_name, names)) in GLOBAL_FILES.iter().enumerate() {
                    let mut file_sections: Vec<SettingSection> = names
                        .iter()
                        .map(|name| self.section_or_empty(name))
                        .collect();

                    if index == 0 {
                        file_sections.extend(
                            self.sections
                                .values()
                                .filter(|s| !GLOBAL_FILES.iter().any(|(_, n)| n.contains(s.name())))
                                .cloned(),
                        );
                    }

                    let path = directory.config_file(file_name);
                    self.ensure_writable(&path)?;
                    fs::write_text(&path, &ini::write(&file_sections)?)?;
                    report.files.push(path);
                }
                host.notify("Saved settings to INI files");
            }
            Some(id) => {
                let path = directory.game_settings_file(id);
                self.ensure_writable(&path)?;
                fs::write_text(&path, &ini::write(&self.game_layer())?)?;
                report.files.push(path);
                host.notify(&format!("Saved settings for {}", id));
            }
        }

        self.dirty = false;
        self.saved = self.sections.clone();
        host.reload_native();
        tracing::info!("Saved settings to {:?}", report.files);
        Ok(report)
    }

    /// Save only if something changed since the last load or save
    pub fn save_if_dirty(&mut self, host: &dyn SettingsHost) -> Result<Option<SaveReport>> {
        if !self.is_dirty() {
            return Ok(None);
        }
        self.save_settings(host).map(Some)
    }

    fn read_sections(&mut self, path: &Path) -> ini::SectionMap {
        match fs::read_text(path) {
            Ok(text) => ini::parse(&text),
            Err(err) if err.is_not_found() => {
                tracing::debug!("No settings file at {:?}", path);
                ini::SectionMap::new()
            }
            Err(err) => {
                tracing::warn!("Failed to read settings file: {}", err);
                self.unreadable.push(path.to_path_buf());
                ini::SectionMap::new()
            }
        }
    }

    fn ensure_writable(&self, path: &Path) -> Result<()> {
        if self.unreadable.iter().any(|p| p == path) {
            return Err(Error::Unreadable(path.to_path_buf()));
        }
        Ok(())
    }

    fn mark_touched(&mut self, section: &SectionName, key: &str) {
        self.touched
            .entry(section.clone())
            .or_default()
            .insert(key.to_string());
    }

    fn section_or_empty(&self, name: &SectionName) -> SettingSection {
        self.sections
            .get(name)
            .cloned()
            .unwrap_or_else(|| SettingSection::new(name.clone()))
    }

    /// Keys of the per-game layer: anything loaded from or put into it,
    /// plus anything that no longer matches the global value
    fn game_layer(&self) -> Vec<SettingSection> {
        let mut layer = Vec::new();

        for section in self.sections.values() {
            let touched = self.touched.get(section.name());
            let baseline = self.baseline.get(section.name());
            let mut out = SettingSection::new(section.name().clone());

            for setting in section.iter() {
                let is_touched = touched.is_some_and(|keys| keys.contains(&setting.key));
                let differs = baseline.and_then(|b| b.value(&setting.key)) != Some(&setting.value);
                if is_touched || differs {
                    out.insert(setting.clone());
                }
            }

            if !out.is_empty() {
                layer.push(out);
            }
        }

        layer
    }
}

fn non_empty(
    sections: &BTreeMap<SectionName, SettingSection>,
) -> impl Iterator<Item = &SettingSection> + '_ {
    sections.values().filter(|section| !section.is_empty())
}

//! Per-title cheat files
//!
//! Cheats for a title live in `cheats/<ID>.txt` below the user directory.
//! Titles without a cheat file fall back to a bundled cheat list when one
//! is available.

use crate::codec::{decode, encode, ENABLED_SENTINEL};
use crate::entry::CheatEntry;
use lm_core::{fs, Error, ProgramId, Result, UserDirectory};
use std::path::{Path, PathBuf};

/// Source of bundled cheat lists
pub trait BuiltinCheats {
    /// Cheat text shipped for `id`, if any
    fn cheat_text(&self, id: ProgramId) -> Option<String>;
}

/// No bundled cheats
impl BuiltinCheats for () {
    fn cheat_text(&self, _id: ProgramId) -> Option<String> {
        None
    }
}

/// Bundled cheats stored as `<ID>.txt` files in one directory
#[derive(Debug, Clone)]
pub struct BuiltinCheatDir {
    dir: PathBuf,
}

impl BuiltinCheatDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl BuiltinCheats for BuiltinCheatDir {
    fn cheat_text(&self, id: ProgramId) -> Option<String> {
        let path = self.dir.join(format!("{}.txt", id));
        fs::read_text(&path).ok()
    }
}

/// Cheat list of one title, bound to its file
#[derive(Debug, Clone)]
pub struct CheatFile {
    program_id: ProgramId,
    path: PathBuf,
    entries: Vec<CheatEntry>,
    /// The file exists but could not be read
    unreadable: bool,
}

impl CheatFile {
    /// Load the cheat list for `id`
    ///
    /// A missing file falls back to the bundled list. When the bundled list
    /// already enables a cheat it is written out right away so the core
    /// picks it up. Invalid UTF-8 is replaced rather than rejected. A file
    /// that cannot be read at all gives an empty list that is never saved
    /// over it.
    pub fn load(directory: &UserDirectory, id: ProgramId, builtin: &dyn BuiltinCheats) -> Result<Self> {
        let mut file = Self {
            program_id: id,
            path: directory.cheat_file(id),
            entries: Vec::new(),
            unreadable: false,
        };

        match fs::read_text(&file.path) {
            Ok(text) => {
                file.entries = decode(&text);
                tracing::info!("Loaded {} cheats from {:?}", file.entries.len(), file.path);
            }
            Err(err) if err.is_not_found() => {
                let text = builtin.cheat_text(id).unwrap_or_default();
                file.entries = decode(&text);
                if text.contains(ENABLED_SENTINEL) {
                    tracing::info!("Writing bundled cheats for {} with enabled entries", id);
                    file.save()?;
                }
            }
            Err(err) => {
                tracing::warn!("Failed to read cheat file: {}", err);
                file.unreadable = true;
            }
        }

        Ok(file)
    }

    pub fn program_id(&self) -> ProgramId {
        self.program_id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[CheatEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut Vec<CheatEntry> {
        &mut self.entries
    }

    pub fn enabled_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.enabled).count()
    }

    /// Cheat text as it would be saved
    pub fn to_text(&self) -> String {
        encode(&self.entries)
    }

    /// Replace the list with freshly edited text
    pub fn replace_text(&mut self, text: &str) {
        self.entries = decode(text);
    }

    /// Write the list back; an empty list removes the file
    ///
    /// A file that could not be read on load is left untouched and
    /// reported as [`Error::Unreadable`].
    pub fn save(&self) -> Result<()> {
        if self.unreadable {
            return Err(Error::Unreadable(self.path.clone()));
        }

        let content = self.to_text();
        if content.is_empty() {
            return fs::remove_file(&self.path);
        }

        fs::write_text(&self.path, &content)?;
        tracing::debug!("Saved {} cheats to {:?}", self.entries.len(), self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_has_no_builtin_cheats() {
        assert!(().cheat_text(ProgramId::new(1)).is_none());
    }
}

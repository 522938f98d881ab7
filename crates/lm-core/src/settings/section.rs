//! Setting sections

use super::{SectionName, Setting, SettingValue};
use crate::error::Result;
use indexmap::IndexMap;

/// A named, ordered group of settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingSection {
    name: SectionName,
    settings: IndexMap<String, Setting>,
}

impl SettingSection {
    pub fn new(name: SectionName) -> Self {
        Self {
            name,
            settings: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &SectionName {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&Setting> {
        self.settings.get(key)
    }

    pub fn value(&self, key: &str) -> Option<&SettingValue> {
        self.settings.get(key).map(|setting| &setting.value)
    }

    /// Insert or overwrite a setting
    ///
    /// The setting is re-scoped to this section. Overwriting keeps the
    /// key's original position so files stay diff-stable. Keys and values
    /// the INI format cannot hold are rejected with
    /// [`Error::InvalidSetting`](crate::Error::InvalidSetting).
    pub fn put(&mut self, setting: Setting) -> Result<()> {
        setting.check()?;
        self.insert(setting);
        Ok(())
    }

    /// Convenience form of [`put`](Self::put)
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Result<()> {
        self.put(Setting::new(self.name.clone(), key, value))
    }

    /// Insert a setting that is already known to be storable
    pub(crate) fn insert(&mut self, mut setting: Setting) {
        setting.section = self.name.clone();
        self.settings.insert(setting.key.clone(), setting);
    }

    pub fn remove(&mut self, key: &str) -> Option<Setting> {
        self.settings.shift_remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.settings.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Settings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Setting> {
        self.settings.values()
    }

    /// Every key of `other` overrides or extends this section
    pub fn merge(&mut self, other: SettingSection) {
        for (_, setting) in other.settings {
            self.insert(setting);
        }
    }
}

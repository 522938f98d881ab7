//! Cheat entries

use serde::{Deserialize, Serialize};

/// Name shown for an entry without any header line
pub const FALLBACK_NAME: &str = "Cheat";

/// One independently toggleable block of cheat codes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatEntry {
    /// Set by the `*citra_enabled` line
    pub enabled: bool,
    /// Header (`[...]`) and comment (`*...`) lines
    pub infos: Vec<String>,
    /// Canonicalized code lines
    pub codes: Vec<String>,
}

impl CheatEntry {
    pub fn new() -> Self {
        Self::default()
    }

    /// First info line, usually the `[Name]` header
    pub fn name(&self) -> &str {
        self.infos.first().map(String::as_str).unwrap_or(FALLBACK_NAME)
    }

    /// Every info line after the first, concatenated
    pub fn description(&self) -> String {
        self.infos.iter().skip(1).map(String::as_str).collect()
    }

    /// Entries without any line are dropped by the decoder
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty() && self.codes.is_empty()
    }

    /// Only entries with codes can be switched on
    pub fn is_toggleable(&self) -> bool {
        !self.codes.is_empty()
    }

    /// Flip the enabled state; entries without codes are forced off
    pub fn toggle(&mut self) -> bool {
        self.enabled = self.is_toggleable() && !self.enabled;
        self.enabled
    }
}

//! Individual settings and their typed values

use super::SectionName;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a single setting
///
/// Values read from disk carry no type information, so they come back as
/// `Int` when the text is a decimal `i32` and as `Str` otherwise. Use the
/// `as_*` accessors to reinterpret a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Int(i32),
    Bool(bool),
    Str(String),
}

impl SettingValue {
    /// Parse a raw value from an INI line
    ///
    /// Only the canonical decimal spelling becomes `Int`, so `007` or `+7`
    /// stay strings and are written back exactly as read.
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i32>() {
            Ok(v) if v.to_string() == raw => Self::Int(v),
            _ => Self::Str(raw.to_string()),
        }
    }

    /// Text form written to disk
    pub fn to_text(&self) -> String {
        match self {
            Self::Int(v) => v.to_string(),
            Self::Bool(v) => String::from(if *v { "1" } else { "0" }),
            Self::Str(s) => s.clone(),
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Bool(v) => Some(i32::from(*v)),
            Self::Str(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            Self::Int(0) => Some(false),
            Self::Int(1) => Some(true),
            Self::Int(_) => None,
            Self::Str(s) => match s.trim() {
                "1" | "true" | "True" => Some(true),
                "0" | "false" | "False" => Some(false),
                _ => None,
            },
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Whether `parse(to_text())` gives this value back
    ///
    /// The INI format has no quoting, so line breaks and surrounding
    /// whitespace cannot be stored.
    fn check(&self, key: &str) -> Result<()> {
        let text = self.to_text();
        let reason = if text.contains(['\n', '\r']) {
            "value contains a line break"
        } else if text.trim() != text {
            "value has leading or trailing whitespace"
        } else {
            return Ok(());
        };

        Err(Error::InvalidSetting {
            key: key.to_string(),
            reason,
        })
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<i32> for SettingValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

/// A key/value pair scoped to one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub section: SectionName,
    pub key: String,
    pub value: SettingValue,
}

impl Setting {
    pub fn new(section: SectionName, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        Self {
            section,
            key: key.into(),
            value: value.into(),
        }
    }

    /// Check that the setting survives a write and re-read unchanged
    pub fn check(&self) -> Result<()> {
        let reason = if self.key.is_empty() {
            "empty key"
        } else if self.key.trim() != self.key {
            "key has leading or trailing whitespace"
        } else if self.key.contains(['=', '\n', '\r']) {
            "key contains '=' or a line break"
        } else if self.key.starts_with(['[', '#', ';']) {
            "key starts with '[', '#' or ';'"
        } else {
            return self.value.check(&self.key);
        };

        Err(Error::InvalidSetting {
            key: self.key.clone(),
            reason,
        })
    }
}

//! INI text format shared with the native core
//!
//! ```ini
//! [Core]
//! cpu_jit = 1
//!
//! [Renderer]
//! resolution_factor = 2
//! ```
//!
//! Parsing is best effort: comments (`#`, `;`) and blank lines are
//! ignored, malformed lines are skipped and never abort the parse. The
//! format has no quoting, so writing refuses names, keys and values that
//! would not read back unchanged.

use super::{SectionName, Setting, SettingSection, SettingValue};
use crate::error::Result;
use indexmap::IndexMap;
use std::fmt::Write as _;

/// Sections parsed from one file, in file order
pub type SectionMap = IndexMap<SectionName, SettingSection>;

/// Parse INI text into sections
pub fn parse(text: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current: Option<SectionName> = None;

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            current = match header.strip_suffix(']').map(str::parse::<SectionName>) {
                Some(Ok(name)) => {
                    sections
                        .entry(name.clone())
                        .or_insert_with(|| SettingSection::new(name.clone()));
                    Some(name)
                }
                _ => {
                    tracing::debug!("Skipping malformed section header on line {}: {:?}", index + 1, line);
                    None
                }
            };
            continue;
        }

        let Some(name) = current.as_ref() else {
            tracing::debug!("Skipping line {} outside of any section: {:?}", index + 1, line);
            continue;
        };

        match line.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                if let Some(section) = sections.get_mut(name) {
                    section.insert(Setting::new(
                        name.clone(),
                        key.trim(),
                        SettingValue::parse(value.trim()),
                    ));
                }
            }
            _ => {
                tracing::debug!("Skipping malformed line {} in [{}]: {:?}", index + 1, name, line);
            }
        }
    }

    sections
}

/// Write sections as INI text, in the order given
pub fn write<'a>(sections: impl IntoIterator<Item = &'a SettingSection>) -> Result<String> {
    let mut out = String::new();
    let mut first = true;

    for section in sections {
        section.name().check()?;
        if !first {
            out.push('\n');
        }
        first = false;

        let _ = writeln!(out, "[{}]", section.name());
        for setting in section.iter() {
            setting.check()?;
            let _ = writeln!(out, "{} = {}", setting.key, setting.value);
        }
    }

    Ok(out)
}

//! Cheat list text format
//!
//! ```text
//! [Infinite HP]
//! *citra_enabled
//! 00123456 00000001
//!
//! [Speed Hack]
//! 00654321 0000000A
//! ```
//!
//! A line starting with `[` opens a new entry. Lines starting with `*`
//! are comments, except for the enable sentinel. Every other non-blank
//! line is a code line.

use crate::entry::CheatEntry;

/// Marks the entry it appears in as enabled
pub const ENABLED_SENTINEL: &str = "*citra_enabled";

/// Parse cheat text into entries
pub fn decode(text: &str) -> Vec<CheatEntry> {
    let mut entries = Vec::new();
    let mut current = CheatEntry::new();

    for line in text.lines().flat_map(|l| l.split('\r')) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            if !current.is_empty() {
                entries.push(std::mem::take(&mut current));
            }
            current.infos.push(line.to_string());
        } else if line.starts_with('*') {
            if line == ENABLED_SENTINEL {
                current.enabled = true;
            } else {
                current.infos.push(line.to_string());
            }
        } else {
            current.codes.push(canonicalize_code(line));
        }
    }

    if !current.is_empty() {
        entries.push(current);
    }

    tracing::debug!("Decoded {} cheat entries", entries.len());
    entries
}

/// Write entries back as cheat text
pub fn encode(entries: &[CheatEntry]) -> String {
    let mut out = String::new();

    for entry in entries {
        for info in &entry.infos {
            out.push_str(info);
            out.push('\n');
        }
        if entry.enabled {
            out.push_str(ENABLED_SENTINEL);
            out.push('\n');
        }
        for code in &entry.codes {
            out.push_str(code);
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

/// Normalize a code line to upper-case hex words separated by one space
///
/// Hex digits are kept (upper-cased) and whitespace runs collapse to a
/// single space. At the first other character the rest of the line is
/// copied verbatim, so annotations after a code survive untouched.
/// Trailing whitespace is dropped.
pub fn canonicalize_code(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut insert_space = false;

    for (index, c) in line.char_indices() {
        if c.is_ascii_hexdigit() {
            out.push(c.to_ascii_uppercase());
            insert_space = true;
        } else if c.is_whitespace() {
            if insert_space {
                out.push(' ');
                insert_space = false;
            }
        } else {
            out.push_str(&line[index..]);
            break;
        }
    }

    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_two_entries() {
        let text = "[Infinite HP]\n*citra_enabled\n00123456 00000001\n\n[Speed Hack]\n00654321 0000000A\n";
        let entries = decode(text);

        assert_eq!(
            entries,
            vec![
                CheatEntry {
                    enabled: true,
                    infos: vec!["[Infinite HP]".to_string()],
                    codes: vec!["00123456 00000001".to_string()],
                },
                CheatEntry {
                    enabled: false,
                    infos: vec!["[Speed Hack]".to_string()],
                    codes: vec!["00654321 0000000A".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_blank_lines_do_not_split_entries() {
        let entries = decode("[A]\n00000000 00000001\n\n\n00000000 00000002\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].codes.len(), 2);
    }

    #[test]
    fn test_blank_block_between_headers_is_dropped() {
        let entries = decode("[A]\n\n   \n\n[B]\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name(), "[A]");
        assert_eq!(entries[1].name(), "[B]");
    }

    #[test]
    fn test_codes_before_first_header() {
        let entries = decode("d3000000 00000000\n[Named]\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name(), "Cheat");
        assert_eq!(entries[0].codes, ["D3000000 00000000"]);
    }

    #[test]
    fn test_sentinel_without_codes() {
        let entries = decode("*citra_enabled\n");
        assert!(entries.is_empty());

        let entries = decode("[Only a note]\n*citra_enabled\n*comment\n");
        assert_eq!(entries.len(), 1);
        assert!(entries[0].enabled);
        assert!(entries[0].codes.is_empty());
        assert_eq!(entries[0].infos, ["[Only a note]", "*comment"]);
        assert_eq!(decode(&encode(&entries)), entries);
    }

    #[test]
    fn test_sentinel_must_match_exactly() {
        let entries = decode("[A]\n*citra_enabled2\n*Citra_Enabled\n");
        assert!(!entries[0].enabled);
        assert_eq!(entries[0].infos.len(), 3);
    }

    #[test]
    fn test_crlf_input() {
        let entries = decode("[A]\r\n*citra_enabled\r\n00000000 00000001\r\n\r\n[B]\r00000000 00000002\r");
        assert_eq!(entries.len(), 2);
        assert!(entries[0].enabled);
        assert_eq!(entries[1].codes, ["00000000 00000002"]);
    }

    #[test]
    fn test_encode_layout() {
        let entries = vec![
            CheatEntry {
                enabled: true,
                infos: vec!["[A]".to_string(), "*note".to_string()],
                codes: vec!["00000000 00000001".to_string()],
            },
            CheatEntry {
                enabled: false,
                infos: Vec::new(),
                codes: vec!["00000000 00000002".to_string()],
            },
        ];
        assert_eq!(
            encode(&entries),
            "[A]\n*note\n*citra_enabled\n00000000 00000001\n\n00000000 00000002\n\n"
        );
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_encode_reorders_sentinel() {
        let text = "[A]\n00000000 00000001\n*citra_enabled\n";
        let encoded = encode(&decode(text));
        assert_ne!(encoded, text);
        assert_eq!(encoded, "[A]\n*citra_enabled\n00000000 00000001\n\n");
    }

    #[test]
    fn test_canonicalize_basic() {
        assert_eq!(canonicalize_code("00123456 00000001"), "00123456 00000001");
        assert_eq!(canonicalize_code("dd000000   0000ffff"), "DD000000 0000FFFF");
        assert_eq!(canonicalize_code("  a\t b  "), "A B");
        assert_eq!(canonicalize_code(""), "");
        assert_eq!(canonicalize_code("   "), "");
    }

    #[test]
    fn test_canonicalize_passes_remainder_through() {
        assert_eq!(canonicalize_code("0012 34gg extra text"), "0012 34gg extra text");
        assert_eq!(canonicalize_code("0012 34 zz"), "0012 34 zz");
        assert_eq!(canonicalize_code("ab cd ; Note  here "), "AB CD ; Note  here");
        assert_eq!(canonicalize_code("// comment"), "// comment");
        assert_eq!(canonicalize_code("00ab 0x12"), "00AB 0x12");
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        for line in [
            "00123456 00000001",
            "dd000000   0000ffff",
            "0012 34gg extra text",
            "0012 34 zz",
            "  a\t b  ",
            "ab cd ; Note  here ",
            "éa 00",
        ] {
            let once = canonicalize_code(line);
            assert_eq!(canonicalize_code(&once), once, "line {:?}", line);
        }
    }
}

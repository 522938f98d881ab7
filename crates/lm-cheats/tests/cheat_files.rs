//! Round-trip and on-disk tests for cheat lists

use lm_cheats::{decode, encode, BuiltinCheatDir, CheatEntry, CheatFile};
use lm_core::{ProgramId, UserDirectory};
use std::fs;
use tempfile::TempDir;

const SAMPLE: &str = "\
[Infinite HP]
*citra_enabled
00123456 00000001

[Speed Hack]
*by anonymous
00654321 0000000a
d2000000   00000000

[Notes only]
*citra_enabled
*read me

[Moon jump]
dd000000 00000002
0012 34gg extra text
";

fn game_id() -> ProgramId {
    ProgramId::new(0x0004000000123500)
}

#[test]
fn test_round_trip_of_decoded_lists() {
    let inputs = [
        SAMPLE,
        "",
        "\n\n\n",
        "00000000 00000001\n[A]\n",
        "*lonely comment\n[B]\n*citra_enabled\nzz not hex\n",
        "[A]\r\n  aa bb  \r\n[A]\r\n",
    ];

    for input in inputs {
        let decoded = decode(input);
        assert_eq!(decode(&encode(&decoded)), decoded, "input {:?}", input);
    }
}

#[test]
fn test_sample_decodes() {
    let entries = decode(SAMPLE);
    assert_eq!(entries.len(), 4);

    assert!(entries[0].enabled);
    assert_eq!(entries[1].description(), "*by anonymous");
    assert_eq!(entries[1].codes, ["00654321 0000000A", "D2000000 00000000"]);
    assert!(entries[2].enabled);
    assert!(!entries[2].is_toggleable());
    assert_eq!(entries[3].codes[1], "0012 34gg extra text");
}

#[test]
fn test_load_trims_and_saves() {
    let temp = TempDir::new().unwrap();
    let directory = UserDirectory::new(temp.path());
    let path = directory.cheat_file(game_id());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "  [Infinite HP]  \n  *citra_enabled\n 00123456 00000001 \n").unwrap();

    let mut file = CheatFile::load(&directory, game_id(), &()).unwrap();
    assert_eq!(file.path(), path.as_path());
    assert_eq!(file.enabled_count(), 1);

    file.entries_mut()[0].toggle();
    file.save().unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[Infinite HP]\n00123456 00000001\n\n"
    );
}

#[test]
fn test_missing_file_without_builtin_is_empty() {
    let temp = TempDir::new().unwrap();
    let directory = UserDirectory::new(temp.path());

    let file = CheatFile::load(&directory, game_id(), &()).unwrap();
    assert!(file.entries().is_empty());
    assert!(!directory.cheat_file(game_id()).exists());
}

#[test]
fn test_builtin_with_enabled_cheat_is_written() {
    let temp = TempDir::new().unwrap();
    let directory = UserDirectory::new(temp.path().join("user"));
    let bundled = temp.path().join("bundled");
    fs::create_dir_all(&bundled).unwrap();
    fs::write(bundled.join("0004000000123500.txt"), SAMPLE).unwrap();

    let file = CheatFile::load(&directory, game_id(), &BuiltinCheatDir::new(&bundled)).unwrap();
    assert_eq!(file.entries().len(), 4);

    let written = fs::read_to_string(directory.cheat_file(game_id())).unwrap();
    assert_eq!(decode(&written), file.entries());
}

#[test]
fn test_builtin_without_enabled_cheat_is_not_written() {
    let temp = TempDir::new().unwrap();
    let directory = UserDirectory::new(temp.path().join("user"));
    let bundled = temp.path().join("bundled");
    fs::create_dir_all(&bundled).unwrap();
    fs::write(bundled.join("0004000000123500.txt"), "[A]\n00000000 00000001\n").unwrap();

    let file = CheatFile::load(&directory, game_id(), &BuiltinCheatDir::new(&bundled)).unwrap();
    assert_eq!(file.entries().len(), 1);
    assert!(!directory.cheat_file(game_id()).exists());
}

#[test]
fn test_empty_list_removes_file() {
    let temp = TempDir::new().unwrap();
    let directory = UserDirectory::new(temp.path());
    let path = directory.cheat_file(game_id());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[A]\n00000000 00000001\n").unwrap();

    let mut file = CheatFile::load(&directory, game_id(), &()).unwrap();
    file.replace_text("\n\n");
    file.save().unwrap();
    assert!(!path.exists());

    // Saving again with nothing to remove is fine
    file.save().unwrap();
}

#[test]
fn test_replace_text() {
    let temp = TempDir::new().unwrap();
    let directory = UserDirectory::new(temp.path());

    let mut file = CheatFile::load(&directory, game_id(), &()).unwrap();
    file.replace_text("[New]\n*citra_enabled\nabcdef01 00000000\n");
    assert_eq!(
        file.entries(),
        [CheatEntry {
            enabled: true,
            infos: vec!["[New]".to_string()],
            codes: vec!["ABCDEF01 00000000".to_string()],
        }]
    );
    assert_eq!(file.to_text(), "[New]\n*citra_enabled\nABCDEF01 00000000\n\n");
}

#[test]
fn test_invalid_utf8_file_survives_load_and_save() {
    let temp = TempDir::new().unwrap();
    let directory = UserDirectory::new(temp.path());
    let path = directory.cheat_file(game_id());
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, b"[Caf\xe9 cheat]\n*citra_enabled\n00123456 00000001\n").unwrap();

    let file = CheatFile::load(&directory, game_id(), &()).unwrap();
    assert_eq!(file.entries().len(), 1);
    assert_eq!(file.entries()[0].name(), "[Caf\u{FFFD} cheat]");
    assert!(file.entries()[0].enabled);

    file.save().unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[Caf\u{FFFD} cheat]\n*citra_enabled\n00123456 00000001\n\n"
    );
}

#[test]
fn test_unreadable_file_is_never_removed() {
    let temp = TempDir::new().unwrap();
    let directory = UserDirectory::new(temp.path());
    // A directory in place of the cheat file cannot be read
    let path = directory.cheat_file(game_id());
    fs::create_dir_all(&path).unwrap();

    let file = CheatFile::load(&directory, game_id(), &()).unwrap();
    assert!(file.entries().is_empty());

    let err = file.save().unwrap_err();
    assert!(matches!(err, lm_core::Error::Unreadable(_)));
    assert!(path.is_dir());
}

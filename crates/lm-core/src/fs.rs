//! Text file access shared by the settings store and cheat files
//!
//! Files are written by other tools too, so reads never fail on bad
//! encoding: invalid UTF-8 sequences are replaced and the rest of the
//! file is kept.

use crate::error::{Error, Result};
use std::path::Path;

/// Read a text file, replacing invalid UTF-8
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::warn!("{:?} is not valid UTF-8, replacing invalid bytes", path);
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Write a text file, creating parent directories
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// Remove a file; a file that is already gone is fine
pub fn remove_file(path: &Path) -> Result<()> {
    match std::fs::remove_file(path).map_err(|e| Error::io(path, e)) {
        Err(err) if err.is_not_found() => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_replaces_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("latin1.txt");
        std::fs::write(&path, b"Caf\xe9\nnext line\n").unwrap();

        assert_eq!(read_text(&path).unwrap(), "Caf\u{FFFD}\nnext line\n");
    }

    #[test]
    fn test_read_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = read_text(&temp.path().join("missing.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_write_and_remove() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b.txt");

        write_text(&path, "hello").unwrap();
        assert_eq!(read_text(&path).unwrap(), "hello");

        remove_file(&path).unwrap();
        assert!(!path.exists());
        remove_file(&path).unwrap();
    }
}

//! Cheat lists for lemonade
//!
//! Converts between the line-based cheat text format shared with the
//! native core and a list of [`CheatEntry`] values, and loads/saves the
//! per-title cheat files.

pub mod codec;
pub mod entry;
pub mod file;

pub use codec::{canonicalize_code, decode, encode, ENABLED_SENTINEL};
pub use entry::{CheatEntry, FALLBACK_NAME};
pub use file::{BuiltinCheatDir, BuiltinCheats, CheatFile};

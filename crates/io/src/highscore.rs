//! The persisted highscore: a single integer keyed by a filesystem path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the highscore store inside the home directory.
pub const HIGHSCORE_FILE_NAME: &str = ".terminal-snake";

/// Default store location: `~/.terminal-snake`, falling back to the
/// working directory when `HOME` is unset.
pub fn default_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home).join(HIGHSCORE_FILE_NAME),
        _ => PathBuf::from(HIGHSCORE_FILE_NAME),
    }
}

/// Load the stored highscore. An absent, unreadable or malformed file all
/// read as "no highscore saved".
pub fn load(path: &Path) -> Option<u32> {
    let text = fs::read_to_string(path).ok()?;
    text.trim().parse().ok()
}

/// Persist `score`, replacing any previous value.
pub fn save(path: &Path, score: u32) -> io::Result<()> {
    fs::write(path, format!("{score}\n"))
}

/// Delete the stored highscore. Deleting an already-absent file succeeds.
pub fn clear(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

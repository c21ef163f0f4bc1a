use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the storage directory
pub const DATA_DIR_ENV: &str = "RANDOM_CONTENT_DIR";

const APP_DIR_NAME: &str = "random-content";

/// Get the directory the content library is persisted in
///
/// `RANDOM_CONTENT_DIR` wins when set and non-empty, otherwise the platform data
/// directory is used (`~/.local/share/random-content` on Linux,
/// `~/Library/Application Support/random-content` on macOS).
pub fn get_data_dir() -> Result<PathBuf> {
    match env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.trim().is_empty() => return Ok(PathBuf::from(dir)),
        _ => {}
    }

    let base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}

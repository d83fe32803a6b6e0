use crate::error::Result;
use std::env;
use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

pub const DIR_ENV_VAR: &str = "SNAPE_DIR";
pub const SETTINGS_FILENAME: &str = ".settings.json";

/// Accepted range for the window size parameters, inclusive on both ends.
pub const SIZE_RANGE: RangeInclusive<u32> = 200..=600;
pub const DEFAULT_WIDTH: u32 = 420;
pub const DEFAULT_HEIGHT: u32 = 550;

/// How long the "Copied!" confirmation stays up before the process exits.
pub const SELECTION_DELAY: Duration = Duration::from_millis(300);

/// Get the default snippets directory (`~/.config/snape`)
pub fn get_config_dir() -> PathBuf {
    env::var("HOME")
        .map(|home| PathBuf::from(home).join(".config").join("snape"))
        .unwrap_or_else(|_| PathBuf::from(".config").join("snape"))
}

/// Resolve the snippets directory, honouring an explicit override first and
/// then the `SNAPE_DIR` environment variable.
pub fn resolve_snippets_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    match env::var_os(DIR_ENV_VAR) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => get_config_dir(),
    }
}

/// Ensure the snippets directory exists
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("Creating snippets directory at {}", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Get the path to the settings file inside a snippets directory
pub fn get_settings_file_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILENAME)
}

/// Check that a window size parameter lies in [`SIZE_RANGE`].
pub fn validate_size(name: &str, value: u32) -> Result<u32> {
    if SIZE_RANGE.contains(&value) {
        Ok(value)
    } else {
        Err(crate::SnapeError::InvalidConfig(format!(
            "{} must be between {} and {} (got {})",
            name,
            SIZE_RANGE.start(),
            SIZE_RANGE.end(),
            value
        )))
    }
}

use crate::config::{get_settings_file_path, DEFAULT_HEIGHT, DEFAULT_WIDTH, SIZE_RANGE};
use crate::error::{Result, SnapeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::System, Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::System => "system",
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = SnapeError;

    fn from_str(s: &str) -> Result<Self> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                SnapeError::InvalidConfig(format!(
                    "unknown theme '{}' (expected system, light or dark)",
                    s
                ))
            })
    }
}

/// Presentation settings persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::System,
            window_width: DEFAULT_WIDTH,
            window_height: DEFAULT_HEIGHT,
        }
    }
}

impl Settings {
    /// Apply explicit size overrides on top of the saved values.
    pub fn with_size(mut self, width: Option<u32>, height: Option<u32>) -> Self {
        if let Some(width) = width {
            self.window_width = width;
        }
        if let Some(height) = height {
            self.window_height = height;
        }
        self
    }

    fn clamped(mut self) -> Self {
        self.window_width = clamp_size(self.window_width);
        self.window_height = clamp_size(self.window_height);
        self
    }
}

fn clamp_size(value: u32) -> u32 {
    value.clamp(*SIZE_RANGE.start(), *SIZE_RANGE.end())
}

/// Reads and writes [`Settings`] as JSON in the snippets directory.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: get_settings_file_path(dir),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings, falling back to defaults when the file is missing or
    /// cannot be parsed.
    pub fn load(&self) -> Settings {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No settings at {}: {}", self.path.display(), e);
                return Settings::default();
            }
        };

        if content.trim().is_empty() {
            return Settings::default();
        }

        match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => settings.clamped(),
            Err(e) => {
                warn!("Ignoring unreadable settings file {}: {}", self.path.display(), e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let serialized = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        let settings = Settings {
            theme: Theme::Dark,
            window_width: 300,
            window_height: 500,
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn out_of_range_sizes_are_clamped() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path());
        fs::write(
            store.path(),
            r#"{"theme":"light","window_width":10,"window_height":9000}"#,
        )
        .unwrap();
        let settings = store.load();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.window_width, 200);
        assert_eq!(settings.window_height, 600);
    }

    #[test]
    fn explicit_sizes_override_saved_ones() {
        let settings = Settings::default().with_size(Some(250), None);
        assert_eq!(settings.window_width, 250);
        assert_eq!(settings.window_height, DEFAULT_HEIGHT);
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("sepia".parse::<Theme>().is_err());
    }
}

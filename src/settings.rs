//! Persistent settings for game initialization
//!
//! Saves and loads user preferences (window size, music, win score) to/from
//! a settings.json file in the config directory.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::{COURT_HEIGHT, COURT_WIDTH, DEFAULT_WIN_SCORE};

/// Path to the settings file
pub const SETTINGS_FILE: &str = "config/settings.json";

/// Persistent settings that survive between sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitSettings {
    /// Window width in pixels
    pub window_width: f32,
    /// Window height in pixels
    pub window_height: f32,
    /// Whether background music starts playing
    pub music_enabled: bool,
    /// Music volume, 0.0 to 1.0
    pub music_volume: f32,
    /// First score to reach this wins the match
    pub win_score: u32,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            window_width: COURT_WIDTH,
            window_height: COURT_HEIGHT,
            music_enabled: true,
            music_volume: 0.6,
            win_score: DEFAULT_WIN_SCORE,
        }
    }
}

impl InitSettings {
    /// Load settings from the default file, or return defaults
    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    /// Load settings from a path, or return defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings file at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(Path::new(SETTINGS_FILE))
    }

    /// Save settings to a path, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, json)?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }
}

/// Resource tracking the current settings (for change detection)
#[derive(Resource)]
pub struct CurrentSettings {
    pub settings: InitSettings,
    pub dirty: bool,
}

impl Default for CurrentSettings {
    fn default() -> Self {
        Self {
            settings: InitSettings::load(),
            dirty: false,
        }
    }
}

impl CurrentSettings {
    /// Mark settings as changed (will be saved on next update)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Save if dirty
    pub fn save_if_dirty(&mut self) {
        if self.dirty {
            if let Err(e) = self.settings.save() {
                warn!("Failed to save settings: {}", e);
            }
            self.dirty = false;
        }
    }
}

/// System to save settings when changed
pub fn save_settings_system(mut settings: ResMut<CurrentSettings>) {
    settings.save_if_dirty();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config/settings.json");

        let mut settings = InitSettings::default();
        settings.music_enabled = false;
        settings.win_score = 21;
        settings.save_to(&path).unwrap();

        let loaded = InitSettings::load_from(&path);
        assert!(!loaded.music_enabled);
        assert_eq!(loaded.win_score, 21);
        assert_eq!(loaded.window_width, COURT_WIDTH);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = InitSettings::load_from(&dir.path().join("nope.json"));
        assert_eq!(loaded.win_score, DEFAULT_WIN_SCORE);
        assert!(loaded.music_enabled);
    }

    #[test]
    fn garbage_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        let loaded = InitSettings::load_from(&path);
        assert_eq!(loaded.win_score, DEFAULT_WIN_SCORE);
    }
}

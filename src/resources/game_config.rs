use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Default file name for config storage.
const CONFIG_FILE_NAME: &str = "config.json";

/// Play field and game loop settings, persisted as JSON.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the play field in screen units.
    pub screen_width: i32,
    /// Height of the play field in screen units.
    pub screen_height: i32,
    /// Game ticks per second.
    pub fixed_hz: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 448,
            screen_height: 520,
            fixed_hz: 60.0,
        }
    }
}

impl GameConfig {
    /// Where the player ship appears at the start of a game.
    pub fn ship_spawn_position(&self) -> (i32, i32) {
        (self.screen_width / 2, self.screen_height - 30)
    }

    /// Returns the platform-specific path for the config file.
    ///
    /// - macOS: ~/Library/Application Support/invaders/
    /// - Linux: ~/.config/invaders/
    /// - Windows: %APPDATA%/invaders/
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("invaders");
            path.push(CONFIG_FILE_NAME);
            path
        })
    }

    /// Loads the config from `path`, falling back to defaults if it is
    /// missing or unreadable.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            info!("No config found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_json(&contents) {
                Ok(config) => {
                    info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    error!("{}", e);
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Parses and validates a JSON config.
    pub fn from_json(contents: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(contents)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(format!(
                "Invalid play field size {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if self.fixed_hz.is_nan() || self.fixed_hz <= 0.0 {
            return Err(format!("Invalid tick rate {}", self.fixed_hz));
        }
        Ok(())
    }

    /// Saves the config to `path`, creating the parent directory if needed.
    pub fn save_to_file(&self, path: &Path) -> Result<(), String> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                std::fs::create_dir_all(dir)
                    .map_err(|e| format!("Failed to create config directory: {}", e))?;
                info!("Created config directory: {:?}", dir);
            }
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write config file: {}", e))?;
        info!("Saved config to {:?}", path);
        Ok(())
    }
}

//! Player configuration.
//!
//! Read from `<config_dir>/scrubplayer/config.toml`. Every field has a default,
//! so a partial file (or no file at all) is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub const APP_DIR_NAME: &str = "scrubplayer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Audio Player".to_string(),
            width: 390.0,
            height: 844.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub window: WindowConfig,
    /// Width of the volume slider in pixels
    pub volume_bar_width: f32,
    /// Volume applied when a file is opened, 0.0..=1.0
    pub initial_volume: f64,
    /// How often the playback position is queried while a file is open
    pub position_poll_ms: u64,
    /// Upper bound for discovering a file's duration before playback, 0 skips discovery
    pub discoverer_timeout_ms: u64,
    pub allowed_extensions: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            volume_bar_width: 100.0,
            initial_volume: 1.0,
            position_poll_ms: 200,
            discoverer_timeout_ms: 1000,
            allowed_extensions: ["mp3", "wav", "flac", "ogg"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}

impl PlayerConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config.sanitized())
    }

    /// Load from the user config directory, falling back to defaults
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::info!("No configuration at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => {
                tracing::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring configuration at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Clamp out-of-range values back into something the player can use.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        self.initial_volume = if self.initial_volume.is_finite() {
            self.initial_volume.clamp(0.0, 1.0)
        } else {
            defaults.initial_volume
        };
        if !(self.volume_bar_width > 0.0) {
            self.volume_bar_width = defaults.volume_bar_width;
        }
        if !(self.window.width > 0.0) || !(self.window.height > 0.0) {
            self.window.width = defaults.window.width;
            self.window.height = defaults.window.height;
        }
        self.position_poll_ms = self.position_poll_ms.max(16);

        self.allowed_extensions = self
            .allowed_extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        if self.allowed_extensions.is_empty() {
            self.allowed_extensions = defaults.allowed_extensions;
        }
        self
    }

    pub fn position_poll_interval(&self) -> Duration {
        Duration::from_millis(self.position_poll_ms)
    }

    pub fn discoverer_timeout(&self) -> Option<Duration> {
        (self.discoverer_timeout_ms > 0).then(|| Duration::from_millis(self.discoverer_timeout_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.window.width, 390.0);
        assert_eq!(config.window.height, 844.0);
        assert_eq!(config.volume_bar_width, 100.0);
        assert_eq!(config.initial_volume, 1.0);
        assert_eq!(config.allowed_extensions, vec!["mp3", "wav", "flac", "ogg"]);
    }

    #[test]
    fn test_load_partial_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
initial_volume = 0.5

[window]
title = "Test Player"
"#;
        write!(temp_file, "{}", config_content).unwrap();

        let config = PlayerConfig::load(temp_file.path()).unwrap();
        assert_eq!(config.initial_volume, 0.5);
        assert_eq!(config.window.title, "Test Player");
        assert_eq!(config.window.width, 390.0);
        assert_eq!(config.volume_bar_width, 100.0);
    }

    #[test]
    fn test_load_sanitizes_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
initial_volume = 3.0
volume_bar_width = -10.0
position_poll_ms = 0
allowed_extensions = [".MP3", ""]
"#;
        write!(temp_file, "{}", config_content).unwrap();

        let config = PlayerConfig::load(temp_file.path()).unwrap();
        assert_eq!(config.initial_volume, 1.0);
        assert_eq!(config.volume_bar_width, 100.0);
        assert_eq!(config.position_poll_ms, 16);
        assert_eq!(config.allowed_extensions, vec!["mp3"]);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = PlayerConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: PlayerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_discoverer_timeout() {
        let config = PlayerConfig::default();
        assert_eq!(config.discoverer_timeout(), Some(Duration::from_millis(1000)));

        let config = PlayerConfig {
            discoverer_timeout_ms: 0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.discoverer_timeout(), None);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "initial_volume = [").unwrap();

        let result = PlayerConfig::load(temp_file.path());
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = PlayerConfig::load(Path::new("/nonexistent/scrubplayer/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontChoice {
    ScreenBold,
    Courier,
    HelveticaMono,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_line_numbers")]
    pub line_numbers_enabled: bool,

    #[serde(default)]
    pub word_wrap_enabled: bool,

    #[serde(default = "default_highlighting")]
    pub highlighting_enabled: bool,

    #[serde(default)]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_font")]
    pub font: FontChoice,

    #[serde(default = "default_font_size")]
    pub font_size: u32,
}

fn default_line_numbers() -> bool {
    true
}

fn default_highlighting() -> bool {
    true
}

fn default_font() -> FontChoice {
    FontChoice::Courier
}

fn default_font_size() -> u32 {
    14
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            line_numbers_enabled: default_line_numbers(),
            word_wrap_enabled: false,
            highlighting_enabled: default_highlighting(),
            theme_mode: ThemeMode::default(),
            font: default_font(),
            font_size: default_font_size(),
        }
    }
}

impl AppSettings {
    /// Load settings from the user config directory, or defaults.
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            let default = Self::default();
            if let Err(e) = default.save() {
                log::warn!("Could not write default settings: {}", e);
            }
            return default;
        }
        Self::load_from(&config_path)
    }

    /// Load settings from `path`, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Failed to read settings {}: {}. Using defaults.", path.display(), e);
                return Self::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse settings: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Save settings to the user config directory
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), AppError> {
        if !(8..=72).contains(&self.font_size) {
            return Err(AppError::Settings(format!(
                "font size {} out of range",
                self.font_size
            )));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::debug!("Settings saved to {}", path.display());

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("shaderpad");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.font_size, 14);
        assert!(settings.line_numbers_enabled);
        assert!(!settings.word_wrap_enabled);
        assert!(settings.highlighting_enabled);
        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert_eq!(settings.font, FontChoice::Courier);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            theme_mode: ThemeMode::Dark,
            highlighting_enabled: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Dark\""));
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"line_numbers_enabled": false}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.font_size, 14);
        assert!(settings.highlighting_enabled);
        assert!(!settings.line_numbers_enabled);
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings {
            word_wrap_enabled: true,
            font: FontChoice::ScreenBold,
            font_size: 18,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();

        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_rejects_bad_font_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let settings = AppSettings {
            font_size: 2,
            ..Default::default()
        };

        let err = settings.save_to(&path).unwrap_err();
        assert!(matches!(err, AppError::Settings(_)));
        assert!(!path.exists());
    }
}

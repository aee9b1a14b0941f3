use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::global_constants::{
    APPLICATION_DIRECTORY_NAME, DEFAULT_OCR_LANGUAGE, DEFAULT_TOAST_DURATION_MS,
    LOG_TAG_SETTINGS, SETTINGS_FILE_NAME,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

/// Read-only configuration. The file is optional and is never written back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default = "default_ocr_language")]
    pub ocr_language: String,
    #[serde(default = "default_camera_command")]
    pub camera_command: Vec<String>,
    #[serde(default)]
    pub photo_directory: Option<PathBuf>,
    #[serde(default)]
    pub camera_permission_preapproved: bool,
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

fn default_ocr_language() -> String {
    DEFAULT_OCR_LANGUAGE.to_string()
}

fn default_toast_duration_ms() -> u64 {
    DEFAULT_TOAST_DURATION_MS
}

fn default_camera_command() -> Vec<String> {
    let command: &[&str] = if cfg!(target_os = "macos") {
        &["imagesnap", "-w", "1", "{output}"]
    } else if cfg!(target_os = "linux") {
        &["fswebcam", "--no-banner", "-r", "1280x720", "{output}"]
    } else {
        &[]
    };

    command.iter().map(|part| part.to_string()).collect()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            ocr_language: default_ocr_language(),
            camera_command: default_camera_command(),
            photo_directory: None,
            camera_permission_preapproved: false,
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "{} No settings file at {:?}, using defaults",
                LOG_TAG_SETTINGS,
                settings_path
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("{} Loaded settings from {:?}", LOG_TAG_SETTINGS, settings_path);
        log::debug!("{} OCR language: {}", LOG_TAG_SETTINGS, settings.ocr_language);
        log::debug!("{} Camera command: {:?}", LOG_TAG_SETTINGS, settings.camera_command);

        Ok(settings)
    }

    pub fn resolve_photo_directory(&self) -> PathBuf {
        self.photo_directory
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(APPLICATION_DIRECTORY_NAME))
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(APPLICATION_DIRECTORY_NAME);

        Ok(config_dir.join(SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("leitura-settings-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn test_theme_mode_default_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn test_theme_mode_deserialization() {
        let theme: ThemeMode = serde_json::from_str("\"Light\"").unwrap();
        assert_eq!(theme, ThemeMode::Light);
    }

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.ocr_language, "eng");
        assert_eq!(settings.toast_duration_ms, 2000);
        assert!(settings.photo_directory.is_none());
        assert!(!settings.camera_permission_preapproved);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_default_camera_command_targets_output_placeholder() {
        let settings = UserSettings::default();

        assert_eq!(settings.camera_command.first().map(String::as_str), Some("fswebcam"));
        assert_eq!(settings.camera_command.last().map(String::as_str), Some("{output}"));
    }

    #[test]
    fn test_partial_file_fills_missing_fields_with_defaults() {
        let json = r#"{ "ocr_language": "por", "theme_mode": "Light" }"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.ocr_language, "por");
        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert_eq!(settings.toast_duration_ms, 2000);
        assert_eq!(settings.camera_command, default_camera_command());
    }

    #[test]
    fn test_load_from_missing_path_returns_defaults() {
        let path = scratch_file("settings.json");

        let settings = UserSettings::load_from_path(&path).unwrap();

        assert_eq!(settings, UserSettings::default());
        assert!(!path.exists());
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_from_path_reads_file() {
        let path = scratch_file("settings.json");
        std::fs::write(
            &path,
            r#"{ "camera_command": ["snap", "{output}"], "photo_directory": "/tmp/photos" }"#,
        )
        .unwrap();

        let settings = UserSettings::load_from_path(&path).unwrap();

        assert_eq!(settings.camera_command, vec!["snap", "{output}"]);
        assert_eq!(settings.resolve_photo_directory(), PathBuf::from("/tmp/photos"));
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_load_from_invalid_file_is_an_error() {
        let path = scratch_file("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(UserSettings::load_from_path(&path).is_err());
        std::fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_resolve_photo_directory_defaults_to_temp() {
        let settings = UserSettings::default();

        assert_eq!(
            settings.resolve_photo_directory(),
            std::env::temp_dir().join("leitura-descomplicada")
        );
    }
}

//! Application Configuration
//!
//! User settings and preferences stored in TOML format.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::camera::CameraConfig;
use crate::pipeline::PipelineConfig;
use crate::translate::DEFAULT_ENDPOINTS;
use crate::vision::classes::{ClassTable, DEFAULT_SENSITIVE, DEFAULT_TEXTY};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Camera settings
    pub camera: CameraSettings,
    /// Live pipeline settings
    pub pipeline: PipelineSettings,
    /// Speech output settings
    pub speech: SpeechSettings,
    /// Translation settings
    pub translate: TranslateSettings,
    /// Detection class behavior lists
    pub classes: ClassSettings,
}

/// Camera-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Preferred frame width
    pub ideal_width: u32,
    /// Preferred frame height
    pub ideal_height: u32,
    /// Prefer a rear-facing camera when available
    pub prefer_rear_facing: bool,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            ideal_width: 1280,
            ideal_height: 720,
            prefer_rear_facing: true,
        }
    }
}

/// Live pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineSettings {
    /// Minimum spacing between OCR attempts in milliseconds
    pub ocr_cooldown_ms: u64,
    /// Language hint for the OCR provider
    pub ocr_language: String,
    /// Read recognized text aloud
    pub speech_enabled: bool,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            ocr_cooldown_ms: 1500,
            ocr_language: "eng".to_string(),
            speech_enabled: false,
        }
    }
}

/// Speech output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechSettings {
    /// Language tag for composed utterances
    pub language: String,
    /// Playback rate multiplier
    pub rate: f32,
    /// Voice pitch multiplier
    pub pitch: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
            rate: 1.0,
            pitch: 1.05,
        }
    }
}

/// Translation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslateSettings {
    /// Endpoints tried in order until one succeeds
    pub endpoints: Vec<String>,
    /// Default target language code
    pub default_target: String,
}

impl Default for TranslateSettings {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            default_target: "es".to_string(),
        }
    }
}

/// Detection class behavior lists
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassSettings {
    /// Classes eligible for the OCR path
    pub texty: Vec<String>,
    /// Classes rendered with the warning overlay color
    pub sensitive: Vec<String>,
}

impl Default for ClassSettings {
    fn default() -> Self {
        Self {
            texty: DEFAULT_TEXTY.iter().map(|s| s.to_string()).collect(),
            sensitive: DEFAULT_SENSITIVE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// Build the runtime pipeline configuration from these settings
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            camera: CameraConfig {
                ideal_width: self.camera.ideal_width,
                ideal_height: self.camera.ideal_height,
                prefer_rear_facing: self.camera.prefer_rear_facing,
            },
            ocr_cooldown: Duration::from_millis(self.pipeline.ocr_cooldown_ms),
            ocr_language: self.pipeline.ocr_language.clone(),
            speech_enabled: self.pipeline.speech_enabled,
            speech_language: self.speech.language.clone(),
            speech_rate: self.speech.rate,
            speech_pitch: self.speech.pitch,
            classes: ClassTable::from_lists(&self.classes.texty, &self.classes.sensitive),
        }
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "smartvision", "SmartVision")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();

        assert_eq!(config.camera.ideal_width, 1280);
        assert_eq!(config.camera.ideal_height, 720);
        assert!(config.camera.prefer_rear_facing);

        assert_eq!(config.pipeline.ocr_cooldown_ms, 1500);
        assert_eq!(config.pipeline.ocr_language, "eng");
        assert!(!config.pipeline.speech_enabled);

        assert_eq!(config.speech.language, "en-US");
        assert!((config.speech.rate - 1.0).abs() < 0.01);
        assert!((config.speech.pitch - 1.05).abs() < 0.01);

        assert_eq!(config.translate.endpoints.len(), 3);
        assert_eq!(config.translate.default_target, "es");

        assert!(config.classes.texty.contains(&"book".to_string()));
        assert!(config.classes.sensitive.contains(&"knife".to_string()));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = AppConfig::default();

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.camera.ideal_width, parsed.camera.ideal_width);
        assert_eq!(config.pipeline.ocr_cooldown_ms, parsed.pipeline.ocr_cooldown_ms);
        assert_eq!(config.translate.endpoints, parsed.translate.endpoints);
        assert_eq!(config.classes.texty, parsed.classes.texty);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [pipeline]
            ocr_cooldown_ms = 3000
            "#,
        )
        .unwrap();

        assert_eq!(parsed.pipeline.ocr_cooldown_ms, 3000);
        assert_eq!(parsed.pipeline.ocr_language, "eng");
        assert_eq!(parsed.camera.ideal_width, 1280);
    }

    #[test]
    fn test_pipeline_config_conversion() {
        let mut config = AppConfig::default();
        config.pipeline.ocr_cooldown_ms = 2000;
        config.pipeline.speech_enabled = true;
        config.classes.texty = vec!["badge".to_string()];
        config.classes.sensitive = vec![];

        let pipeline = config.pipeline_config();
        assert_eq!(pipeline.ocr_cooldown, Duration::from_millis(2000));
        assert!(pipeline.speech_enabled);
        assert!(pipeline.classes.behavior("badge").texty);
        assert!(!pipeline.classes.behavior("book").texty);
    }

    #[test]
    fn test_speech_rate_and_pitch_reach_pipeline_config() {
        let mut config = AppConfig::default();
        config.speech.rate = 0.8;
        config.speech.pitch = 2.0;

        let pipeline = config.pipeline_config();
        assert!((pipeline.speech_rate - 0.8).abs() < f32::EPSILON);
        assert!((pipeline.speech_pitch - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_save_and_load_config() {
        let config = AppConfig::default();

        let temp_file = NamedTempFile::new().unwrap();
        save_config(&config, temp_file.path()).unwrap();
        let loaded = load_config(temp_file.path()).unwrap();

        assert_eq!(config.pipeline.ocr_cooldown_ms, loaded.pipeline.ocr_cooldown_ms);
        assert_eq!(config.translate.endpoints, loaded.translate.endpoints);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "this is not valid toml {{{{").unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
    }
}

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::models::{BorderPadding, Thresholds};
use crate::global_constants::{self, LOG_TAG_SETTINGS};

fn default_ocr_language() -> String {
    global_constants::DEFAULT_OCR_LANGUAGE.to_string()
}

fn default_text_recognition_timeout_ms() -> u64 {
    global_constants::DEFAULT_TEXT_RECOGNITION_TIMEOUT_MS
}

fn default_endpoint_url() -> String {
    global_constants::DEFAULT_UPLOAD_ENDPOINT_URL.to_string()
}

fn default_upload_preset() -> String {
    global_constants::DEFAULT_UPLOAD_PRESET.to_string()
}

fn default_chunk_size_bytes() -> usize {
    global_constants::DEFAULT_UPLOAD_CHUNK_SIZE_BYTES
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadSettings {
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    #[serde(default = "default_upload_preset")]
    pub upload_preset: String,
    #[serde(default = "default_chunk_size_bytes")]
    pub chunk_size_bytes: usize,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            upload_preset: default_upload_preset(),
            chunk_size_bytes: default_chunk_size_bytes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GateSettings {
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub border_padding: BorderPadding,
    #[serde(default = "default_ocr_language")]
    pub ocr_language: String,
    #[serde(default = "default_text_recognition_timeout_ms")]
    pub text_recognition_timeout_ms: u64,
    #[serde(default)]
    pub upload: UploadSettings,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            border_padding: BorderPadding::default(),
            ocr_language: default_ocr_language(),
            text_recognition_timeout_ms: default_text_recognition_timeout_ms(),
            upload: UploadSettings::default(),
        }
    }
}

impl GateSettings {
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
            let default_settings = Self::default();
            default_settings.save_to_path(settings_path)?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read settings from {:?}", settings_path))?;
        let settings: GateSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings in {:?}", settings_path))?;

        settings.ensure_consistent()?;

        log::info!("{} Loaded settings from {:?}", LOG_TAG_SETTINGS, settings_path);
        log::debug!(
            "{} sharpness_threshold={}, min_text_length={}, max_file_bytes={}",
            LOG_TAG_SETTINGS,
            settings.thresholds.sharpness_threshold,
            settings.thresholds.min_text_length,
            settings.thresholds.max_file_bytes
        );

        Ok(settings)
    }

    pub fn save_to_path(&self, settings_path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(settings_path, contents)?;

        log::info!("{} Saved settings to {:?}", LOG_TAG_SETTINGS, settings_path);
        Ok(())
    }

    pub fn text_recognition_timeout(&self) -> Duration {
        Duration::from_millis(self.text_recognition_timeout_ms)
    }

    fn ensure_consistent(&self) -> anyhow::Result<()> {
        self.thresholds
            .ensure_consistent()
            .context("Invalid thresholds in settings")?;

        if self.ocr_language.trim().is_empty() {
            anyhow::bail!("ocr_language must not be empty");
        }

        if self.text_recognition_timeout_ms == 0 {
            anyhow::bail!("text_recognition_timeout_ms must be greater than zero");
        }

        Ok(())
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_temp_dir(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("image-quality-gate-{}-{}", label, uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_default_settings_values() {
        let settings = GateSettings::default();

        assert_eq!(settings.thresholds.sharpness_threshold, 10.0);
        assert_eq!(settings.border_padding, BorderPadding::Reflect);
        assert_eq!(settings.ocr_language, "eng");
        assert_eq!(settings.text_recognition_timeout(), Duration::from_secs(30));
        assert_eq!(settings.upload.upload_preset, "react_preset");
    }

    #[test]
    fn test_deserialization_with_only_thresholds_fills_defaults() {
        let json = r#"{
            "thresholds": { "sharpness_threshold": 100.0, "min_text_length": 8 },
            "border_padding": "Zero"
        }"#;

        let settings: GateSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.thresholds.sharpness_threshold, 100.0);
        assert_eq!(settings.thresholds.min_text_length, 8);
        assert_eq!(settings.border_padding, BorderPadding::Zero);
        assert_eq!(settings.ocr_language, "eng");
        assert_eq!(settings.upload, UploadSettings::default());
    }

    #[test]
    fn test_load_from_missing_path_writes_defaults() {
        let temp_dir = unique_temp_dir("missing");
        let settings_path = temp_dir.join("settings.json");

        let settings = GateSettings::load_from_path(&settings_path).unwrap();

        assert_eq!(settings, GateSettings::default());
        assert!(settings_path.exists());

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = unique_temp_dir("roundtrip");
        let settings_path = temp_dir.join("settings.json");

        let mut original = GateSettings::default();
        original.thresholds.sharpness_threshold = 55.5;
        original.ocr_language = "deu".to_string();
        original.text_recognition_timeout_ms = 1500;
        original.save_to_path(&settings_path).unwrap();

        let loaded = GateSettings::load_from_path(&settings_path).unwrap();

        assert_eq!(loaded, original);

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_load_rejects_negative_sharpness_threshold() {
        let temp_dir = unique_temp_dir("invalid");
        let settings_path = temp_dir.join("settings.json");
        std::fs::create_dir_all(&temp_dir).unwrap();
        std::fs::write(
            &settings_path,
            r#"{ "thresholds": { "sharpness_threshold": -3.0 } }"#,
        )
        .unwrap();

        let result = GateSettings::load_from_path(&settings_path);

        assert!(result.is_err());

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_load_rejects_zero_timeout() {
        let temp_dir = unique_temp_dir("timeout");
        let settings_path = temp_dir.join("settings.json");
        std::fs::create_dir_all(&temp_dir).unwrap();
        std::fs::write(&settings_path, r#"{ "text_recognition_timeout_ms": 0 }"#).unwrap();

        assert!(GateSettings::load_from_path(&settings_path).is_err());

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::global_constants;

fn default_min_text_length() -> usize {
    global_constants::DEFAULT_MIN_TEXT_LENGTH
}

fn default_max_file_bytes() -> usize {
    global_constants::DEFAULT_MAX_FILE_BYTES
}

fn default_allowed_mime_types() -> BTreeSet<String> {
    [global_constants::MIME_TYPE_JPEG, global_constants::MIME_TYPE_PNG]
        .iter()
        .map(|mime_type| mime_type.to_string())
        .collect()
}

/// Read-only limits shared by every gate pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Thresholds {
    pub sharpness_threshold: f64,
    #[serde(default = "default_min_text_length")]
    pub min_text_length: usize,
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: usize,
    #[serde(default = "default_allowed_mime_types")]
    pub allowed_mime_types: BTreeSet<String>,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::with_sharpness_threshold(global_constants::DEFAULT_SHARPNESS_THRESHOLD)
    }
}

impl Thresholds {
    pub fn with_sharpness_threshold(sharpness_threshold: f64) -> Self {
        Self {
            sharpness_threshold,
            min_text_length: default_min_text_length(),
            max_file_bytes: default_max_file_bytes(),
            allowed_mime_types: default_allowed_mime_types(),
        }
    }

    pub fn allows_mime_type(&self, mime_type: &str) -> bool {
        let normalized = mime_type.trim().to_ascii_lowercase();
        self.allowed_mime_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(&normalized))
    }

    pub fn ensure_consistent(&self) -> anyhow::Result<()> {
        if !self.sharpness_threshold.is_finite() || self.sharpness_threshold < 0.0 {
            anyhow::bail!(
                "sharpness_threshold must be a finite non-negative number, got {}",
                self.sharpness_threshold
            );
        }

        if self.max_file_bytes == 0 {
            anyhow::bail!("max_file_bytes must be greater than zero");
        }

        if self.allowed_mime_types.is_empty() {
            anyhow::bail!("allowed_mime_types must list at least one MIME type");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_allow_jpeg_and_png_up_to_one_mebibyte() {
        let thresholds = Thresholds::default();

        assert_eq!(thresholds.max_file_bytes, 1024 * 1024);
        assert_eq!(thresholds.min_text_length, 5);
        assert!(thresholds.allows_mime_type("image/jpeg"));
        assert!(thresholds.allows_mime_type("image/png"));
        assert!(!thresholds.allows_mime_type("image/gif"));
    }

    #[test]
    fn test_allows_mime_type_ignores_case_and_surrounding_whitespace() {
        let thresholds = Thresholds::default();

        assert!(thresholds.allows_mime_type(" IMAGE/PNG "));
    }

    #[test]
    fn test_ensure_consistent_rejects_negative_and_nan_sharpness_threshold() {
        assert!(Thresholds::with_sharpness_threshold(-1.0)
            .ensure_consistent()
            .is_err());
        assert!(Thresholds::with_sharpness_threshold(f64::NAN)
            .ensure_consistent()
            .is_err());
        assert!(Thresholds::with_sharpness_threshold(100.0)
            .ensure_consistent()
            .is_ok());
    }

    #[test]
    fn test_ensure_consistent_rejects_empty_mime_set_and_zero_size() {
        let mut thresholds = Thresholds::default();
        thresholds.allowed_mime_types.clear();
        assert!(thresholds.ensure_consistent().is_err());

        let mut thresholds = Thresholds::default();
        thresholds.max_file_bytes = 0;
        assert!(thresholds.ensure_consistent().is_err());
    }

    #[test]
    fn test_deserialization_fills_missing_fields_with_defaults() {
        let json = r#"{ "sharpness_threshold": 100.0 }"#;

        let thresholds: Thresholds = serde_json::from_str(json).unwrap();

        assert_eq!(thresholds.sharpness_threshold, 100.0);
        assert_eq!(thresholds.min_text_length, 5);
        assert_eq!(thresholds.allowed_mime_types.len(), 2);
    }
}

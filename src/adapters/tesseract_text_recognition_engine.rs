use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use rusty_tesseract::{Args, Image as TesseractImage};
use tempfile::NamedTempFile;

use crate::core::interfaces::adapters::TextRecognitionEngine;
use crate::core::models::TextResult;
use crate::global_constants::{LOG_TAG_TESSERACT, TEMP_FILE_PREFIX};

const FALLBACK_EXTENSION: &str = "png";

pub struct TesseractTextRecognitionEngine {
    temp_dir: PathBuf,
}

impl TesseractTextRecognitionEngine {
    pub fn build() -> Result<Self> {
        Self::build_in(std::env::temp_dir())
    }

    /// Stages images for Tesseract under `temp_dir` instead of the system temp dir.
    pub fn build_in(temp_dir: impl Into<PathBuf>) -> Result<Self> {
        let temp_dir = temp_dir.into();
        log::info!(
            "{} Initializing Tesseract text recognition, staging in {:?}",
            LOG_TAG_TESSERACT,
            temp_dir
        );
        std::fs::create_dir_all(&temp_dir)
            .with_context(|| format!("Failed to create OCR staging dir {:?}", temp_dir))?;
        Ok(Self { temp_dir })
    }

    fn extension_for(encoded_bytes: &[u8]) -> &'static str {
        image::guess_format(encoded_bytes)
            .ok()
            .and_then(|format| format.extensions_str().first().copied())
            .unwrap_or(FALLBACK_EXTENSION)
    }

    /// The returned file is deleted when dropped, including when the
    /// recognition future is cancelled.
    async fn save_bytes_to_temp_file(&self, encoded_bytes: &[u8]) -> Result<NamedTempFile> {
        let suffix = format!(".{}", Self::extension_for(encoded_bytes));
        let temp_file = tempfile::Builder::new()
            .prefix(TEMP_FILE_PREFIX)
            .suffix(&suffix)
            .tempfile_in(&self.temp_dir)
            .context("Failed to create temp file for OCR")?;

        log::debug!(
            "{} Saving image to temp: {:?}",
            LOG_TAG_TESSERACT,
            temp_file.path()
        );

        tokio::fs::write(temp_file.path(), encoded_bytes)
            .await
            .context("Failed to write image for OCR")?;
        Ok(temp_file)
    }

    fn run_tesseract(image_path: &Path, language: &str) -> Result<String> {
        let tesseract_image = TesseractImage::from_path(image_path)
            .map_err(|error| anyhow::anyhow!("Failed to create Tesseract image: {:?}", error))?;

        let args = Args {
            lang: language.to_string(),
            ..Args::default()
        };

        rusty_tesseract::image_to_string(&tesseract_image, &args)
            .map_err(|error| anyhow::anyhow!("Failed to extract text from image: {:?}", error))
    }
}

#[async_trait]
impl TextRecognitionEngine for TesseractTextRecognitionEngine {
    async fn recognize_text(&self, encoded_bytes: &[u8], language: &str) -> Result<TextResult> {
        log::info!(
            "{} Starting text extraction ({} bytes, lang={})",
            LOG_TAG_TESSERACT,
            encoded_bytes.len(),
            language
        );

        let temp_file = self.save_bytes_to_temp_file(encoded_bytes).await?;

        let task_path = temp_file.path().to_path_buf();
        let task_language = language.to_string();
        let extraction =
            tokio::task::spawn_blocking(move || Self::run_tesseract(&task_path, &task_language))
                .await;

        if let Err(error) = temp_file.close() {
            log::warn!("{} Failed to remove temp file: {}", LOG_TAG_TESSERACT, error);
        }

        let extracted_text = extraction.context("Tesseract task did not complete")??;

        log::info!(
            "{} Text extraction complete. Extracted {} characters",
            LOG_TAG_TESSERACT,
            extracted_text.chars().count()
        );
        log::debug!("{} Extracted text: {}", LOG_TAG_TESSERACT, extracted_text);

        Ok(TextResult::new(extracted_text))
    }
}

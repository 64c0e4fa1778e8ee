use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::TextResult;

/// Recognizes text in the original encoded bytes, not the decoded raster.
#[async_trait]
pub trait TextRecognitionEngine: Send + Sync {
    async fn recognize_text(&self, encoded_bytes: &[u8], language: &str) -> Result<TextResult>;
}

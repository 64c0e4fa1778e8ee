use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::{Stream, StreamExt};

use crate::core::interfaces::adapters::{ImageHostingService, ProgressCallback};
use crate::core::models::{CandidateImage, UploadProgress};
use crate::global_constants::{self, LOG_TAG_UPLOAD};
use crate::settings::UploadSettings;

pub struct CloudinaryImageHostingService {
    client: reqwest::Client,
    endpoint_url: String,
    upload_preset: String,
    chunk_size_bytes: usize,
}

impl CloudinaryImageHostingService {
    pub fn build(upload_settings: &UploadSettings) -> Result<Self> {
        log::info!(
            "{} Initializing upload client for {}",
            LOG_TAG_UPLOAD,
            upload_settings.endpoint_url
        );

        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            endpoint_url: upload_settings.endpoint_url.clone(),
            upload_preset: upload_settings.upload_preset.clone(),
            chunk_size_bytes: upload_settings.chunk_size_bytes.max(1),
        })
    }

    fn file_name_for(candidate: &CandidateImage) -> String {
        let extension = image::ImageFormat::from_mime_type(&candidate.meta.mime_type)
            .and_then(|format| format.extensions_str().first().copied())
            .unwrap_or("bin");
        format!("upload.{}", extension)
    }
}

/// Streams `bytes` in chunks, reporting cumulative progress as each chunk is
/// handed to the HTTP body.
fn build_progress_stream(
    bytes: Arc<[u8]>,
    chunk_size_bytes: usize,
    on_progress: ProgressCallback,
) -> impl Stream<Item = std::io::Result<Vec<u8>>> + Send + 'static {
    let total_bytes = bytes.len() as u64;
    let chunk_size_bytes = chunk_size_bytes.max(1);
    let chunk_count = bytes.len().div_ceil(chunk_size_bytes);
    let mut loaded_bytes = 0u64;

    futures::stream::iter(0..chunk_count).map(move |chunk_index| {
        let start = chunk_index * chunk_size_bytes;
        let end = (start + chunk_size_bytes).min(bytes.len());
        let chunk = bytes[start..end].to_vec();

        loaded_bytes += chunk.len() as u64;
        on_progress(UploadProgress::new(loaded_bytes, total_bytes));

        Ok::<Vec<u8>, std::io::Error>(chunk)
    })
}

#[async_trait]
impl ImageHostingService for CloudinaryImageHostingService {
    async fn upload_image(
        &self,
        candidate: &CandidateImage,
        on_progress: ProgressCallback,
    ) -> Result<serde_json::Value> {
        let total_bytes = candidate.encoded_bytes().len() as u64;
        log::info!(
            "{} Uploading {} bytes to {}",
            LOG_TAG_UPLOAD,
            total_bytes,
            self.endpoint_url
        );

        let body_stream =
            build_progress_stream(candidate.shared_bytes(), self.chunk_size_bytes, on_progress);
        let file_part = reqwest::multipart::Part::stream_with_length(
            reqwest::Body::wrap_stream(body_stream),
            total_bytes,
        )
        .file_name(Self::file_name_for(candidate))
        .mime_str(&candidate.meta.mime_type)
        .context("Invalid MIME type for upload")?;

        let form = reqwest::multipart::Form::new()
            .part(global_constants::UPLOAD_FILE_FIELD, file_part)
            .text(
                global_constants::UPLOAD_PRESET_FIELD,
                self.upload_preset.clone(),
            );

        let response = self
            .client
            .post(&self.endpoint_url)
            .multipart(form)
            .send()
            .await
            .context("Upload request failed")?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .context("Failed to read upload response")?;
        log::debug!("{} upload response: {}", LOG_TAG_UPLOAD, response_text);

        if !status.is_success() {
            anyhow::bail!("Upload endpoint returned {}: {}", status, response_text);
        }

        let payload: serde_json::Value =
            serde_json::from_str(&response_text).context("Upload response was not valid JSON")?;

        log::info!("{} Image uploaded successfully", LOG_TAG_UPLOAD);
        Ok(payload)
    }
}

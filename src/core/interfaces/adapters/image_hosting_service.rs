use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::{CandidateImage, UploadProgress};

pub type ProgressCallback = Arc<dyn Fn(UploadProgress) + Send + Sync>;

#[async_trait]
pub trait ImageHostingService: Send + Sync {
    async fn upload_image(
        &self,
        candidate: &CandidateImage,
        on_progress: ProgressCallback,
    ) -> Result<serde_json::Value>;
}

use std::sync::Arc;

use crate::core::interfaces::adapters::{ImageHostingService, ProgressCallback};
use crate::core::models::{CandidateImage, QualityVerdict, RejectReason};
use crate::global_constants::{self, LOG_TAG_UPLOAD};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UploadError {
    #[error("upload refused, verdict was Reject ({reason:?})")]
    NotAccepted { reason: Option<RejectReason> },

    #[error("upload failed: {0}")]
    Failed(String),
}

impl UploadError {
    pub fn status_line(&self) -> String {
        match self {
            UploadError::NotAccepted { .. } => global_constants::STATUS_UPLOAD_REFUSED.to_string(),
            UploadError::Failed(_) => global_constants::STATUS_UPLOAD_FAILED.to_string(),
        }
    }
}

/// Forwards an image to the hosting collaborator only when its verdict accepts it.
pub struct UploadGate {
    image_hosting_service: Arc<dyn ImageHostingService>,
}

impl UploadGate {
    pub fn build(image_hosting_service: Arc<dyn ImageHostingService>) -> Self {
        Self {
            image_hosting_service,
        }
    }

    pub async fn upload_if_accepted(
        &self,
        verdict: &QualityVerdict,
        candidate: &CandidateImage,
        on_progress: ProgressCallback,
    ) -> Result<serde_json::Value, UploadError> {
        if !verdict.is_accepted() {
            log::info!(
                "{} not uploading, verdict rejected with {:?}",
                LOG_TAG_UPLOAD,
                verdict.reject_reason
            );
            return Err(UploadError::NotAccepted {
                reason: verdict.reject_reason,
            });
        }

        self.image_hosting_service
            .upload_image(candidate, on_progress)
            .await
            .map_err(|error| {
                log::error!("{} upload failed: {:#}", LOG_TAG_UPLOAD, error);
                UploadError::Failed(format!("{:#}", error))
            })
    }
}

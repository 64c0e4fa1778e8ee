use std::sync::Arc;

use crate::adapters::{
    CloudinaryImageHostingService, ImageRsDecoder, LaplacianSharpnessEngine,
    TesseractTextRecognitionEngine,
};
use crate::core::interfaces::adapters::ProgressCallback;
use crate::core::models::{CandidateImage, GateError, QualityVerdict};
use crate::core::orchestrators::{QualityGate, QualityGateSession, UploadError, UploadGate};
use crate::settings::GateSettings;

/// Wires the concrete adapters into a gate session and an upload gate.
pub struct GateApp {
    session: QualityGateSession,
    upload_gate: UploadGate,
}

impl GateApp {
    pub fn build(settings: &GateSettings) -> anyhow::Result<Self> {
        log::info!("[APP] Initializing quality gate");

        let text_recognition_engine = Arc::new(TesseractTextRecognitionEngine::build()?);
        let quality_gate = QualityGate::build(
            Arc::new(ImageRsDecoder::initialize()),
            Arc::new(LaplacianSharpnessEngine::build(settings.border_padding)),
            text_recognition_engine,
            settings.thresholds.clone(),
            settings.ocr_language.clone(),
            settings.text_recognition_timeout(),
        );

        let image_hosting_service = Arc::new(CloudinaryImageHostingService::build(&settings.upload)?);

        Ok(Self {
            session: QualityGateSession::build(quality_gate),
            upload_gate: UploadGate::build(image_hosting_service),
        })
    }

    pub async fn assess(&self, candidate: CandidateImage) -> Result<QualityVerdict, GateError> {
        self.session.submit(candidate).await
    }

    pub async fn upload(
        &self,
        verdict: &QualityVerdict,
        candidate: &CandidateImage,
        on_progress: ProgressCallback,
    ) -> Result<serde_json::Value, UploadError> {
        self.upload_gate
            .upload_if_accepted(verdict, candidate, on_progress)
            .await
    }
}

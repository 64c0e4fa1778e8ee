use std::sync::Arc;
use std::time::Duration;

use crate::core::analysis;
use crate::core::interfaces::adapters::TextRecognitionEngine;
use crate::core::interfaces::ports::{ImageDecoder, SharpnessEngine};
use crate::core::models::{
    CandidateImage, GateError, QualityVerdict, SharpnessScore, TextObservation, Thresholds,
};
use crate::global_constants::LOG_TAG_QUALITY_GATE;

use super::AnalysisHandle;

/// Runs one validation → (sharpness ‖ text) → decision pass per image.
#[derive(Clone)]
pub struct QualityGate {
    image_decoder: Arc<dyn ImageDecoder>,
    sharpness_engine: Arc<dyn SharpnessEngine>,
    text_recognition_engine: Arc<dyn TextRecognitionEngine>,
    thresholds: Arc<Thresholds>,
    ocr_language: String,
    text_recognition_timeout: Duration,
}

impl QualityGate {
    pub fn build(
        image_decoder: Arc<dyn ImageDecoder>,
        sharpness_engine: Arc<dyn SharpnessEngine>,
        text_recognition_engine: Arc<dyn TextRecognitionEngine>,
        thresholds: Thresholds,
        ocr_language: String,
        text_recognition_timeout: Duration,
    ) -> Self {
        log::info!(
            "{} building gate: sharpness_threshold={}, min_text_length={}, text timeout={:?}",
            LOG_TAG_QUALITY_GATE,
            thresholds.sharpness_threshold,
            thresholds.min_text_length,
            text_recognition_timeout
        );

        Self {
            image_decoder,
            sharpness_engine,
            text_recognition_engine,
            thresholds: Arc::new(thresholds),
            ocr_language,
            text_recognition_timeout,
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Validates, then scores sharpness and recognizes text concurrently.
    ///
    /// Validation failures return before any task is spawned. A decode failure
    /// drops the text task's handle, which aborts it.
    pub async fn evaluate(&self, candidate: &CandidateImage) -> Result<QualityVerdict, GateError> {
        log::info!(
            "{} evaluating {} ({} bytes)",
            LOG_TAG_QUALITY_GATE,
            candidate.meta.mime_type,
            candidate.meta.size_bytes
        );

        analysis::validate(&candidate.meta, &self.thresholds)?;

        let sharpness_handle = self.spawn_sharpness_analysis(candidate);
        let text_handle = self.spawn_text_recognition(candidate);

        let sharpness = sharpness_handle.await.map_err(|error| {
            log::error!("{} sharpness analysis failed: {}", LOG_TAG_QUALITY_GATE, error);
            error
        })?;

        let text_observation = match text_handle.await {
            Ok(observation) => observation,
            Err(error) => {
                log::warn!("{} text task ended early: {}", LOG_TAG_QUALITY_GATE, error);
                TextObservation::unavailable(error.to_string())
            }
        };

        Ok(analysis::decide(sharpness, &text_observation, &self.thresholds))
    }

    pub fn start(&self, candidate: CandidateImage) -> AnalysisHandle<QualityVerdict> {
        let gate = self.clone();
        AnalysisHandle::from_join_handle(tokio::spawn(async move {
            gate.evaluate(&candidate).await
        }))
    }

    fn spawn_sharpness_analysis(&self, candidate: &CandidateImage) -> AnalysisHandle<SharpnessScore> {
        let image_decoder = Arc::clone(&self.image_decoder);
        let sharpness_engine = Arc::clone(&self.sharpness_engine);
        let encoded_bytes = candidate.shared_bytes();
        let mime_type = candidate.meta.mime_type.clone();

        AnalysisHandle::from_join_handle(tokio::task::spawn_blocking(move || {
            let raster = image_decoder.decode(&encoded_bytes, &mime_type)?;
            Ok(sharpness_engine.measure_sharpness(&raster))
        }))
    }

    fn spawn_text_recognition(&self, candidate: &CandidateImage) -> AnalysisHandle<TextObservation> {
        let text_recognition_engine = Arc::clone(&self.text_recognition_engine);
        let encoded_bytes = candidate.shared_bytes();
        let ocr_language = self.ocr_language.clone();
        let timeout = self.text_recognition_timeout;

        AnalysisHandle::from_join_handle(tokio::spawn(async move {
            let recognition = tokio::time::timeout(
                timeout,
                text_recognition_engine.recognize_text(&encoded_bytes, &ocr_language),
            )
            .await;

            let observation = match recognition {
                Ok(Ok(text_result)) => TextObservation::from_text_result(&text_result),
                Ok(Err(error)) => {
                    let recognition_error = GateError::Recognition(format!("{:#}", error));
                    log::warn!("{} {}", LOG_TAG_QUALITY_GATE, recognition_error);
                    TextObservation::unavailable(recognition_error.to_string())
                }
                Err(_) => {
                    let recognition_error =
                        GateError::Recognition(format!("timed out after {:?}", timeout));
                    log::warn!("{} {}", LOG_TAG_QUALITY_GATE, recognition_error);
                    TextObservation::unavailable(recognition_error.to_string())
                }
            };

            Ok(observation)
        }))
    }
}

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::AbortHandle;

use crate::core::models::{CandidateImage, GateError, QualityVerdict};
use crate::global_constants::LOG_TAG_SESSION;

use super::{AnalysisHandle, QualityGate};

/// Tracks the image a caller is currently interested in.
///
/// Each `submit` supersedes the previous pass: its task is aborted, and a pass
/// that finishes after being superseded reports `GateError::Superseded`
/// instead of a verdict.
pub struct QualityGateSession {
    quality_gate: QualityGate,
    current_generation: Arc<AtomicU64>,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl QualityGateSession {
    pub fn build(quality_gate: QualityGate) -> Self {
        Self {
            quality_gate,
            current_generation: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(None),
        }
    }

    pub fn quality_gate(&self) -> &QualityGate {
        &self.quality_gate
    }

    pub fn submit(&self, candidate: CandidateImage) -> AnalysisHandle<QualityVerdict> {
        // Generation stamp and in-flight slot change together under this lock.
        let mut in_flight = self.lock_in_flight();

        let generation = self.current_generation.fetch_add(1, Ordering::SeqCst) + 1;
        log::info!("{} submitting image as generation {}", LOG_TAG_SESSION, generation);

        let quality_gate = self.quality_gate.clone();
        let current_generation = Arc::clone(&self.current_generation);

        let join_handle = tokio::spawn(async move {
            let verdict = quality_gate.evaluate(&candidate).await;

            let latest_generation = current_generation.load(Ordering::SeqCst);
            if latest_generation != generation {
                log::info!(
                    "{} discarding result of generation {}, latest is {}",
                    LOG_TAG_SESSION,
                    generation,
                    latest_generation
                );
                return Err(GateError::Superseded);
            }

            verdict
        });

        if let Some(previous) = in_flight.replace(join_handle.abort_handle()) {
            log::debug!("{} aborting superseded analysis", LOG_TAG_SESSION);
            previous.abort();
        }

        AnalysisHandle::from_join_handle(join_handle)
    }

    pub fn cancel_current(&self) {
        let mut in_flight = self.lock_in_flight();
        self.current_generation.fetch_add(1, Ordering::SeqCst);
        if let Some(current) = in_flight.take() {
            log::info!("{} cancelling in-flight analysis", LOG_TAG_SESSION);
            current.abort();
        }
    }

    fn lock_in_flight(&self) -> std::sync::MutexGuard<'_, Option<AbortHandle>> {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

use crate::core::models::{
    QualityVerdict, RejectReason, SharpnessScore, TextObservation, Thresholds, VerdictOutcome,
};
use crate::global_constants::{self, LOG_TAG_DECISION};

/// Combines the sharpness score and the text observation into one verdict.
///
/// Both checks always contribute a status line, sharpness first. A blurry
/// image is rejected as `Blurry`; otherwise short recognized text downgrades
/// the verdict to `UnclearText`. A missing or failed text check never rejects.
pub fn decide(
    sharpness: SharpnessScore,
    text: &TextObservation,
    thresholds: &Thresholds,
) -> QualityVerdict {
    let mut status_lines = Vec::with_capacity(2);
    let mut reject_reason = None;

    if sharpness.is_below(thresholds.sharpness_threshold) {
        status_lines.push(global_constants::STATUS_BLURRY.to_string());
        reject_reason = Some(RejectReason::Blurry);
    } else {
        status_lines.push(global_constants::STATUS_SHARP.to_string());
    }

    match text {
        TextObservation::Detected(signal) if signal.length > thresholds.min_text_length => {
            status_lines.push(global_constants::STATUS_READABLE_TEXT.to_string());
        }
        TextObservation::Detected(_) => {
            status_lines.push(global_constants::STATUS_UNCLEAR_TEXT.to_string());
            reject_reason = reject_reason.or(Some(RejectReason::UnclearText));
        }
        TextObservation::NoText => {
            status_lines.push(global_constants::STATUS_NO_TEXT.to_string());
        }
        TextObservation::Unavailable { reason } => {
            log::warn!(
                "{} deciding on sharpness alone, text check unavailable: {}",
                LOG_TAG_DECISION,
                reason
            );
            status_lines.push(global_constants::STATUS_TEXT_UNDETERMINED.to_string());
        }
    }

    let outcome = match reject_reason {
        Some(_) => VerdictOutcome::Reject,
        None => VerdictOutcome::Accept,
    };

    log::info!(
        "{} sharpness={} threshold={} outcome={} reason={:?}",
        LOG_TAG_DECISION,
        sharpness,
        thresholds.sharpness_threshold,
        outcome,
        reject_reason
    );

    QualityVerdict {
        outcome,
        status_lines,
        reject_reason,
        sharpness,
        text: text.clone(),
    }
}

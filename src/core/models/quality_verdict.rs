use serde::Serialize;

use super::{SharpnessScore, TextObservation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerdictOutcome {
    Accept,
    Reject,
}

impl std::fmt::Display for VerdictOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerdictOutcome::Accept => write!(f, "Accept"),
            VerdictOutcome::Reject => write!(f, "Reject"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    Blurry,
    UnclearText,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::Blurry => write!(f, "Blurry"),
            RejectReason::UnclearText => write!(f, "UnclearText"),
        }
    }
}

/// Outcome of one decision. Status lines are in display order: the sharpness
/// line first, the text line second.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityVerdict {
    pub outcome: VerdictOutcome,
    pub status_lines: Vec<String>,
    pub reject_reason: Option<RejectReason>,
    pub sharpness: SharpnessScore,
    pub text: TextObservation,
}

impl QualityVerdict {
    pub fn is_accepted(&self) -> bool {
        self.outcome == VerdictOutcome::Accept
    }
}

mod candidate_image;
mod edge_response_buffer;
mod gate_error;
mod grayscale_buffer;
mod quality_verdict;
mod raster_image;
mod sharpness_score;
mod text_signal;
mod thresholds;
mod upload_progress;

pub use candidate_image::{CandidateImage, FileMeta};
pub use edge_response_buffer::{BorderPadding, EdgeResponseBuffer};
pub use gate_error::GateError;
pub use grayscale_buffer::GrayscaleBuffer;
pub use quality_verdict::{QualityVerdict, RejectReason, VerdictOutcome};
pub use raster_image::{ChannelLayout, RasterImage};
pub use sharpness_score::SharpnessScore;
pub use text_signal::{TextObservation, TextResult, TextSignal};
pub use thresholds::Thresholds;
pub use upload_progress::UploadProgress;

mod analysis_handle;
mod quality_gate;
mod quality_gate_session;
mod upload_gate;

pub use analysis_handle::AnalysisHandle;
pub use quality_gate::QualityGate;
pub use quality_gate_session::QualityGateSession;
pub use upload_gate::{UploadError, UploadGate};

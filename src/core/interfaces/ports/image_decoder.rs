use crate::core::models::{GateError, RasterImage};

pub trait ImageDecoder: Send + Sync {
    /// Decodes `encoded_bytes` as the declared `mime_type`; bytes of any other
    /// format fail with `GateError::Decode`.
    fn decode(&self, encoded_bytes: &[u8], mime_type: &str) -> Result<RasterImage, GateError>;
}

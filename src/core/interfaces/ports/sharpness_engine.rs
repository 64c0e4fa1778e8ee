use crate::core::models::{RasterImage, SharpnessScore};

pub trait SharpnessEngine: Send + Sync {
    fn measure_sharpness(&self, image: &RasterImage) -> SharpnessScore;
}

use crate::core::analysis;
use crate::core::interfaces::ports::SharpnessEngine;
use crate::core::models::{BorderPadding, RasterImage, SharpnessScore};
use crate::global_constants::LOG_TAG_SHARPNESS;

/// Grayscale, Laplacian, then population variance. Intermediate buffers live
/// only for the duration of one measurement.
pub struct LaplacianSharpnessEngine {
    padding: BorderPadding,
}

impl LaplacianSharpnessEngine {
    pub fn build(padding: BorderPadding) -> Self {
        log::debug!(
            "{} building Laplacian engine with {:?} padding",
            LOG_TAG_SHARPNESS,
            padding
        );
        Self { padding }
    }
}

impl SharpnessEngine for LaplacianSharpnessEngine {
    fn measure_sharpness(&self, image: &RasterImage) -> SharpnessScore {
        let gray = analysis::to_grayscale(image);
        let edges = analysis::laplacian(&gray, self.padding);
        let sharpness = analysis::score(&edges);

        log::info!(
            "{} {}x{} image scored {}",
            LOG_TAG_SHARPNESS,
            image.width(),
            image.height(),
            sharpness
        );

        sharpness
    }
}

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// How the Laplacian treats neighbours that fall outside the image.
///
/// `Reflect` mirrors around the edge pixel without repeating it
/// (`dcb|abcd|cba`), which keeps a flat image at zero response everywhere.
/// `Zero` treats outside pixels as black, so a flat bright image produces a
/// response along its border.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BorderPadding {
    #[default]
    Reflect,
    Zero,
}

/// Signed, unclamped Laplacian response, one sample per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeResponseBuffer {
    width: u32,
    height: u32,
    samples: Vec<i32>,
}

impl EdgeResponseBuffer {
    pub fn build_from_samples(width: u32, height: u32, samples: Vec<i32>) -> Result<Self> {
        let expected_len = width as usize * height as usize;
        if samples.len() != expected_len {
            anyhow::bail!(
                "edge response buffer for {}x{} needs {} samples, got {}",
                width,
                height,
                expected_len,
                samples.len()
            );
        }

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub(crate) fn from_converted_samples(width: u32, height: u32, samples: Vec<i32>) -> Self {
        debug_assert_eq!(samples.len(), width as usize * height as usize);
        Self {
            width,
            height,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn samples(&self) -> &[i32] {
        &self.samples
    }
}

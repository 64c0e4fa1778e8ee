use anyhow::Result;

/// One luminance sample per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayscaleBuffer {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl GrayscaleBuffer {
    pub fn build_from_samples(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        let expected_len = width as usize * height as usize;
        if samples.len() != expected_len {
            anyhow::bail!(
                "grayscale buffer for {}x{} needs {} samples, got {}",
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

    pub(crate) fn from_converted_samples(width: u32, height: u32, samples: Vec<u8>) -> Self {
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

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn sample_at(&self, x: usize, y: usize) -> u8 {
        self.samples[y * self.width as usize + x]
    }
}

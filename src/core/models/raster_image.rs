use super::GateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    Rgb8,
    Rgba8,
}

impl ChannelLayout {
    pub fn channel_count(self) -> usize {
        match self {
            ChannelLayout::Rgb8 => 3,
            ChannelLayout::Rgba8 => 4,
        }
    }
}

/// Decoded pixels, immutable once built.
#[derive(Clone)]
pub struct RasterImage {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    samples: Vec<u8>,
}

impl std::fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("layout", &self.layout)
            .finish()
    }
}

impl RasterImage {
    pub fn build_from_raw_data(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        samples: Vec<u8>,
    ) -> Result<Self, GateError> {
        if width == 0 || height == 0 {
            return Err(GateError::Decode(format!(
                "image has zero dimension ({}x{})",
                width, height
            )));
        }

        let expected_len = width as usize * height as usize * layout.channel_count();
        if samples.len() != expected_len {
            return Err(GateError::Decode(format!(
                "expected {} samples for {}x{} {:?}, got {}",
                expected_len,
                width,
                height,
                layout,
                samples.len()
            )));
        }

        log::debug!(
            "[RASTER_IMAGE] building raster: {}x{}, layout={:?}",
            width,
            height,
            layout
        );

        Ok(Self {
            width,
            height,
            layout,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.samples.chunks_exact(self.layout.channel_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_raw_data_rejects_zero_dimensions() {
        let result = RasterImage::build_from_raw_data(0, 4, ChannelLayout::Rgb8, vec![]);

        assert!(matches!(result, Err(GateError::Decode(_))));
    }

    #[test]
    fn test_build_from_raw_data_rejects_mismatched_sample_count() {
        let result = RasterImage::build_from_raw_data(2, 2, ChannelLayout::Rgba8, vec![0; 12]);

        assert!(matches!(result, Err(GateError::Decode(_))));
    }

    #[test]
    fn test_pixels_yields_one_slice_per_pixel_with_layout_width() {
        let raster =
            RasterImage::build_from_raw_data(2, 1, ChannelLayout::Rgba8, vec![1, 2, 3, 4, 5, 6, 7, 8])
                .unwrap();

        let pixels: Vec<&[u8]> = raster.pixels().collect();

        assert_eq!(raster.pixel_count(), 2);
        assert_eq!(pixels, vec![&[1u8, 2, 3, 4][..], &[5u8, 6, 7, 8][..]]);
    }
}

use image::{DynamicImage, ImageFormat};

use crate::core::interfaces::ports::ImageDecoder;
use crate::core::models::{ChannelLayout, GateError, RasterImage};
use crate::global_constants::LOG_TAG_DECODER;

pub struct ImageRsDecoder;

impl ImageRsDecoder {
    pub fn initialize() -> Self {
        log::debug!("{} initializing image-rs decoder", LOG_TAG_DECODER);
        Self
    }

    fn convert_to_raster(dynamic_image: DynamicImage) -> Result<RasterImage, GateError> {
        let width = dynamic_image.width();
        let height = dynamic_image.height();

        if dynamic_image.color().has_alpha() {
            let samples = dynamic_image.to_rgba8().into_raw();
            RasterImage::build_from_raw_data(width, height, ChannelLayout::Rgba8, samples)
        } else {
            let samples = dynamic_image.to_rgb8().into_raw();
            RasterImage::build_from_raw_data(width, height, ChannelLayout::Rgb8, samples)
        }
    }
}

impl ImageDecoder for ImageRsDecoder {
    fn decode(&self, encoded_bytes: &[u8], mime_type: &str) -> Result<RasterImage, GateError> {
        log::debug!(
            "{} decoding {} encoded bytes as {}",
            LOG_TAG_DECODER,
            encoded_bytes.len(),
            mime_type
        );

        let declared_format = ImageFormat::from_mime_type(mime_type.to_ascii_lowercase())
            .ok_or_else(|| GateError::Decode(format!("no decoder for {}", mime_type)))?;

        let dynamic_image = image::load_from_memory_with_format(encoded_bytes, declared_format)
            .map_err(|error| {
                log::error!("{} decode failed: {}", LOG_TAG_DECODER, error);
                GateError::Decode(error.to_string())
            })?;

        log::info!(
            "{} decoded {}x{} {:?} image",
            LOG_TAG_DECODER,
            dynamic_image.width(),
            dynamic_image.height(),
            dynamic_image.color()
        );

        Self::convert_to_raster(dynamic_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buffer = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut buffer), format)
            .unwrap();
        buffer
    }

    #[test]
    fn test_decode_png_with_alpha_keeps_rgba_layout() {
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 128])));

        let raster = ImageRsDecoder::initialize()
            .decode(&encode(&source, ImageFormat::Png), "image/png")
            .unwrap();

        assert_eq!((raster.width(), raster.height()), (4, 3));
        assert_eq!(raster.layout(), ChannelLayout::Rgba8);
        assert!(raster.pixels().all(|pixel| pixel == [10, 20, 30, 128]));
    }

    #[test]
    fn test_decode_jpeg_produces_rgb_layout() {
        let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([200, 200, 200])));

        let raster = ImageRsDecoder::initialize()
            .decode(&encode(&source, ImageFormat::Jpeg), "image/jpeg")
            .unwrap();

        assert_eq!(raster.layout(), ChannelLayout::Rgb8);
        assert_eq!(raster.pixel_count(), 64);
    }

    #[test]
    fn test_decode_garbage_bytes_fails_with_decode_error() {
        let result = ImageRsDecoder::initialize().decode(b"definitely not an image", "image/png");

        assert!(matches!(result, Err(GateError::Decode(_))));
    }

    #[test]
    fn test_decode_truncated_png_fails_with_decode_error() {
        let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(16, 16, Rgb([1, 2, 3])));
        let mut bytes = encode(&source, ImageFormat::Png);
        bytes.truncate(bytes.len() / 2);

        let result = ImageRsDecoder::initialize().decode(&bytes, "image/png");

        assert!(matches!(result, Err(GateError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_bytes_that_differ_from_declared_type() {
        let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([9, 9, 9])));
        let gif_bytes = encode(&source, ImageFormat::Gif);

        let declared_png = ImageRsDecoder::initialize().decode(&gif_bytes, "image/png");
        let jpeg_as_png =
            ImageRsDecoder::initialize().decode(&encode(&source, ImageFormat::Jpeg), "image/png");

        assert!(matches!(declared_png, Err(GateError::Decode(_))));
        assert!(matches!(jpeg_as_png, Err(GateError::Decode(_))));
    }

    #[test]
    fn test_decode_accepts_uppercase_declared_type() {
        let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([1, 1, 1])));

        let raster = ImageRsDecoder::initialize()
            .decode(&encode(&source, ImageFormat::Png), "IMAGE/PNG")
            .unwrap();

        assert_eq!(raster.pixel_count(), 4);
    }
}

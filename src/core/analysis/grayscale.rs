use crate::core::models::{GrayscaleBuffer, RasterImage};
use crate::global_constants::LOG_TAG_GRAYSCALE;

/// Unweighted channel mean, rounded to nearest. Alpha is ignored.
pub fn to_grayscale(image: &RasterImage) -> GrayscaleBuffer {
    log::debug!(
        "{} converting {}x{} {:?} image",
        LOG_TAG_GRAYSCALE,
        image.width(),
        image.height(),
        image.layout()
    );

    let samples: Vec<u8> = image.pixels().map(average_luminance).collect();

    GrayscaleBuffer::from_converted_samples(image.width(), image.height(), samples)
}

fn average_luminance(pixel: &[u8]) -> u8 {
    let channel_sum = u16::from(pixel[0]) + u16::from(pixel[1]) + u16::from(pixel[2]);
    // a sum divided by 3 never lands on .5, so +1 before truncating rounds to nearest
    ((channel_sum + 1) / 3) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ChannelLayout;

    #[test]
    fn test_average_luminance_rounds_to_nearest() {
        assert_eq!(average_luminance(&[0, 0, 1]), 0);
        assert_eq!(average_luminance(&[0, 1, 1]), 1);
        assert_eq!(average_luminance(&[255, 255, 254]), 255);
        assert_eq!(average_luminance(&[10, 20, 30]), 20);
    }

    #[test]
    fn test_to_grayscale_ignores_alpha_channel() {
        let opaque =
            RasterImage::build_from_raw_data(1, 1, ChannelLayout::Rgba8, vec![30, 60, 90, 255])
                .unwrap();
        let transparent =
            RasterImage::build_from_raw_data(1, 1, ChannelLayout::Rgba8, vec![30, 60, 90, 0])
                .unwrap();

        assert_eq!(to_grayscale(&opaque), to_grayscale(&transparent));
        assert_eq!(to_grayscale(&opaque).samples(), &[60]);
    }

    #[test]
    fn test_to_grayscale_produces_one_sample_per_pixel_for_rgb_and_rgba() {
        let rgb_samples: Vec<u8> = (0..(7 * 5 * 3)).map(|index| (index * 13 % 256) as u8).collect();
        let rgb = RasterImage::build_from_raw_data(7, 5, ChannelLayout::Rgb8, rgb_samples).unwrap();
        let rgba = RasterImage::build_from_raw_data(3, 2, ChannelLayout::Rgba8, vec![255; 24]).unwrap();

        let rgb_gray = to_grayscale(&rgb);
        let rgba_gray = to_grayscale(&rgba);

        assert_eq!(rgb_gray.samples().len(), 35);
        assert_eq!((rgb_gray.width(), rgb_gray.height()), (7, 5));
        assert_eq!(rgba_gray.samples().len(), 6);
        assert!(rgba_gray.samples().iter().all(|&sample| sample == 255));
    }

    #[test]
    fn test_to_grayscale_is_deterministic() {
        let samples: Vec<u8> = (0..48).map(|index| (index * 37 % 256) as u8).collect();
        let image = RasterImage::build_from_raw_data(4, 4, ChannelLayout::Rgb8, samples).unwrap();

        assert_eq!(to_grayscale(&image), to_grayscale(&image));
    }
}

mod image_decoder;
mod sharpness_engine;

pub use image_decoder::ImageDecoder;
pub use sharpness_engine::SharpnessEngine;

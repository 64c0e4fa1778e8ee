mod cloudinary_image_hosting_service;
mod image_rs_decoder;
mod laplacian_sharpness_engine;
mod tesseract_text_recognition_engine;

pub use cloudinary_image_hosting_service::CloudinaryImageHostingService;
pub use image_rs_decoder::ImageRsDecoder;
pub use laplacian_sharpness_engine::LaplacianSharpnessEngine;
pub use tesseract_text_recognition_engine::TesseractTextRecognitionEngine;

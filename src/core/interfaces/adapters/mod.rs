mod image_hosting_service;
mod text_recognition_engine;

pub use image_hosting_service::{ImageHostingService, ProgressCallback};
pub use text_recognition_engine::TextRecognitionEngine;

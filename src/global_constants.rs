pub const APPLICATION_NAME: &str = "image-quality-gate";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_VALIDATION: &str = "[VALIDATION_GATE]";
pub const LOG_TAG_DECODER: &str = "[IMAGE_DECODER]";
pub const LOG_TAG_GRAYSCALE: &str = "[GRAYSCALE]";
pub const LOG_TAG_EDGE_FILTER: &str = "[EDGE_FILTER]";
pub const LOG_TAG_SHARPNESS: &str = "[SHARPNESS]";
pub const LOG_TAG_DECISION: &str = "[QUALITY_DECISION]";
pub const LOG_TAG_QUALITY_GATE: &str = "[QUALITY_GATE]";
pub const LOG_TAG_SESSION: &str = "[GATE_SESSION]";
pub const LOG_TAG_TESSERACT: &str = "[TESSERACT_OCR]";
pub const LOG_TAG_UPLOAD: &str = "[UPLOAD]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";

pub const STATUS_BLURRY: &str = "image appears blurry";
pub const STATUS_SHARP: &str = "sharp and suitable";
pub const STATUS_READABLE_TEXT: &str = "contains readable text";
pub const STATUS_UNCLEAR_TEXT: &str = "contains text, but it might not be clear";
pub const STATUS_NO_TEXT: &str = "normal image, no text detected";
pub const STATUS_TEXT_UNDETERMINED: &str = "text readability could not be determined";

pub const STATUS_UNSUPPORTED_FORMAT: &str = "Only .jpg and .png formats are allowed.";
pub const STATUS_DECODE_FAILED: &str = "The image could not be decoded.";
pub const STATUS_SUPERSEDED: &str = "Analysis was superseded by a newer image.";
pub const STATUS_UPLOAD_REFUSED: &str = "The image is too blurry. Please select a different image.";
pub const STATUS_UPLOAD_FAILED: &str = "Failed to upload. Please try again.";

pub const MIME_TYPE_JPEG: &str = "image/jpeg";
pub const MIME_TYPE_PNG: &str = "image/png";

pub const DEFAULT_SHARPNESS_THRESHOLD: f64 = 10.0;
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 5;
pub const DEFAULT_MAX_FILE_BYTES: usize = 1024 * 1024;
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";
pub const DEFAULT_TEXT_RECOGNITION_TIMEOUT_MS: u64 = 30_000;

pub const DEFAULT_UPLOAD_ENDPOINT_URL: &str = "https://api.cloudinary.com/v1_1/dxciq1y9t/image/upload";
pub const DEFAULT_UPLOAD_PRESET: &str = "react_preset";
pub const DEFAULT_UPLOAD_CHUNK_SIZE_BYTES: usize = 16 * 1024;
pub const UPLOAD_FILE_FIELD: &str = "file";
pub const UPLOAD_PRESET_FIELD: &str = "upload_preset";

pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const TEMP_FILE_PREFIX: &str = "image_quality_gate_ocr";

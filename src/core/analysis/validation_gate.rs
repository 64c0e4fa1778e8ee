use crate::core::models::{FileMeta, GateError, Thresholds};
use crate::global_constants::LOG_TAG_VALIDATION;

pub fn validate(file_meta: &FileMeta, thresholds: &Thresholds) -> Result<(), GateError> {
    if !thresholds.allows_mime_type(&file_meta.mime_type) {
        log::info!(
            "{} rejecting unsupported type: {}",
            LOG_TAG_VALIDATION,
            file_meta.mime_type
        );
        return Err(GateError::UnsupportedFormat {
            mime_type: file_meta.mime_type.clone(),
        });
    }

    if file_meta.size_bytes > thresholds.max_file_bytes {
        log::info!(
            "{} rejecting {} bytes, limit is {}",
            LOG_TAG_VALIDATION,
            file_meta.size_bytes,
            thresholds.max_file_bytes
        );
        return Err(GateError::TooLarge {
            size_bytes: file_meta.size_bytes,
            max_file_bytes: thresholds.max_file_bytes,
        });
    }

    log::debug!(
        "{} accepted {} ({} bytes)",
        LOG_TAG_VALIDATION,
        file_meta.mime_type,
        file_meta.size_bytes
    );
    Ok(())
}

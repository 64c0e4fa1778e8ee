use crate::global_constants;

const BYTES_PER_KIB: usize = 1024;
const BYTES_PER_MIB: usize = 1024 * 1024;

/// Failures a single gate pass can surface to the caller.
///
/// `UnsupportedFormat`, `TooLarge` and `Decode` end the pass before any verdict
/// exists. `Recognition` never ends a pass: the orchestrator folds it into the
/// text observation and the verdict is built from sharpness alone.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GateError {
    #[error("unsupported image format: {mime_type}")]
    UnsupportedFormat { mime_type: String },

    #[error("file is {size_bytes} bytes, limit is {max_file_bytes} bytes")]
    TooLarge {
        size_bytes: usize,
        max_file_bytes: usize,
    },

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("text recognition failed: {0}")]
    Recognition(String),

    #[error("analysis superseded by a newer image")]
    Superseded,
}

impl GateError {
    pub fn status_line(&self) -> String {
        match self {
            GateError::UnsupportedFormat { .. } => {
                global_constants::STATUS_UNSUPPORTED_FORMAT.to_string()
            }
            GateError::TooLarge { max_file_bytes, .. } => {
                format!("File size exceeds {}.", describe_byte_limit(*max_file_bytes))
            }
            GateError::Decode(_) => global_constants::STATUS_DECODE_FAILED.to_string(),
            GateError::Recognition(_) => global_constants::STATUS_TEXT_UNDETERMINED.to_string(),
            GateError::Superseded => global_constants::STATUS_SUPERSEDED.to_string(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, GateError::Recognition(_))
    }
}

fn describe_byte_limit(limit_bytes: usize) -> String {
    if limit_bytes >= BYTES_PER_MIB && limit_bytes % BYTES_PER_MIB == 0 {
        format!("{}MB", limit_bytes / BYTES_PER_MIB)
    } else if limit_bytes >= BYTES_PER_KIB && limit_bytes % BYTES_PER_KIB == 0 {
        format!("{}KB", limit_bytes / BYTES_PER_KIB)
    } else {
        format!("{} bytes", limit_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_large_status_line_renders_configured_limit_in_megabytes() {
        let error = GateError::TooLarge {
            size_bytes: 2 * BYTES_PER_MIB,
            max_file_bytes: BYTES_PER_MIB,
        };

        assert_eq!(error.status_line(), "File size exceeds 1MB.");
    }

    #[test]
    fn test_too_large_status_line_falls_back_to_kilobytes_and_bytes() {
        let kib_error = GateError::TooLarge {
            size_bytes: 4096,
            max_file_bytes: 512 * BYTES_PER_KIB,
        };
        let byte_error = GateError::TooLarge {
            size_bytes: 4096,
            max_file_bytes: 1000,
        };

        assert_eq!(kib_error.status_line(), "File size exceeds 512KB.");
        assert_eq!(byte_error.status_line(), "File size exceeds 1000 bytes.");
    }

    #[test]
    fn test_every_error_kind_maps_to_one_distinct_status_line() {
        let errors = vec![
            GateError::UnsupportedFormat {
                mime_type: "image/gif".to_string(),
            },
            GateError::TooLarge {
                size_bytes: 10,
                max_file_bytes: 5,
            },
            GateError::Decode("truncated".to_string()),
            GateError::Recognition("engine crashed".to_string()),
            GateError::Superseded,
        ];

        let lines: std::collections::HashSet<String> =
            errors.iter().map(GateError::status_line).collect();

        assert_eq!(lines.len(), errors.len());
    }

    #[test]
    fn test_only_recognition_error_is_non_terminal() {
        assert!(!GateError::Recognition("timeout".to_string()).is_terminal());
        assert!(GateError::Decode("bad".to_string()).is_terminal());
        assert!(GateError::Superseded.is_terminal());
    }
}

use std::sync::Arc;

/// Declared properties of an incoming file, known before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub mime_type: String,
    pub size_bytes: usize,
}

impl FileMeta {
    pub fn describe(mime_type: impl Into<String>, size_bytes: usize) -> Self {
        Self {
            mime_type: mime_type.into(),
            size_bytes,
        }
    }
}

/// Encoded bytes plus their declared metadata.
///
/// The bytes are shared read-only between the sharpness pass and the text
/// recognition task; neither mutates them.
#[derive(Clone)]
pub struct CandidateImage {
    pub meta: FileMeta,
    encoded_bytes: Arc<[u8]>,
}

impl std::fmt::Debug for CandidateImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CandidateImage")
            .field("meta", &self.meta)
            .field("encoded_len", &self.encoded_bytes.len())
            .finish()
    }
}

impl CandidateImage {
    pub fn build(meta: FileMeta, encoded_bytes: Vec<u8>) -> Self {
        log::debug!(
            "[CANDIDATE_IMAGE] building candidate: mime={}, declared={} bytes, actual={} bytes",
            meta.mime_type,
            meta.size_bytes,
            encoded_bytes.len()
        );

        Self {
            meta,
            encoded_bytes: Arc::from(encoded_bytes),
        }
    }

    pub fn from_encoded_bytes(mime_type: impl Into<String>, encoded_bytes: Vec<u8>) -> Self {
        let meta = FileMeta::describe(mime_type, encoded_bytes.len());
        Self::build(meta, encoded_bytes)
    }

    pub fn encoded_bytes(&self) -> &[u8] {
        &self.encoded_bytes
    }

    pub fn shared_bytes(&self) -> Arc<[u8]> {
        Arc::clone(&self.encoded_bytes)
    }
}

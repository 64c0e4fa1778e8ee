#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub loaded_bytes: u64,
    pub total_bytes: u64,
}

impl UploadProgress {
    pub fn new(loaded_bytes: u64, total_bytes: u64) -> Self {
        Self {
            loaded_bytes,
            total_bytes,
        }
    }

    /// Whole percentage, rounded to nearest. An empty upload reports 100.
    pub fn percent(&self) -> u8 {
        if self.total_bytes == 0 {
            return 100;
        }

        let loaded = self.loaded_bytes.min(self.total_bytes);
        ((loaded * 200 + self.total_bytes) / (self.total_bytes * 2)) as u8
    }
}

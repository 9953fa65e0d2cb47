//! Metadata captured when a store is loaded.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Snapshot of the store file at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// When the file was read.
    pub loaded_at: DateTime<Utc>,
}

impl StoreMetadata {
    pub fn new(path: PathBuf, contents: &[u8], row_count: usize) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash: fingerprint(contents),
            size_bytes: contents.len() as u64,
            row_count,
            loaded_at: Utc::now(),
        }
    }

    /// Whether `hash` still matches the contents seen at load time.
    pub fn is_current(&self, hash: &str) -> bool {
        self.hash == hash
    }
}

/// `sha256:<hex>` digest of some bytes.
pub fn fingerprint(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    format!("sha256:{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_fields() {
        let meta = StoreMetadata::new(PathBuf::from("data/stock.csv"), b"abc", 0);
        assert_eq!(meta.file, "stock.csv");
        assert_eq!(meta.size_bytes, 3);
        assert_eq!(
            meta.hash,
            "sha256:ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert!(meta.is_current(&fingerprint(b"abc")));
        assert!(!meta.is_current(&fingerprint(b"abcd")));
    }

    #[test]
    fn test_metadata_serializes_flat() {
        let meta = StoreMetadata::new(PathBuf::from("stock.csv"), b"", 2);
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&meta).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("file,path,hash,size_bytes,row_count,loaded_at"));
        assert!(lines.next().unwrap().starts_with("stock.csv,stock.csv,sha256:"));
    }
}

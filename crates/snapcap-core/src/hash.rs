//! Content hashing for downloaded model artifacts.

use blake3::Hasher as Blake3Hasher;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Provides content hashing for model files.
pub struct Hasher;

impl Hasher {
    /// Generate a BLAKE3 hash of file contents.
    ///
    /// Uses streaming to handle large files efficiently without loading
    /// the entire file into memory.
    pub fn content_hash(path: &Path) -> std::io::Result<String> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        let mut hasher = Blake3Hasher::new();

        // Use 64KB buffer for efficient reading
        let mut buffer = [0u8; 65536];
        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }

        Ok(hasher.finalize().to_hex().to_string())
    }

    /// Generate a BLAKE3 hash from an in-memory byte buffer.
    pub fn content_hash_from_bytes(data: &[u8]) -> String {
        let mut hasher = Blake3Hasher::new();
        hasher.update(data);
        hasher.finalize().to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_content_hash_stable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"snapcap model bytes").unwrap();

        let h1 = Hasher::content_hash(file.path()).unwrap();
        let h2 = Hasher::content_hash(file.path()).unwrap();
        assert_eq!(h1, h2);
        assert_eq!(h1.len(), 64);
    }

    #[test]
    fn test_content_hash_matches_bytes_variant() {
        let data = b"snapcap model bytes";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(data).unwrap();

        let from_file = Hasher::content_hash(file.path()).unwrap();
        let from_bytes = Hasher::content_hash_from_bytes(data);
        assert_eq!(from_file, from_bytes);
    }
}

//! Image decoding with format detection, validation, and timeout support.
//!
//! This is the upstream-input boundary: undecodable, oversized, or otherwise
//! malformed images are rejected here before they reach the analyzer. The
//! analyzer itself assumes a valid decoded RGB image.

use image::{DynamicImage, GenericImageView, ImageFormat};
use std::path::Path;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::LimitsConfig;
use crate::error::PipelineError;

/// Image decoder with configurable limits and timeout.
pub struct ImageDecoder {
    limits: LimitsConfig,
}

/// Result of decoding an image.
pub struct DecodedImage {
    /// The decoded image data
    pub image: DynamicImage,
    /// Detected image format
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Original file size in bytes
    pub file_size: u64,
}

impl ImageDecoder {
    /// Create a new decoder with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Decode an image file from disk with validation and timeout.
    pub async fn decode(&self, path: &Path) -> Result<DecodedImage, PipelineError> {
        if !path.exists() {
            return Err(PipelineError::FileNotFound(path.to_path_buf()));
        }

        let file_size = std::fs::metadata(path)
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot stat file: {}", e),
            })?
            .len();

        let size_mb = file_size / (1024 * 1024);
        if size_mb > self.limits.max_file_size_mb {
            return Err(PipelineError::FileTooLarge {
                path: path.to_path_buf(),
                size_mb,
                max_mb: self.limits.max_file_size_mb,
            });
        }

        let bytes = std::fs::read(path).map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: format!("Cannot read file: {}", e),
        })?;

        self.decode_from_bytes(bytes, path).await
    }

    /// Decode an image from an in-memory byte buffer with validation and timeout.
    ///
    /// Used when the bytes have already been received (e.g., an upload body
    /// handed over by a serving layer).
    pub async fn decode_from_bytes(
        &self,
        bytes: Vec<u8>,
        path: &Path,
    ) -> Result<DecodedImage, PipelineError> {
        let file_size = bytes.len() as u64;
        let path_owned = path.to_path_buf();
        let timeout_duration = Duration::from_millis(self.limits.decode_timeout_ms);

        let decode_result = timeout(timeout_duration, async {
            tokio::task::spawn_blocking(move || Self::decode_bytes_sync(bytes, &path_owned)).await
        })
        .await;

        match decode_result {
            Ok(Ok(Ok(mut decoded))) => {
                if decoded.width > self.limits.max_image_dimension
                    || decoded.height > self.limits.max_image_dimension
                {
                    return Err(PipelineError::ImageTooLarge {
                        path: path.to_path_buf(),
                        width: decoded.width,
                        height: decoded.height,
                        max_dim: self.limits.max_image_dimension,
                    });
                }
                decoded.file_size = file_size;
                Ok(decoded)
            }
            Ok(Ok(Err(e))) => Err(e),
            Ok(Err(e)) => Err(PipelineError::Decode {
                path: path.to_path_buf(),
                message: format!("Task join error: {}", e),
            }),
            Err(_) => Err(PipelineError::Timeout {
                path: path.to_path_buf(),
                stage: "decode".to_string(),
                timeout_ms: self.limits.decode_timeout_ms,
            }),
        }
    }

    /// Synchronous decode from bytes (runs in spawn_blocking).
    fn decode_bytes_sync(bytes: Vec<u8>, path: &Path) -> Result<DecodedImage, PipelineError> {
        use std::io::Cursor;

        let file_size = bytes.len() as u64;
        let cursor = Cursor::new(bytes);
        let reader = image::ImageReader::new(cursor)
            .with_guessed_format()
            .map_err(|e| PipelineError::Decode {
                path: path.to_path_buf(),
                message: format!("Cannot detect image format: {}", e),
            })?;
        let format = match reader.format() {
            Some(f) => f,
            None => ImageFormat::from_path(path).map_err(|_| PipelineError::Decode {
                path: path.to_path_buf(),
                message: "Unknown image format".to_string(),
            })?,
        };
        let image = reader.decode().map_err(|e| PipelineError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let (width, height) = image.dimensions();
        Ok(DecodedImage {
            image,
            format,
            width,
            height,
            file_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::new(width, height));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_decode_from_bytes_png() {
        let decoder = ImageDecoder::new(LimitsConfig::default());
        let bytes = png_bytes(64, 48);

        let decoded = decoder
            .decode_from_bytes(bytes, Path::new("upload.png"))
            .await
            .unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
        assert_eq!(decoded.width, 64);
        assert_eq!(decoded.height, 48);
    }

    #[tokio::test]
    async fn test_decode_garbage_bytes_rejected() {
        let decoder = ImageDecoder::new(LimitsConfig::default());
        let result = decoder
            .decode_from_bytes(vec![0u8; 128], Path::new("garbage.bin"))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_decode_oversized_dimensions_rejected() {
        let limits = LimitsConfig {
            max_image_dimension: 32,
            ..LimitsConfig::default()
        };
        let decoder = ImageDecoder::new(limits);
        let bytes = png_bytes(64, 48);

        let result = decoder
            .decode_from_bytes(bytes, Path::new("big.png"))
            .await;
        assert!(matches!(
            result,
            Err(PipelineError::ImageTooLarge { width: 64, .. })
        ));
    }

    #[tokio::test]
    async fn test_decode_missing_file() {
        let decoder = ImageDecoder::new(LimitsConfig::default());
        let result = decoder.decode(Path::new("/nonexistent/photo.jpg")).await;
        assert!(matches!(result, Err(PipelineError::FileNotFound(_))));
    }

    #[tokio::test]
    async fn test_decode_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, png_bytes(16, 16)).unwrap();

        let decoder = ImageDecoder::new(LimitsConfig::default());
        let decoded = decoder.decode(&path).await.unwrap();
        assert_eq!(decoded.width, 16);
        assert_eq!(decoded.file_size, std::fs::metadata(&path).unwrap().len());
    }
}

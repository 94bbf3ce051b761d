//! Image preprocessing for CLIP embedding generation.
//!
//! CLIP ViT-B/32 expects:
//! - Input size: 224×224 pixels
//! - Normalization: per-channel (pixel/255 - mean) / std with the CLIP
//!   training statistics
//! - Channel order: RGB
//! - Tensor layout: NCHW [batch, channels, height, width]

use image::DynamicImage;
use ndarray::Array4;

/// Number of color channels (RGB).
const CHANNELS: usize = 3;

/// CLIP normalization mean (R, G, B).
const NORM_MEAN: [f32; 3] = [0.481_454_66, 0.457_827_5, 0.408_210_73];

/// CLIP normalization std (R, G, B).
const NORM_STD: [f32; 3] = [0.268_629_54, 0.261_302_58, 0.275_777_11];

/// Preprocess an image for CLIP inference.
///
/// Resizes to `image_size × image_size`, converts to RGB, normalizes with
/// the CLIP per-channel statistics, and returns an NCHW tensor suitable for
/// ONNX Runtime.
pub fn preprocess(image: &DynamicImage, image_size: u32) -> Array4<f32> {
    let resized = image.resize_exact(
        image_size,
        image_size,
        image::imageops::FilterType::Lanczos3,
    );
    let rgb = resized.to_rgb8();

    let size = image_size as usize;
    let mut tensor = Array4::<f32>::zeros((1, CHANNELS, size, size));

    // Access raw RGB bytes and tensor slice directly to avoid per-pixel
    // bounds-checking overhead from get_pixel() and 4D ndarray indexing.
    let raw = rgb.as_raw();
    let tensor_data = tensor.as_slice_mut().unwrap();
    for (i, pixel) in raw.chunks_exact(3).enumerate() {
        let y = i / size;
        let x = i % size;
        for (c, &val) in pixel.iter().enumerate() {
            // NCHW layout: offset = c * size * size + y * size + x
            let idx = c * size * size + y * size + x;
            tensor_data[idx] = (val as f32 / 255.0 - NORM_MEAN[c]) / NORM_STD[c];
        }
    }

    tensor
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, RgbImage};

    #[test]
    fn test_preprocess_shape() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(640, 480));
        let tensor = preprocess(&img, 224);
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);
    }

    #[test]
    fn test_preprocess_normalization() {
        // White image: each channel is (1.0 - mean) / std
        let img =
            DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, image::Rgb([255, 255, 255])));
        let tensor = preprocess(&img, 224);
        let expected_r = (1.0 - NORM_MEAN[0]) / NORM_STD[0];
        assert!((tensor[[0, 0, 0, 0]] - expected_r).abs() < 0.01);

        // Black image: each channel is (0.0 - mean) / std (negative)
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(10, 10, image::Rgb([0, 0, 0])));
        let tensor = preprocess(&img, 224);
        let expected_b = (0.0 - NORM_MEAN[2]) / NORM_STD[2];
        assert!((tensor[[0, 2, 0, 0]] - expected_b).abs() < 0.01);
    }

    #[test]
    fn test_preprocess_channels_differ() {
        // A pure-red image should produce different values per channel
        // because the mean/std are per-channel.
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, image::Rgb([255, 0, 0])));
        let tensor = preprocess(&img, 224);
        let r = tensor[[0, 0, 0, 0]];
        let g = tensor[[0, 1, 0, 0]];
        assert!(r > 0.0);
        assert!(g < 0.0);
    }
}

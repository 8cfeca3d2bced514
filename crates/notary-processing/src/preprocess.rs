//! OCR preprocessing pipeline
//!
//! Turns raw upload bytes into a binarized grayscale image the OCR engine can
//! work with, while keeping the untouched color image around for face
//! detection. The pipeline is fixed: decode, grayscale, upscale when the
//! image is narrow, light Gaussian denoise, Otsu binarization, and polarity
//! normalization so the result is always dark text on a light background.

use crate::error::ProcessingError;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, ImageReader};
use imageproc::contrast::{otsu_level, threshold, ThresholdType};
use imageproc::filter::gaussian_blur_f32;
use std::io::Cursor;

/// Images narrower than this are upscaled before binarization; small scans
/// otherwise lose too much glyph detail for recognition.
pub const OCR_TARGET_WIDTH: u32 = 1200;

/// Sigma equivalent of a 3x3 Gaussian kernel.
const BLUR_SIGMA: f32 = 0.8;

/// Mean intensity below this means light-on-dark, which gets inverted.
const POLARITY_MIDPOINT: f64 = 125.0;

/// Result of preprocessing: the decoded original for face detection and the
/// binarized image for OCR.
pub struct PreprocessedDocument {
    pub original: DynamicImage,
    pub binary: GrayImage,
}

/// Run the fixed preprocessing pipeline over raw image bytes.
///
/// Fails only when the bytes cannot be decoded as an image; every later stage
/// is a total transform.
pub fn preprocess(data: &[u8], target_width: u32) -> Result<PreprocessedDocument, ProcessingError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| ProcessingError::Decode(e.to_string()))?;
    let original = reader
        .decode()
        .map_err(|e| ProcessingError::Decode(e.to_string()))?;

    let mut gray = original.to_luma8();
    let (width, height) = gray.dimensions();

    if width < target_width {
        let scale = target_width as f64 / width as f64;
        let new_height = ((height as f64 * scale) as u32).max(1);
        tracing::debug!(
            from_width = width,
            to_width = target_width,
            "Upscaling narrow image for OCR"
        );
        gray = imageops::resize(&gray, target_width, new_height, FilterType::CatmullRom);
    }

    let denoised = gaussian_blur_f32(&gray, BLUR_SIGMA);

    let level = otsu_level(&denoised);
    let mut binary = threshold(&denoised, level, ThresholdType::Binary);

    if mean_intensity(&binary) < POLARITY_MIDPOINT {
        imageops::invert(&mut binary);
    }

    Ok(PreprocessedDocument { original, binary })
}

fn mean_intensity(image: &GrayImage) -> f64 {
    let pixels = image.as_raw();
    if pixels.is_empty() {
        return 0.0;
    }
    let sum: u64 = pixels.iter().map(|&p| u64::from(p)).sum();
    sum as f64 / pixels.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Luma, Rgb, RgbImage};

    fn encode_png(img: &RgbImage) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img.clone())
            .write_to(&mut buffer, ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    /// A horizontal light/dark split gives Otsu a clean bimodal histogram.
    fn bimodal_image(width: u32, height: u32, dark_fraction: f64) -> RgbImage {
        let split = (width as f64 * dark_fraction) as u32;
        RgbImage::from_fn(width, height, |x, _| {
            if x < split {
                Rgb([10, 10, 10])
            } else {
                Rgb([240, 240, 240])
            }
        })
    }

    #[test]
    fn test_preprocess_rejects_non_image_bytes() {
        let result = preprocess(b"definitely not an image", OCR_TARGET_WIDTH);
        assert!(matches!(result, Err(ProcessingError::Decode(_))));
    }

    #[test]
    fn test_narrow_image_is_upscaled_to_target_width() {
        let data = encode_png(&bimodal_image(600, 400, 0.5));
        let doc = preprocess(&data, OCR_TARGET_WIDTH).unwrap();

        assert_eq!(doc.binary.width(), 1200);
        assert_eq!(doc.binary.height(), 800);
        // Original stays untouched for face detection
        assert_eq!(doc.original.width(), 600);
        assert_eq!(doc.original.height(), 400);
    }

    #[test]
    fn test_wide_image_is_not_resized() {
        let data = encode_png(&bimodal_image(1600, 300, 0.5));
        let doc = preprocess(&data, OCR_TARGET_WIDTH).unwrap();

        assert_eq!(doc.binary.width(), 1600);
        assert_eq!(doc.binary.height(), 300);
    }

    #[test]
    fn test_output_is_binary() {
        let data = encode_png(&bimodal_image(1400, 200, 0.3));
        let doc = preprocess(&data, OCR_TARGET_WIDTH).unwrap();

        assert!(doc
            .binary
            .pixels()
            .all(|p| *p == Luma([0u8]) || *p == Luma([255u8])));
    }

    #[test]
    fn test_mostly_dark_image_is_inverted_to_light_background() {
        // 90% dark: after thresholding the mean sits well below the midpoint,
        // so polarity normalization must flip it.
        let data = encode_png(&bimodal_image(1400, 200, 0.9));
        let doc = preprocess(&data, OCR_TARGET_WIDTH).unwrap();

        assert!(mean_intensity(&doc.binary) >= POLARITY_MIDPOINT);
    }

    #[test]
    fn test_mostly_light_image_keeps_polarity() {
        let data = encode_png(&bimodal_image(1400, 200, 0.1));
        let doc = preprocess(&data, OCR_TARGET_WIDTH).unwrap();

        assert!(mean_intensity(&doc.binary) >= POLARITY_MIDPOINT);
    }
}

//! QR encoding of submission metadata
//!
//! One builder serves both pipelines: the payload (any small serializable
//! mapping) is serialized to JSON, encoded into a QR matrix, rendered at a
//! small module size, and resized with nearest-neighbor sampling to a fixed
//! display size. Nearest-neighbor keeps module edges crisp; any smoothing
//! filter would blur them into undecodability.

use crate::error::ProcessingError;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use serde::Serialize;
use std::io::Cursor;

const MODULE_PIXELS: u32 = 3;
const DISPLAY_SIZE: u32 = 300;

/// Renders QR PNG images for metadata payloads.
#[derive(Clone)]
pub struct QrBuilder {
    module_pixels: u32,
    display_size: u32,
}

impl Default for QrBuilder {
    fn default() -> Self {
        QrBuilder {
            module_pixels: MODULE_PIXELS,
            display_size: DISPLAY_SIZE,
        }
    }
}

impl QrBuilder {
    /// Serialize `payload` to JSON and render it as a PNG QR image.
    ///
    /// The caller is responsible for keeping the payload small; a payload
    /// beyond the QR capacity table fails with an encoding error.
    pub fn render_png<T: Serialize>(&self, payload: &T) -> Result<Vec<u8>, ProcessingError> {
        let text = serde_json::to_string(payload)
            .map_err(|e| ProcessingError::QrEncoding(format!("Failed to serialize: {}", e)))?;
        self.render_text_png(&text)
    }

    /// Render raw text as a PNG QR image.
    pub fn render_text_png(&self, text: &str) -> Result<Vec<u8>, ProcessingError> {
        let code = QrCode::new(text.as_bytes())
            .map_err(|e| ProcessingError::QrEncoding(e.to_string()))?;

        let modules = code
            .render::<Luma<u8>>()
            .module_dimensions(self.module_pixels, self.module_pixels)
            .build();

        let resized = imageops::resize(
            &modules,
            self.display_size,
            self.display_size,
            FilterType::Nearest,
        );

        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageLuma8(resized)
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| ProcessingError::QrEncoding(format!("Failed to encode PNG: {}", e)))?;

        Ok(buffer.into_inner())
    }
}

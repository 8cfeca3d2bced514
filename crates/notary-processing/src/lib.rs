//! Notary Processing Library
//!
//! This crate provides the processing capabilities behind the upload and
//! generation pipelines:
//! - OCR preprocessing (grayscale, upscale, denoise, binarize) and text
//!   extraction via an external OCR engine (`preprocess`, `ocr`)
//! - Face detection on the original color image (`faces`)
//! - QR encoding of submission metadata (`qr`)
//! - Plaintext document templates (`templates`)

pub mod error;
pub mod faces;
pub mod ocr;
pub mod preprocess;
pub mod qr;
pub mod templates;

// Re-export commonly used types
pub use error::ProcessingError;
pub use faces::FaceDetector;
pub use ocr::OcrEngine;
pub use preprocess::{preprocess, PreprocessedDocument, OCR_TARGET_WIDTH};
pub use qr::QrBuilder;
pub use templates::render_document;

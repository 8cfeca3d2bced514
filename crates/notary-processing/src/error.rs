//! Processing error types

use thiserror::Error;

/// Errors produced by the preprocessing, OCR, face-detection, and QR stages.
///
/// Only decode and QR errors ever surface to a client: OCR and face-detection
/// failures are absorbed by the ingestion pipeline (marker text, zero count).
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Could not decode image bytes: {0}")]
    Decode(String),

    #[error("OCR failed: {0}")]
    Ocr(String),

    #[error("Face detection failed: {0}")]
    FaceDetection(String),

    #[error("QR encoding failed: {0}")]
    QrEncoding(String),
}

//! Document ingestion pipeline
//!
//! Runs the derived-output stages of an upload: preprocess for OCR, extract
//! text, count faces on the original image. Persistence and QR encoding stay
//! in the handler.
//!
//! Failure policy: none of these stages fails the request. OCR problems are
//! substituted with a marker string the client can recognize, face-detection
//! problems collapse to a zero count, and an image that cannot be decoded at
//! all short-circuits both outputs at once (the marker text and a zero count)
//! rather than handing a half-processed image to a later stage.

use notary_processing::{preprocess, FaceDetector, OcrEngine, OCR_TARGET_WIDTH};
use std::sync::Arc;

/// Marker prefixed to `ocr_text` when extraction failed.
pub const OCR_ERROR_MARKER: &str = "[OCR error]";

/// Derived outputs of an upload.
#[derive(Debug)]
pub struct IngestionOutcome {
    pub ocr_text: String,
    pub faces_found: usize,
}

/// Orchestrates preprocessing, OCR, and face detection for uploads.
#[derive(Clone)]
pub struct IngestionService {
    ocr: Arc<OcrEngine>,
    faces: Arc<FaceDetector>,
}

impl IngestionService {
    pub fn new(ocr: Arc<OcrEngine>, faces: Arc<FaceDetector>) -> Self {
        IngestionService { ocr, faces }
    }

    /// Derive OCR text and a face count from raw upload bytes.
    pub async fn process(&self, data: Vec<u8>) -> IngestionOutcome {
        // Preprocessing is CPU-bound; keep it off the async executor.
        let preprocessed =
            tokio::task::spawn_blocking(move || preprocess(&data, OCR_TARGET_WIDTH)).await;

        let document = match preprocessed {
            Ok(Ok(document)) => document,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Upload could not be decoded as an image");
                return IngestionOutcome {
                    ocr_text: format!("{} {}", OCR_ERROR_MARKER, e),
                    faces_found: 0,
                };
            }
            Err(e) => {
                tracing::error!(error = %e, "Preprocessing task failed");
                return IngestionOutcome {
                    ocr_text: format!("{} {}", OCR_ERROR_MARKER, e),
                    faces_found: 0,
                };
            }
        };

        let ocr_text = match self.ocr.recognize(&document.binary).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "OCR extraction failed");
                format!("{} {}", OCR_ERROR_MARKER, e)
            }
        };

        let faces_found = match self.faces.count_faces(document.original).await {
            Ok(count) => count,
            Err(e) => {
                tracing::debug!(error = %e, "Face detection unavailable, reporting zero faces");
                0
            }
        };

        IngestionOutcome {
            ocr_text,
            faces_found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notary_processing::{FaceDetector, OcrEngine};

    fn test_service() -> IngestionService {
        IngestionService::new(
            Arc::new(OcrEngine::new("/nonexistent/ocr-engine", "eng")),
            Arc::new(FaceDetector::new(None)),
        )
    }

    #[tokio::test]
    async fn test_undecodable_bytes_short_circuit_both_outputs() {
        let outcome = test_service().process(b"not an image".to_vec()).await;

        assert!(outcome.ocr_text.starts_with(OCR_ERROR_MARKER));
        assert_eq!(outcome.faces_found, 0);
    }

    #[tokio::test]
    async fn test_ocr_failure_is_non_fatal() {
        // Valid image, but the OCR engine cannot be spawned: the marker text
        // comes back and the request-level outcome is still produced.
        let image = image::RgbImage::from_pixel(64, 64, image::Rgb([255, 255, 255]));
        let mut png = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(image)
            .write_to(&mut png, image::ImageFormat::Png)
            .unwrap();

        let outcome = test_service().process(png.into_inner()).await;

        assert!(outcome.ocr_text.starts_with(OCR_ERROR_MARKER));
        assert_eq!(outcome.faces_found, 0);
    }
}

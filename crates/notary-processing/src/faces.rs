//! Face detection on uploaded documents
//!
//! Counts face regions in the original (not preprocessed) image using the
//! SeetaFace detector, a CPU detector rather than a heavier GPU model, since
//! uploads are scanned documents, not photo archives. The model file location
//! is injected at construction; when no model is configured every detection
//! call errors and the caller falls back to a zero count.

use crate::error::ProcessingError;
use image::DynamicImage;
use rustface::ImageData;
use std::path::PathBuf;

// Detection parameters for document-scale portraits.
const MIN_FACE_SIZE: u32 = 20;
const SCORE_THRESHOLD: f64 = 2.0;
const PYRAMID_SCALE_FACTOR: f32 = 0.8;
const SLIDE_WINDOW_STEP: u32 = 4;

/// Face detector over an optional SeetaFace model file.
pub struct FaceDetector {
    model_path: Option<PathBuf>,
}

impl FaceDetector {
    pub fn new(model_path: Option<PathBuf>) -> Self {
        match &model_path {
            Some(path) => tracing::info!(model = %path.display(), "Face detection enabled"),
            None => tracing::warn!(
                "No face detection model configured; uploads will report zero faces"
            ),
        }
        FaceDetector { model_path }
    }

    /// Count face regions in the image.
    ///
    /// Detection is CPU-bound and runs on the blocking thread pool. The
    /// detector is rebuilt per call from the model file: the underlying
    /// detector handle cannot be shared across threads.
    pub async fn count_faces(&self, image: DynamicImage) -> Result<usize, ProcessingError> {
        let Some(path) = self.model_path.clone() else {
            return Err(ProcessingError::FaceDetection(
                "No detection model configured".to_string(),
            ));
        };

        let count = tokio::task::spawn_blocking(move || -> Result<usize, ProcessingError> {
            let model_path = path.to_str().ok_or_else(|| {
                ProcessingError::FaceDetection("Model path is not valid UTF-8".to_string())
            })?;

            let mut detector = rustface::create_detector(model_path).map_err(|e| {
                ProcessingError::FaceDetection(format!(
                    "Failed to load model {}: {:?}",
                    model_path, e
                ))
            })?;
            detector.set_min_face_size(MIN_FACE_SIZE);
            detector.set_score_thresh(SCORE_THRESHOLD);
            detector.set_pyramid_scale_factor(PYRAMID_SCALE_FACTOR);
            detector.set_slide_window_step(SLIDE_WINDOW_STEP, SLIDE_WINDOW_STEP);

            let gray = image.to_luma8();
            let (width, height) = gray.dimensions();
            let mut image_data = ImageData::new(gray.as_raw(), width, height);

            Ok(detector.detect(&mut image_data).len())
        })
        .await
        .map_err(|e| ProcessingError::FaceDetection(format!("Detection task failed: {}", e)))??;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[tokio::test]
    async fn test_count_faces_without_model_errors() {
        let detector = FaceDetector::new(None);
        let image = DynamicImage::ImageRgb8(RgbImage::new(64, 64));

        let result = detector.count_faces(image).await;
        assert!(matches!(result, Err(ProcessingError::FaceDetection(_))));
    }

    #[tokio::test]
    async fn test_count_faces_with_missing_model_file_errors() {
        let detector = FaceDetector::new(Some(PathBuf::from("/nonexistent/seeta.bin")));
        let image = DynamicImage::ImageRgb8(RgbImage::new(64, 64));

        let result = detector.count_faces(image).await;
        match result {
            Err(ProcessingError::FaceDetection(msg)) => {
                assert!(msg.contains("Failed to load model"))
            }
            other => panic!("Expected model load error, got {:?}", other.map(|_| ())),
        }
    }
}

//! Text extraction via an external OCR engine
//!
//! The engine wraps the `tesseract` executable: the preprocessed image is
//! encoded to PNG in memory and piped through stdin, recognized text comes
//! back on stdout. The executable path and recognition language are plain
//! constructor parameters; configuration is resolved once at startup and
//! handed in, never read from process-global state here.

use crate::error::ProcessingError;
use image::{GrayImage, ImageFormat};
use std::io::Cursor;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Recognition settings: default neural engine, single uniform block of text.
/// Legal documents are dense uniform paragraphs, which is what PSM 6 assumes.
const OCR_ENGINE_MODE: &str = "3";
const OCR_PAGE_SEG_MODE: &str = "6";

/// Handle to the external OCR engine.
pub struct OcrEngine {
    command: String,
    language: String,
}

impl OcrEngine {
    /// Create an engine invoking `command` (a bare name is resolved through
    /// `PATH`) with the given recognition language.
    pub fn new(command: impl Into<String>, language: impl Into<String>) -> Self {
        OcrEngine {
            command: command.into(),
            language: language.into(),
        }
    }

    /// Recognize text in a preprocessed binary image.
    ///
    /// Spawns one engine process per call and pipes the PNG-encoded image
    /// through stdin. Errors cover a missing executable, a failed pipe, and a
    /// non-zero engine exit; callers decide whether any of those are fatal.
    pub async fn recognize(&self, image: &GrayImage) -> Result<String, ProcessingError> {
        let mut png = Cursor::new(Vec::new());
        image
            .write_to(&mut png, ImageFormat::Png)
            .map_err(|e| ProcessingError::Ocr(format!("Failed to encode image: {}", e)))?;
        let png = png.into_inner();

        let start = std::time::Instant::now();

        let mut child = Command::new(&self.command)
            .args([
                "stdin",
                "stdout",
                "-l",
                self.language.as_str(),
                "--oem",
                OCR_ENGINE_MODE,
                "--psm",
                OCR_PAGE_SEG_MODE,
            ])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                ProcessingError::Ocr(format!("Failed to spawn '{}': {}", self.command, e))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&png).await.map_err(|e| {
                ProcessingError::Ocr(format!("Failed to pipe image to engine: {}", e))
            })?;
            // Dropping stdin closes the pipe so the engine sees EOF.
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ProcessingError::Ocr(format!("Failed to wait for engine: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ProcessingError::Ocr(format!(
                "Engine exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();

        tracing::debug!(
            chars = text.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "OCR extraction finished"
        );

        Ok(text)
    }
}

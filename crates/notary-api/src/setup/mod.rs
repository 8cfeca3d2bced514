//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::Result;
use notary_core::Config;
use notary_processing::{FaceDetector, OcrEngine, QrBuilder};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first
    crate::telemetry::init_telemetry()
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    tracing::info!("Configuration loaded successfully");

    // Setup the two storage directories
    let (uploads, generated) = storage::setup_storage(&config).await?;

    // Processing components, configured once from Config
    let ocr = Arc::new(OcrEngine::new(
        config.tesseract_cmd.clone(),
        config.ocr_language.clone(),
    ));
    let faces = Arc::new(FaceDetector::new(config.face_model_path.clone()));
    let qr = QrBuilder::default();

    let state = Arc::new(AppState {
        config: config.clone(),
        uploads,
        generated,
        ocr,
        faces,
        qr,
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}

//! Document upload handler

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use notary_core::models::{Submission, UploadQrPayload, UploadResponse};
use notary_storage::Storage;
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError};
use crate::services::IngestionService;
use crate::state::AppState;
use crate::utils::{dotted_extension_or_default, extract_multipart_file, sanitize_filename};

/// Upload a document image
///
/// Persists the raw upload, extracts text via OCR, counts faces on the
/// original image, and encodes minimal submission metadata into a QR image.
/// OCR and face-detection failures are non-fatal: the response carries a
/// marker string or a zero count instead.
///
/// # Errors
/// - `AppError::InvalidInput` - No file field or an invalid filename
/// - `AppError::QrEncoding` - Metadata did not fit in a QR code
/// - `AppError::Storage` - Persisting an artifact failed
#[utoipa::path(
    post,
    path = "/upload/",
    tag = "documents",
    responses(
        (status = 200, description = "Document ingested", body = UploadResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_document"))]
pub async fn upload_document(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let (data, filename, content_type) = extract_multipart_file(multipart)
        .await
        .map_err(HttpAppError::from)?;

    let file_id = Uuid::new_v4();
    let original_filename = match filename {
        Some(name) => sanitize_filename(&name).map_err(HttpAppError::from)?,
        None => format!("{}.jpg", file_id),
    };

    tracing::debug!(
        filename = %original_filename,
        content_type = ?content_type,
        size_bytes = data.len(),
        "Received upload"
    );

    // Persist the raw upload before any derived processing so the submission
    // is retrievable even when OCR and detection both fail.
    let stored_filename = format!("{}{}", file_id, dotted_extension_or_default(&original_filename));
    state
        .uploads
        .save(&stored_filename, data.clone())
        .await
        .map_err(HttpAppError::from)?;

    let ingestion = IngestionService::new(state.ocr.clone(), state.faces.clone());
    let outcome = ingestion.process(data).await;

    let qr_payload = UploadQrPayload {
        id: file_id,
        filename: &original_filename,
        faces: outcome.faces_found,
    };
    let qr_png = state.qr.render_png(&qr_payload).map_err(HttpAppError::from)?;

    let qr_filename = format!("{}_qr.png", file_id);
    let qr_url = state
        .uploads
        .save(&qr_filename, qr_png)
        .await
        .map_err(HttpAppError::from)?;

    let submission = Submission {
        id: file_id,
        original_filename,
        stored_filename,
        ocr_text: outcome.ocr_text,
        faces_found: outcome.faces_found,
        qr_filename,
        uploaded_at: Utc::now(),
    };

    tracing::info!(
        file_id = %submission.id,
        stored_filename = %submission.stored_filename,
        faces_found = submission.faces_found,
        "Document ingested"
    );

    Ok(Json(UploadResponse::new(submission, qr_url)))
}

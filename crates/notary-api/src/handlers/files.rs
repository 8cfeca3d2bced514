//! File retrieval handlers
//!
//! Serve previously persisted artifacts by exact filename from the two
//! storage directories. The storage layer rejects names that are not a
//! single path component, so caller-supplied names cannot traverse out.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use notary_core::AppError;
use notary_storage::Storage;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::content_type_for;

/// Serve an uploaded file or its QR image
#[utoipa::path(
    get,
    path = "/file/{filename}",
    tag = "files",
    params(
        ("filename" = String, Path, description = "Stored file name")
    ),
    responses(
        (status = 200, description = "File contents", content_type = "application/octet-stream"),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_uploaded_file"))]
pub async fn get_uploaded_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, HttpAppError> {
    serve_from(state.uploads.as_ref(), &filename).await
}

/// Serve a generated document or its QR image
#[utoipa::path(
    get,
    path = "/generated/{filename}",
    tag = "files",
    params(
        ("filename" = String, Path, description = "Stored file name")
    ),
    responses(
        (status = 200, description = "File contents", content_type = "application/octet-stream"),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_generated_file"))]
pub async fn get_generated_file(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<Response, HttpAppError> {
    serve_from(state.generated.as_ref(), &filename).await
}

async fn serve_from(storage: &dyn Storage, filename: &str) -> Result<Response, HttpAppError> {
    let data = storage.load(filename).await.map_err(HttpAppError::from)?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for(filename))
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(data))
        .map_err(|e| {
            HttpAppError::from(AppError::Internal(format!("Failed to build response: {}", e)))
        })?;

    Ok(response)
}

//! Document generation handler

use std::sync::Arc;

use axum::{extract::State, Form, Json};
use chrono::Utc;
use notary_core::models::{
    DocumentKind, GenerateResponse, GeneratedDocument, GeneratedQrPayload,
};
use notary_core::AppError;
use notary_processing::render_document;
use notary_storage::Storage;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateRequest {
    pub doc_type: String,
    pub owner_name: String,
    #[serde(default)]
    pub property_address: Option<String>,
}

/// Generate a templated legal document
///
/// Renders a plaintext sale deed or will from the submitted form fields,
/// persists it together with a QR image of the document metadata, and returns
/// download URLs for both. Unsupported document types are rejected before
/// anything is written.
#[utoipa::path(
    post,
    path = "/generate/",
    tag = "documents",
    responses(
        (status = 200, description = "Document generated", body = GenerateResponse),
        (status = 400, description = "Unsupported document type", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state, request), fields(operation = "generate_document"))]
pub async fn generate_document(
    State(state): State<Arc<AppState>>,
    Form(request): Form<GenerateRequest>,
) -> Result<Json<GenerateResponse>, HttpAppError> {
    let kind: DocumentKind = request
        .doc_type
        .parse()
        .map_err(|e: notary_core::models::UnsupportedDocumentType| {
            HttpAppError::from(AppError::InvalidInput(e.to_string()))
        })?;

    let doc_id = Uuid::new_v4();
    let property_address = request.property_address.unwrap_or_default();
    let content = render_document(kind, doc_id, &request.owner_name, &property_address);

    let document_filename = format!("{}.txt", doc_id);
    let download = state
        .generated
        .save(&document_filename, content.clone().into_bytes())
        .await
        .map_err(HttpAppError::from)?;

    let qr_payload = GeneratedQrPayload {
        doc_id,
        kind,
        owner: &request.owner_name,
    };
    let qr_png = state.qr.render_png(&qr_payload).map_err(HttpAppError::from)?;

    let qr_filename = format!("{}_qr.png", doc_id);
    let qr = state
        .generated
        .save(&qr_filename, qr_png)
        .await
        .map_err(HttpAppError::from)?;

    let document = GeneratedDocument {
        id: doc_id,
        kind,
        owner_name: request.owner_name,
        property_address: if property_address.is_empty() {
            None
        } else {
            Some(property_address)
        },
        content,
        qr_filename,
        created_at: Utc::now(),
    };

    tracing::info!(
        doc_id = %document.id,
        kind = %document.kind,
        "Document generated"
    );

    Ok(Json(GenerateResponse {
        doc_id: document.id,
        download,
        qr,
    }))
}

//! OpenAPI documentation

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notary Document Service",
        description = "Legal document intake: OCR extraction, face detection, QR-coded submission metadata, and templated document generation."
    ),
    paths(
        crate::handlers::upload::upload_document,
        crate::handlers::files::get_uploaded_file,
        crate::handlers::generate::generate_document,
        crate::handlers::files::get_generated_file,
        crate::handlers::health::health_check,
    ),
    components(schemas(
        notary_core::models::UploadResponse,
        notary_core::models::GenerateResponse,
        notary_core::models::DocumentKind,
        crate::error::ErrorResponse,
    )),
    tags(
        (name = "documents", description = "Document upload and generation"),
        (name = "files", description = "Artifact retrieval"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

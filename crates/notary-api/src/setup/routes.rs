//! Route configuration and setup

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use notary_core::Config;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa_rapidoc::RapiDoc;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;

    let app = Router::new()
        .route("/upload/", post(handlers::upload::upload_document))
        .route("/file/{filename}", get(handlers::files::get_uploaded_file))
        .route("/generate/", post(handlers::generate::generate_document))
        .route(
            "/generated/{filename}",
            get(handlers::files::get_generated_file),
        )
        .route("/health", get(handlers::health::health_check))
        .route(
            "/api/openapi.json",
            get(|| async { Json(crate::api_doc::get_openapi_spec()) }),
        )
        .merge(RapiDoc::new("/api/openapi.json").path("/docs"))
        .layer(DefaultBodyLimit::max(config.max_upload_size_bytes))
        .layer(RequestBodyLimitLayer::new(config.max_upload_size_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Setup CORS configuration
///
/// Credentials are allowed, which rules out wildcard origins and headers:
/// origins come from config and request headers are mirrored back.
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .map_err(|e| anyhow::anyhow!("Invalid CORS origin '{}': {}", o, e))
        })
        .collect::<Result<_, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

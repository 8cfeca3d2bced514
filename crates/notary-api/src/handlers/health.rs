//! Health check handler

use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse, Json};
use notary_storage::Storage;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uploads: String,
    generated: String,
}

/// Health probe: verifies both storage directories are reachable.
///
/// A lightweight exists() check with a name that never exists verifies
/// directory access without creating files.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service healthy"),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn health_check(state: axum::extract::State<Arc<AppState>>) -> impl IntoResponse {
    const TIMEOUT: Duration = Duration::from_secs(5);
    const PROBE_NAME: &str = "health-check-non-existent-file";

    let mut response = HealthCheckResponse {
        status: "healthy".to_string(),
        uploads: "unknown".to_string(),
        generated: "unknown".to_string(),
    };
    let mut overall_healthy = true;

    for (label, storage) in [
        (&mut response.uploads, &state.uploads),
        (&mut response.generated, &state.generated),
    ] {
        match tokio::time::timeout(TIMEOUT, storage.exists(PROBE_NAME)).await {
            Ok(Ok(_)) => {
                *label = "healthy".to_string();
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Storage health check failed");
                *label = format!("unhealthy: {}", e);
                overall_healthy = false;
            }
            Err(_) => {
                tracing::warn!("Storage health check timed out");
                *label = "timeout".to_string();
                overall_healthy = false;
            }
        }
    }

    let status_code = if overall_healthy {
        StatusCode::OK
    } else {
        response.status = "unhealthy".to_string();
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}

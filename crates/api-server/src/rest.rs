//! Operational endpoints and the shared error body.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hotel_core::StorefrontError;
use serde::Serialize;
use std::time::Instant;
use tracing::error;
use utoipa::ToSchema;

/// Shared state for operational handlers.
#[derive(Clone)]
pub struct AppState {
    pub node_id: String,
    pub start_time: Instant,
}

/// GET /health: Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Operations",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        node_id: state.node_id.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /ready: Readiness probe.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "Operations",
    responses(
        (status = 200, description = "Ready to accept traffic"),
    )
)]
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /live: Liveness probe.
#[utoipa::path(
    get,
    path = "/live",
    tag = "Operations",
    responses(
        (status = 200, description = "Process is alive"),
    )
)]
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: impl Into<String>) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub node_id: String,
    pub uptime_secs: u64,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// 400 with a machine-readable code.
pub fn bad_request(error: &str, message: impl Into<String>) -> ApiError {
    metrics::counter!("api.validation_errors").increment(1);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(error, message)),
    )
}

/// Map a failed upstream fetch to a response. Upstream faults surface as
/// 502; anything else is a 500 with the detail kept in the logs.
pub fn upstream_failure(err: StorefrontError) -> ApiError {
    metrics::counter!("api.errors").increment(1);
    if err.is_upstream() {
        error!(error = %err, "Booking API request failed");
        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse::new("upstream_unavailable", err.to_string())),
        )
    } else {
        error!(error = %err, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("internal_error", "Internal processing error")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_errors_map_to_bad_gateway() {
        let (status, body) = upstream_failure(StorefrontError::UpstreamStatus {
            status: 500,
            path: "/bookings".to_string(),
        });
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.error, "upstream_unavailable");
    }

    #[test]
    fn test_other_errors_map_to_internal() {
        let (status, body) = upstream_failure(StorefrontError::Config("bad".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "Internal processing error");
    }
}

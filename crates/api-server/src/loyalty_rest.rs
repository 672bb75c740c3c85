//! Loyalty program REST API endpoints.

use crate::rest::{bad_request, upstream_failure, ApiError, ErrorResponse};
use crate::upstream::BookingSource;
use axum::extract::{Path, State};
use axum::Json;
use hotel_core::loyalty::*;
use hotel_loyalty::LoyaltyEngine;
use std::sync::Arc;
use tracing::warn;

/// Maximum user ID length accepted in a path.
const MAX_USER_ID_LEN: usize = 128;

/// Shared state for loyalty endpoints.
#[derive(Clone)]
pub struct LoyaltyState {
    pub engine: Arc<LoyaltyEngine>,
    pub bookings: Arc<dyn BookingSource>,
}

/// User IDs are interpolated into upstream paths, so only plain identifier
/// characters are accepted.
fn validate_user_id(user_id: &str) -> Result<(), &'static str> {
    if user_id.is_empty() {
        return Err("user id must not be empty");
    }
    if user_id.len() > MAX_USER_ID_LEN {
        return Err("user id exceeds maximum length");
    }
    if !user_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err("user id contains unsupported characters");
    }
    Ok(())
}

/// GET /v1/loyalty/tiers: The tier ladder, lowest first.
#[utoipa::path(
    get,
    path = "/v1/loyalty/tiers",
    tag = "Loyalty",
    responses(
        (status = 200, description = "Tier ladder", body = Vec<TierInfo>),
    )
)]
pub async fn handle_tiers(State(state): State<LoyaltyState>) -> Json<Vec<TierInfo>> {
    Json(state.engine.tiers())
}

/// POST /v1/loyalty/summary: Tier, points and progress for an aggregate.
#[utoipa::path(
    post,
    path = "/v1/loyalty/summary",
    tag = "Loyalty",
    request_body = LoyaltyInput,
    responses(
        (status = 200, description = "Loyalty summary", body = LoyaltySummary),
    )
)]
pub async fn handle_summary(
    State(state): State<LoyaltyState>,
    Json(input): Json<LoyaltyInput>,
) -> Json<LoyaltySummary> {
    metrics::counter!("loyalty.api.summary").increment(1);
    Json(state.engine.summarize(&input))
}

/// GET /v1/loyalty/users/{user_id}: Summary built from the guest's
/// booking history in the booking API.
#[utoipa::path(
    get,
    path = "/v1/loyalty/users/{user_id}",
    tag = "Loyalty",
    params(
        ("user_id" = String, Path, description = "Guest identifier in the booking API"),
    ),
    responses(
        (status = 200, description = "Loyalty summary", body = LoyaltySummary),
        (status = 400, description = "Malformed user id", body = ErrorResponse),
        (status = 502, description = "Booking API unavailable", body = ErrorResponse),
    )
)]
pub async fn handle_user_summary(
    State(state): State<LoyaltyState>,
    Path(user_id): Path<String>,
) -> Result<Json<LoyaltySummary>, ApiError> {
    if let Err(msg) = validate_user_id(&user_id) {
        warn!(error = msg, "Loyalty lookup rejected");
        return Err(bad_request("invalid_user_id", msg));
    }

    let bookings = state
        .bookings
        .user_bookings(&user_id)
        .await
        .map_err(upstream_failure)?;

    metrics::counter!("loyalty.api.user_summary").increment(1);
    Ok(Json(state.engine.summarize_bookings(&user_id, &bookings)))
}

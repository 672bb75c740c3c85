//! Back-office revenue reporting endpoint.

use crate::rest::{upstream_failure, ApiError, ErrorResponse};
use crate::upstream::BookingSource;
use axum::extract::{Query, State};
use axum::Json;
use hotel_reporting::RevenueReport;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

/// Shared state for reporting endpoints.
#[derive(Clone)]
pub struct ReportState {
    pub bookings: Arc<dyn BookingSource>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RevenueQuery {
    /// Restrict the report to one hotel (hotel-owner console).
    pub hotel_id: Option<String>,
}

/// GET /v1/reports/revenue: Revenue over all bookings in the booking API.
#[utoipa::path(
    get,
    path = "/v1/reports/revenue",
    tag = "Reports",
    params(RevenueQuery),
    responses(
        (status = 200, description = "Revenue report", body = RevenueReport),
        (status = 502, description = "Booking API unavailable", body = ErrorResponse),
    )
)]
pub async fn handle_revenue(
    State(state): State<ReportState>,
    Query(query): Query<RevenueQuery>,
) -> Result<Json<RevenueReport>, ApiError> {
    let mut bookings = state
        .bookings
        .all_bookings()
        .await
        .map_err(upstream_failure)?;

    if let Some(hotel_id) = query.hotel_id.as_deref() {
        bookings.retain(|b| b.hotel_id == hotel_id);
    }

    metrics::counter!("reports.api.revenue").increment(1);
    Ok(Json(RevenueReport::from_bookings(&bookings)))
}

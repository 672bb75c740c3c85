//! Checkout pricing REST API endpoint.

use crate::rest::{bad_request, ApiError, ErrorResponse};
use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use hotel_core::pricing::StayQuote;
use hotel_pricing::StayPricer;
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;
use utoipa::ToSchema;

/// Shared state for pricing endpoints.
#[derive(Clone)]
pub struct PricingState {
    pub pricer: Arc<StayPricer>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuoteRequest {
    /// Nightly rate.
    pub base_price: f64,
    /// `YYYY-MM-DD`; absent or empty counts as missing.
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    /// Fraction in [0, 1]; the configured default when absent.
    #[serde(default)]
    pub tax_rate: Option<f64>,
}

fn parse_day(field: &str, raw: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| format!("'{field}' must be a YYYY-MM-DD date")),
    }
}

fn validate_tax_rate(rate: Option<f64>) -> Result<(), &'static str> {
    match rate {
        Some(r) if !(0.0..=1.0).contains(&r) => Err("'tax_rate' must be between 0 and 1"),
        _ => Ok(()),
    }
}

/// POST /v1/pricing/quote: Nights, subtotal, tax and total for a stay.
/// Date-rule violations come back as a 200 quote with `is_valid = false`.
#[utoipa::path(
    post,
    path = "/v1/pricing/quote",
    tag = "Pricing",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Stay quote", body = StayQuote),
        (status = 400, description = "Unparseable request", body = ErrorResponse),
    )
)]
pub async fn handle_quote(
    State(state): State<PricingState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<StayQuote>, ApiError> {
    let check_in = parse_day("check_in", request.check_in.as_deref())
        .map_err(|msg| bad_request("invalid_date", msg))?;
    let check_out = parse_day("check_out", request.check_out.as_deref())
        .map_err(|msg| bad_request("invalid_date", msg))?;

    if let Err(msg) = validate_tax_rate(request.tax_rate) {
        warn!(tax_rate = ?request.tax_rate, "Quote request rejected");
        return Err(bad_request("invalid_tax_rate", msg));
    }

    Ok(Json(state.pricer.quote(
        request.base_price,
        check_in,
        check_out,
        request.tax_rate,
    )))
}

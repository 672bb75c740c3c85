//! Stay quote types shared by the pricing calculator and the checkout API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Why a stay could not be priced. Checked in declaration order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum QuoteRejection {
    #[serde(rename = "missing dates")]
    MissingDates,
    #[serde(rename = "check-in in the past")]
    CheckInInPast,
    #[serde(rename = "check-out not after check-in")]
    CheckOutNotAfterCheckIn,
}

impl QuoteRejection {
    /// User-facing reason text.
    pub fn reason(&self) -> &'static str {
        match self {
            QuoteRejection::MissingDates => "missing dates",
            QuoteRejection::CheckInInPast => "check-in in the past",
            QuoteRejection::CheckOutNotAfterCheckIn => "check-out not after check-in",
        }
    }
}

impl std::fmt::Display for QuoteRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// Nights and amounts for a prospective reservation. An invalid quote has
/// zero nights and zero amounts and must not be used for pricing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct StayQuote {
    pub nights: u32,
    pub subtotal: f64,
    pub taxes: f64,
    pub total: f64,
    pub is_valid: bool,
    pub error_reason: Option<QuoteRejection>,
}

impl StayQuote {
    pub fn priced(nights: u32, subtotal: f64, taxes: f64) -> Self {
        Self {
            nights,
            subtotal,
            taxes,
            total: subtotal + taxes,
            is_valid: true,
            error_reason: None,
        }
    }

    pub fn rejected(reason: QuoteRejection) -> Self {
        Self {
            nights: 0,
            subtotal: 0.0,
            taxes: 0.0,
            total: 0.0,
            is_valid: false,
            error_reason: Some(reason),
        }
    }
}

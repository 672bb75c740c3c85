//! Booking records as returned by the remote booking API.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Lifecycle status of a reservation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    /// Confirmed and completed stays count toward loyalty and revenue.
    pub fn counts_toward_loyalty(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Unknown => "unknown",
        }
    }
}

/// A reservation. Field names follow the upstream camelCase JSON.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub hotel_id: String,
    #[serde(default)]
    pub hotel_name: Option<String>,
    #[serde(default)]
    pub room_id: Option<String>,
    #[serde(default, deserialize_with = "calendar_day")]
    pub check_in: Option<NaiveDate>,
    #[serde(default, deserialize_with = "calendar_day")]
    pub check_out: Option<NaiveDate>,
    #[serde(default, alias = "totalAmount")]
    pub total_price: f64,
    pub status: BookingStatus,
}

/// Accepts either `YYYY-MM-DD` or a full ISO-8601 timestamp and keeps only
/// the calendar day.
fn calendar_day<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => {
            let day = s.get(..10).unwrap_or(s.as_str());
            NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom)
        }
    }
}

//! Client for the remote booking REST API. The storefront owns no booking
//! state; history and reporting data are fetched on every request.

use async_trait::async_trait;
use hotel_core::booking::Booking;
use hotel_core::config::UpstreamConfig;
use hotel_core::{StorefrontError, StorefrontResult};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Where booking history comes from.
#[async_trait]
pub trait BookingSource: Send + Sync {
    /// Every booking made by one guest.
    async fn user_bookings(&self, user_id: &str) -> StorefrontResult<Vec<Booking>>;

    /// Every booking visible to the back office.
    async fn all_bookings(&self) -> StorefrontResult<Vec<Booking>>;
}

/// The booking API answers with either a bare array or an object wrapping it.
#[derive(Deserialize)]
#[serde(untagged)]
enum BookingsEnvelope {
    Bare(Vec<Booking>),
    Wrapped {
        #[serde(alias = "data")]
        bookings: Vec<Booking>,
    },
}

impl BookingsEnvelope {
    fn into_bookings(self) -> Vec<Booking> {
        match self {
            BookingsEnvelope::Bare(bookings) => bookings,
            BookingsEnvelope::Wrapped { bookings } => bookings,
        }
    }
}

/// `reqwest`-backed [`BookingSource`].
pub struct RestBookingSource {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl RestBookingSource {
    pub fn new(config: &UpstreamConfig) -> StorefrontResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| StorefrontError::Config(format!("upstream client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_token: config.auth_token.clone(),
        })
    }

    async fn fetch(&self, path: &str) -> StorefrontResult<Vec<Booking>> {
        let start = Instant::now();
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Upstream request failed");
            metrics::counter!("upstream.errors", "kind" => "transport").increment(1);
            StorefrontError::Upstream(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Upstream returned error status");
            metrics::counter!("upstream.errors", "kind" => "status").increment(1);
            return Err(StorefrontError::UpstreamStatus {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let envelope: BookingsEnvelope = response.json().await.map_err(|e| {
            metrics::counter!("upstream.errors", "kind" => "decode").increment(1);
            StorefrontError::Upstream(format!("decoding {path}: {e}"))
        })?;
        let bookings = envelope.into_bookings();

        debug!(
            url = %url,
            count = bookings.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Fetched bookings"
        );
        metrics::counter!("upstream.requests").increment(1);

        Ok(bookings)
    }
}

#[async_trait]
impl BookingSource for RestBookingSource {
    async fn user_bookings(&self, user_id: &str) -> StorefrontResult<Vec<Booking>> {
        self.fetch(&format!("/bookings/user/{user_id}")).await
    }

    async fn all_bookings(&self) -> StorefrontResult<Vec<Booking>> {
        self.fetch("/bookings").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_accepts_bare_array() {
        let json = r#"[{"id": "b-1", "status": "confirmed", "totalPrice": 90}]"#;
        let bookings = serde_json::from_str::<BookingsEnvelope>(json)
            .unwrap()
            .into_bookings();
        assert_eq!(bookings.len(), 1);
    }

    #[test]
    fn test_envelope_accepts_wrapped_array() {
        let json = r#"{"success": true, "data": [{"id": "b-1", "status": "pending"}]}"#;
        let bookings = serde_json::from_str::<BookingsEnvelope>(json)
            .unwrap()
            .into_bookings();
        assert_eq!(bookings[0].id, "b-1");

        let json = r#"{"bookings": []}"#;
        assert!(serde_json::from_str::<BookingsEnvelope>(json)
            .unwrap()
            .into_bookings()
            .is_empty());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let source = RestBookingSource::new(&UpstreamConfig {
            base_url: "http://bookings.internal/api/".to_string(),
            ..UpstreamConfig::default()
        })
        .unwrap();
        assert_eq!(source.base_url, "http://bookings.internal/api");
    }
}

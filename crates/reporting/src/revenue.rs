//! Revenue report for the admin and hotel-owner consoles.

use chrono::{DateTime, Utc};
use hotel_core::booking::{Booking, BookingStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct StatusBreakdown {
    pub pending: u64,
    pub confirmed: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub unknown: u64,
}

impl StatusBreakdown {
    fn record(&mut self, status: BookingStatus) {
        let slot = match status {
            BookingStatus::Pending => &mut self.pending,
            BookingStatus::Confirmed => &mut self.confirmed,
            BookingStatus::Completed => &mut self.completed,
            BookingStatus::Cancelled => &mut self.cancelled,
            BookingStatus::Unknown => &mut self.unknown,
        };
        *slot += 1;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct HotelRevenue {
    pub hotel_id: String,
    pub hotel_name: Option<String>,
    /// Confirmed and completed bookings only.
    pub bookings: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RevenueReport {
    pub total_revenue: f64,
    /// All bookings seen, whatever their status.
    pub booking_count: u64,
    /// Bookings that contributed revenue.
    pub revenue_bookings: u64,
    pub average_booking_value: f64,
    pub by_status: StatusBreakdown,
    /// Highest revenue first.
    pub by_hotel: Vec<HotelRevenue>,
    pub generated_at: DateTime<Utc>,
}

impl RevenueReport {
    /// Only confirmed and completed bookings contribute revenue; every
    /// booking is counted in the status breakdown.
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        let mut by_status = StatusBreakdown::default();
        let mut hotels: HashMap<&str, HotelRevenue> = HashMap::new();
        let mut total_revenue = 0.0;
        let mut revenue_bookings = 0u64;

        for booking in bookings {
            by_status.record(booking.status);
            if !booking.status.counts_toward_loyalty() {
                continue;
            }

            total_revenue += booking.total_price;
            revenue_bookings += 1;

            let entry = hotels
                .entry(booking.hotel_id.as_str())
                .or_insert_with(|| HotelRevenue {
                    hotel_id: booking.hotel_id.clone(),
                    hotel_name: None,
                    bookings: 0,
                    revenue: 0.0,
                });
            entry.bookings += 1;
            entry.revenue += booking.total_price;
            if entry.hotel_name.is_none() {
                entry.hotel_name = booking.hotel_name.clone();
            }
        }

        let mut by_hotel: Vec<HotelRevenue> = hotels.into_values().collect();
        by_hotel.sort_by(|a, b| {
            b.revenue
                .total_cmp(&a.revenue)
                .then_with(|| a.hotel_id.cmp(&b.hotel_id))
        });

        let average_booking_value = if revenue_bookings > 0 {
            total_revenue / revenue_bookings as f64
        } else {
            0.0
        };

        debug!(
            bookings = bookings.len(),
            revenue_bookings = revenue_bookings,
            hotels = by_hotel.len(),
            total_revenue = total_revenue,
            "Revenue report built"
        );

        Self {
            total_revenue,
            booking_count: bookings.len() as u64,
            revenue_bookings,
            average_booking_value,
            by_status,
            by_hotel,
            generated_at: Utc::now(),
        }
    }
}

//! Back-office reporting over booking history: revenue totals, status
//! breakdown and per-hotel revenue.

pub mod revenue;

pub use revenue::{HotelRevenue, RevenueReport, StatusBreakdown};

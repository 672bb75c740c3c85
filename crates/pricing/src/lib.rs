//! Stay pricing: nights, subtotal, tax and total for a prospective booking.

pub mod quote;

pub use quote::{quote_stay, StayPricer};

#![warn(clippy::unwrap_used)]

pub mod loyalty_rest;
pub mod pricing_rest;
pub mod report_rest;
pub mod rest;
pub mod server;
pub mod swagger;
pub mod upstream;

pub use server::ApiServer;
pub use swagger::ApiDoc;
pub use upstream::{BookingSource, RestBookingSource};

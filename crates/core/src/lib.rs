pub mod booking;
pub mod config;
pub mod error;
pub mod loyalty;
pub mod pricing;

pub use config::AppConfig;
pub use error::{StorefrontError, StorefrontResult};

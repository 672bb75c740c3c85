//! Loyalty tier resolution and points calculation.

pub mod engine;

pub use engine::{
    calculate_points, next_tier_requirements, progress_to_next_tier, resolve_tier, LoyaltyEngine,
};

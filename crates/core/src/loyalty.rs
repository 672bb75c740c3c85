//! Loyalty program domain types: the fixed four-rung tier ladder and the
//! display records derived from it.
//!
//! Qualification is conjunctive: a guest reaches a tier only when both the
//! confirmed-booking count and the total spend meet its minimums.

use crate::booking::Booking;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ─── Tier Ladder ────────────────────────────────────────────────────────────

/// Rungs of the loyalty ladder, ordered lowest to highest.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TierLevel {
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl TierLevel {
    /// Every level, lowest first.
    pub const ALL: [TierLevel; 4] = [
        TierLevel::Bronze,
        TierLevel::Silver,
        TierLevel::Gold,
        TierLevel::Diamond,
    ];

    /// The static tier record for this level.
    pub fn tier(&self) -> &'static LoyaltyTier {
        &TIER_LADDER[*self as usize]
    }

    /// The level directly above this one, `None` at the top.
    pub fn next(&self) -> Option<TierLevel> {
        match self {
            TierLevel::Bronze => Some(TierLevel::Silver),
            TierLevel::Silver => Some(TierLevel::Gold),
            TierLevel::Gold => Some(TierLevel::Diamond),
            TierLevel::Diamond => None,
        }
    }

    pub fn is_top(&self) -> bool {
        self.next().is_none()
    }
}

/// A loyalty tier: qualification thresholds, display color, points
/// multiplier and the benefits shown to members.
#[derive(Debug, Serialize, PartialEq)]
pub struct LoyaltyTier {
    pub level: TierLevel,
    pub name: &'static str,
    pub min_bookings: u32,
    pub min_spent: f64,
    pub color: &'static str,
    pub multiplier: f64,
    pub benefits: &'static [&'static str],
}

impl LoyaltyTier {
    /// Both thresholds are inclusive minimums.
    pub fn qualifies(&self, confirmed_bookings: u32, total_spent: f64) -> bool {
        confirmed_bookings >= self.min_bookings && total_spent >= self.min_spent
    }
}

/// The tier ladder, indexed by `TierLevel as usize`.
pub static TIER_LADDER: [LoyaltyTier; 4] = [
    LoyaltyTier {
        level: TierLevel::Bronze,
        name: "Bronze",
        min_bookings: 0,
        min_spent: 0.0,
        color: "#CD7F32",
        multiplier: 1.0,
        benefits: &["Member-only rates", "Booking history and e-receipts"],
    },
    LoyaltyTier {
        level: TierLevel::Silver,
        name: "Silver",
        min_bookings: 5,
        min_spent: 1000.0,
        color: "#C0C0C0",
        multiplier: 1.25,
        benefits: &[
            "Member-only rates",
            "Early check-in when available",
            "5% off on-site dining",
        ],
    },
    LoyaltyTier {
        level: TierLevel::Gold,
        name: "Gold",
        min_bookings: 15,
        min_spent: 5000.0,
        color: "#FFD700",
        multiplier: 1.5,
        benefits: &[
            "Member-only rates",
            "Room upgrade when available",
            "Late checkout until 2 PM",
            "Priority support",
        ],
    },
    LoyaltyTier {
        level: TierLevel::Diamond,
        name: "Diamond",
        min_bookings: 30,
        min_spent: 15000.0,
        color: "#B9F2FF",
        multiplier: 2.0,
        benefits: &[
            "Member-only rates",
            "Guaranteed room upgrade",
            "Complimentary breakfast",
            "Late checkout until 4 PM",
            "Dedicated concierge",
        ],
    },
];

// ─── Inputs ─────────────────────────────────────────────────────────────────

/// Per-guest aggregate fed to the calculators. Supplied by booking-history
/// aggregation; never persisted here.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct LoyaltyInput {
    pub confirmed_bookings: u32,
    pub total_spent: f64,
}

impl LoyaltyInput {
    pub fn new(confirmed_bookings: u32, total_spent: f64) -> Self {
        Self {
            confirmed_bookings,
            total_spent,
        }
    }

    /// Count confirmed and completed bookings and sum what they cost.
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        bookings
            .iter()
            .filter(|b| b.status.counts_toward_loyalty())
            .fold(Self::default(), |acc, b| Self {
                confirmed_bookings: acc.confirmed_bookings + 1,
                total_spent: acc.total_spent + b.total_price,
            })
    }
}

// ─── Derived Records ────────────────────────────────────────────────────────

/// What is still missing before the next tier is reached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct TierRequirements {
    pub next_tier: TierLevel,
    pub bookings_needed: u32,
    pub spend_needed: f64,
}

/// Owned copy of a tier for API payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct TierInfo {
    pub level: TierLevel,
    pub name: String,
    pub min_bookings: u32,
    pub min_spent: f64,
    pub color: String,
    pub multiplier: f64,
    pub benefits: Vec<String>,
}

impl From<&LoyaltyTier> for TierInfo {
    fn from(tier: &LoyaltyTier) -> Self {
        Self {
            level: tier.level,
            name: tier.name.to_string(),
            min_bookings: tier.min_bookings,
            min_spent: tier.min_spent,
            color: tier.color.to_string(),
            multiplier: tier.multiplier,
            benefits: tier.benefits.iter().map(|b| b.to_string()).collect(),
        }
    }
}

/// Everything a profile or loyalty view renders for one guest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct LoyaltySummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub confirmed_bookings: u32,
    pub total_spent: f64,
    pub tier: TierInfo,
    pub points: u64,
    /// Percent in [0, 100].
    pub progress_percent: f64,
    pub next_tier: Option<TierRequirements>,
}

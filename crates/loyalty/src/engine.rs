//! Loyalty engine: tier resolution, progress toward the next tier, and
//! points. Stateless computation over the fixed tier ladder.

use hotel_core::booking::Booking;
use hotel_core::config::LoyaltyConfig;
use hotel_core::loyalty::*;
use tracing::{debug, info};

/// Points per booking, before the tier multiplier.
const POINTS_PER_BOOKING: f64 = 100.0;

/// Currency units of spend per base point.
const SPEND_PER_POINT: f64 = 10.0;

/// Highest tier whose booking and spend minimums are both met. Bronze when
/// nothing else qualifies, including negative spend.
pub fn resolve_tier(confirmed_bookings: u32, total_spent: f64) -> &'static LoyaltyTier {
    TIER_LADDER
        .iter()
        .rev()
        .find(|tier| tier.qualifies(confirmed_bookings, total_spent))
        .unwrap_or(&TIER_LADDER[0])
}

/// Percent progress toward the next tier, in [0, 100]. Each axis is capped at
/// 100 and the lower axis wins, so 100 means both minimums are met.
pub fn progress_to_next_tier(confirmed_bookings: u32, total_spent: f64) -> f64 {
    let current = resolve_tier(confirmed_bookings, total_spent);
    let Some(next) = current.level.next() else {
        return 100.0;
    };
    let next = next.tier();

    let booking_axis = axis_progress(confirmed_bookings as f64, next.min_bookings as f64);
    let spend_axis = axis_progress(total_spent, next.min_spent);
    booking_axis.min(spend_axis).max(0.0)
}

fn axis_progress(current: f64, required: f64) -> f64 {
    if required <= 0.0 {
        return 100.0;
    }
    (current / required * 100.0).min(100.0)
}

/// Bookings and spend still missing for the next tier; `None` at the top.
pub fn next_tier_requirements(confirmed_bookings: u32, total_spent: f64) -> Option<TierRequirements> {
    let current = resolve_tier(confirmed_bookings, total_spent);
    let next = current.level.next()?.tier();
    Some(TierRequirements {
        next_tier: next.level,
        bookings_needed: next.min_bookings.saturating_sub(confirmed_bookings),
        spend_needed: (next.min_spent - total_spent).max(0.0),
    })
}

/// `floor(spent / 10) + bookings * 100`, scaled by the resolved tier's
/// multiplier and rounded. Never negative.
pub fn calculate_points(confirmed_bookings: u32, total_spent: f64) -> u64 {
    let base = (total_spent / SPEND_PER_POINT).floor() + confirmed_bookings as f64 * POINTS_PER_BOOKING;
    let tier = resolve_tier(confirmed_bookings, total_spent);
    let points = (base * tier.multiplier).round();
    if points > 0.0 {
        points as u64
    } else {
        0
    }
}

/// Loyalty program engine used by the profile and loyalty views.
pub struct LoyaltyEngine {
    config: LoyaltyConfig,
}

impl LoyaltyEngine {
    pub fn new(config: &LoyaltyConfig) -> Self {
        info!(
            enabled = config.enabled,
            tiers = TIER_LADDER.len(),
            "Loyalty engine initialized"
        );
        Self {
            config: config.clone(),
        }
    }

    /// Tier, points, progress and next-tier requirements in one record.
    pub fn summarize(&self, input: &LoyaltyInput) -> LoyaltySummary {
        let LoyaltyInput {
            confirmed_bookings,
            total_spent,
        } = *input;

        let tier = resolve_tier(confirmed_bookings, total_spent);
        let summary = LoyaltySummary {
            user_id: None,
            confirmed_bookings,
            total_spent,
            tier: TierInfo::from(tier),
            points: calculate_points(confirmed_bookings, total_spent),
            progress_percent: progress_to_next_tier(confirmed_bookings, total_spent),
            next_tier: next_tier_requirements(confirmed_bookings, total_spent),
        };

        metrics::counter!("loyalty.summaries", "tier" => tier.name).increment(1);
        debug!(
            bookings = confirmed_bookings,
            spent = total_spent,
            tier = tier.name,
            points = summary.points,
            progress = summary.progress_percent,
            "Loyalty summary computed"
        );

        summary
    }

    /// Summarize a guest from their raw booking history.
    pub fn summarize_bookings(&self, user_id: &str, bookings: &[Booking]) -> LoyaltySummary {
        let input = LoyaltyInput::from_bookings(bookings);
        debug!(
            user_id = %user_id,
            total = bookings.len(),
            qualifying = input.confirmed_bookings,
            "Aggregated booking history"
        );
        LoyaltySummary {
            user_id: Some(user_id.to_string()),
            ..self.summarize(&input)
        }
    }

    /// The full ladder, lowest tier first.
    pub fn tiers(&self) -> Vec<TierInfo> {
        TIER_LADDER.iter().map(TierInfo::from).collect()
    }

    pub fn config(&self) -> &LoyaltyConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_core::booking::BookingStatus;

    fn test_engine() -> LoyaltyEngine {
        LoyaltyEngine::new(&LoyaltyConfig::default())
    }

    #[test]
    fn test_resolve_diamond() {
        assert_eq!(resolve_tier(30, 15_000.0).level, TierLevel::Diamond);
        assert_eq!(resolve_tier(120, 80_000.0).level, TierLevel::Diamond);
    }

    #[test]
    fn test_resolve_bronze_below_silver() {
        assert_eq!(resolve_tier(4, 50_000.0).level, TierLevel::Bronze);
        assert_eq!(resolve_tier(40, 999.0).level, TierLevel::Bronze);
        assert_eq!(resolve_tier(0, 0.0).level, TierLevel::Bronze);
    }

    #[test]
    fn test_resolve_is_conjunctive() {
        // Diamond bookings with only Gold spend stays Gold.
        assert_eq!(resolve_tier(30, 5_000.0).level, TierLevel::Gold);
        // Gold spend with only Silver bookings stays Silver.
        assert_eq!(resolve_tier(5, 14_999.0).level, TierLevel::Silver);
    }

    #[test]
    fn test_resolve_boundaries_inclusive() {
        assert_eq!(resolve_tier(5, 1000.0).level, TierLevel::Silver);
        assert_eq!(resolve_tier(15, 5000.0).level, TierLevel::Gold);
        assert_eq!(resolve_tier(14, 5000.0).level, TierLevel::Silver);
    }

    #[test]
    fn test_negative_spend_is_bronze() {
        assert_eq!(resolve_tier(50, -10.0).level, TierLevel::Bronze);
        assert_eq!(progress_to_next_tier(0, -500.0), 0.0);
    }

    #[test]
    fn test_tier_monotonic_in_each_input() {
        for bookings in 0..40u32 {
            let mut previous = TierLevel::Bronze;
            for step in 0..40 {
                let level = resolve_tier(bookings, step as f64 * 500.0).level;
                assert!(level >= previous);
                previous = level;
            }
        }
        for step in 0..40 {
            let spent = step as f64 * 500.0;
            let mut previous = TierLevel::Bronze;
            for bookings in 0..40u32 {
                let level = resolve_tier(bookings, spent).level;
                assert!(level >= previous);
                previous = level;
            }
        }
    }

    #[test]
    fn test_progress_takes_lower_axis() {
        // Toward Silver: bookings 4/5 = 80%, spend 250/1000 = 25%.
        assert_eq!(progress_to_next_tier(4, 250.0), 25.0);
        // Spend axis capped at 100, bookings 2/5 = 40%.
        assert_eq!(progress_to_next_tier(2, 9_000.0), 40.0);
    }

    #[test]
    fn test_progress_at_top_is_full() {
        assert_eq!(progress_to_next_tier(30, 15_000.0), 100.0);
    }

    #[test]
    fn test_progress_non_decreasing_within_tier() {
        let mut previous = 0.0;
        for spent in (0..1000).step_by(50) {
            let p = progress_to_next_tier(3, spent as f64);
            assert!(p >= previous);
            previous = p;
        }
        let mut previous = 0.0;
        for bookings in 5..15u32 {
            let p = progress_to_next_tier(bookings, 2_000.0);
            assert!(p >= previous);
            previous = p;
        }
    }

    #[test]
    fn test_next_tier_requirements() {
        let reqs = next_tier_requirements(3, 400.0).unwrap();
        assert_eq!(reqs.next_tier, TierLevel::Silver);
        assert_eq!(reqs.bookings_needed, 2);
        assert_eq!(reqs.spend_needed, 600.0);

        // Bookings already past Silver's minimum but spend is not.
        let reqs = next_tier_requirements(9, 400.0).unwrap();
        assert_eq!(reqs.next_tier, TierLevel::Silver);
        assert_eq!(reqs.bookings_needed, 0);

        assert!(next_tier_requirements(30, 15_000.0).is_none());
    }

    #[test]
    fn test_points() {
        assert_eq!(calculate_points(0, 0.0), 0);
        assert_eq!(calculate_points(1, 100.0), 110);
        // Silver: floor(1234.5 / 10) + 500 = 623, * 1.25 = 778.75
        assert_eq!(calculate_points(5, 1234.5), 779);
        // Diamond: 1500 + 3000 = 4500, * 2.0
        assert_eq!(calculate_points(30, 15_000.0), 9_000);
    }

    #[test]
    fn test_points_never_negative() {
        assert_eq!(calculate_points(0, -1_000.0), 0);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let first = resolve_tier(17, 6_250.0);
        let second = resolve_tier(17, 6_250.0);
        assert!(std::ptr::eq(first, second));
        assert_eq!(
            progress_to_next_tier(17, 6_250.0).to_bits(),
            progress_to_next_tier(17, 6_250.0).to_bits()
        );
    }

    #[test]
    fn test_summarize() {
        let engine = test_engine();
        let summary = engine.summarize(&LoyaltyInput::new(6, 1_500.0));
        assert_eq!(summary.tier.level, TierLevel::Silver);
        assert_eq!(summary.points, 938); // (150 + 600) * 1.25 = 937.5
        assert_eq!(summary.next_tier.as_ref().unwrap().next_tier, TierLevel::Gold);
        assert!(summary.user_id.is_none());
    }

    #[test]
    fn test_summarize_bookings_ignores_unconfirmed() {
        let engine = test_engine();
        let make = |status, price| Booking {
            id: "b".to_string(),
            user_id: "guest-1".to_string(),
            hotel_id: "h-1".to_string(),
            hotel_name: None,
            room_id: None,
            check_in: None,
            check_out: None,
            total_price: price,
            status,
        };
        let bookings = vec![
            make(BookingStatus::Completed, 300.0),
            make(BookingStatus::Cancelled, 5_000.0),
        ];
        let summary = engine.summarize_bookings("guest-1", &bookings);
        assert_eq!(summary.user_id.as_deref(), Some("guest-1"));
        assert_eq!(summary.confirmed_bookings, 1);
        assert_eq!(summary.total_spent, 300.0);
        assert_eq!(summary.points, 130);
    }

    #[test]
    fn test_tiers_listed_lowest_first() {
        let tiers = test_engine().tiers();
        assert_eq!(tiers.len(), 4);
        assert_eq!(tiers[0].level, TierLevel::Bronze);
        assert_eq!(tiers[3].level, TierLevel::Diamond);
    }
}

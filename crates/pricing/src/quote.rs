//! Stay quote calculation with checkout date validation.

use chrono::{Local, NaiveDate};
use hotel_core::config::PricingConfig;
use hotel_core::pricing::{QuoteRejection, StayQuote};
use tracing::{debug, info};

/// Price a stay as of `today`. Checks run in order and the first failure
/// wins: both dates present, check-in not before today, check-out after
/// check-in. Taxes round half-up to whole currency units; subtotal and total
/// keep the precision of `base_price`.
pub fn quote_stay(
    base_price: f64,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
    tax_rate: f64,
    today: NaiveDate,
) -> StayQuote {
    let (Some(check_in), Some(check_out)) = (check_in, check_out) else {
        return StayQuote::rejected(QuoteRejection::MissingDates);
    };
    if check_in < today {
        return StayQuote::rejected(QuoteRejection::CheckInInPast);
    }
    if check_out <= check_in {
        return StayQuote::rejected(QuoteRejection::CheckOutNotAfterCheckIn);
    }

    let days = (check_out - check_in).num_days().max(1);
    let nights = u32::try_from(days).unwrap_or(u32::MAX);
    let subtotal = (base_price * nights as f64).max(0.0);
    let taxes = (subtotal * tax_rate).round();

    StayQuote::priced(nights, subtotal, taxes)
}

/// Checkout pricer carrying the configured default tax rate.
pub struct StayPricer {
    default_tax_rate: f64,
}

impl StayPricer {
    pub fn new(config: &PricingConfig) -> Self {
        info!(
            default_tax_rate = config.default_tax_rate,
            "Stay pricer initialized"
        );
        Self {
            default_tax_rate: config.default_tax_rate,
        }
    }

    pub fn default_tax_rate(&self) -> f64 {
        self.default_tax_rate
    }

    /// Quote against the host's local calendar day.
    pub fn quote(
        &self,
        base_price: f64,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
        tax_rate: Option<f64>,
    ) -> StayQuote {
        self.quote_on(
            Local::now().date_naive(),
            base_price,
            check_in,
            check_out,
            tax_rate,
        )
    }

    pub fn quote_on(
        &self,
        today: NaiveDate,
        base_price: f64,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
        tax_rate: Option<f64>,
    ) -> StayQuote {
        let rate = tax_rate.unwrap_or(self.default_tax_rate);
        let quote = quote_stay(base_price, check_in, check_out, rate, today);

        match quote.error_reason {
            Some(reason) => {
                metrics::counter!("pricing.quotes_rejected", "reason" => reason.reason())
                    .increment(1);
                debug!(
                    check_in = ?check_in,
                    check_out = ?check_out,
                    reason = %reason,
                    "Stay quote rejected"
                );
            }
            None => {
                metrics::counter!("pricing.quotes").increment(1);
                debug!(
                    nights = quote.nights,
                    subtotal = quote.subtotal,
                    total = quote.total,
                    "Stay quoted"
                );
            }
        }

        quote
    }
}

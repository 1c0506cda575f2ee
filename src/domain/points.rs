//! The scoring engine.
//!
//! Turns a receipt into its loyalty points total. Rules are applied in a fixed
//! order and a parse failure in any of them aborts the whole computation:
//! callers either get the complete score or an error, never a partial sum.

use super::receipt::{Amount, Receipt, parse_purchase_date, parse_purchase_time};
use crate::error::Result;
use chrono::{Datelike, Timelike};
use tracing::debug;

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const QUARTER_CENTS: u128 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
/// 14:00, exclusive.
const AFTERNOON_START_MINUTES: u32 = 14 * 60;
/// 16:00, exclusive.
const AFTERNOON_END_MINUTES: u32 = 16 * 60;
/// `ceil(price * 0.2)` in whole cents is `ceil(cents / 500)`.
const DESCRIPTION_BONUS_CENTS_DIVISOR: u128 = 500;

/// Points awarded by each rule, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_multiple_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_purchase_day: u64,
    pub afternoon_purchase: u64,
}

impl PointsBreakdown {
    /// Sum of all rules, saturating at `u64::MAX` for absurd item prices.
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(0u64, u64::saturating_add)
    }
}

/// Computes the points total for a receipt.
///
/// # Errors
///
/// * `MalformedAmount` if the total or a scored item price is not a currency value.
/// * `MalformedDate` if the purchase date is not a real `YYYY-MM-DD` date.
/// * `MalformedTime` if the purchase time is not a valid `HH:MM` time.
pub fn compute_points(receipt: &Receipt) -> Result<u64> {
    points_breakdown(receipt).map(|breakdown| breakdown.total())
}

/// Same as [`compute_points`] but reports what each rule contributed.
pub fn points_breakdown(receipt: &Receipt) -> Result<PointsBreakdown> {
    let mut breakdown = PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        ..Default::default()
    };

    let total: Amount = receipt.total.parse()?;
    if total.is_whole() {
        breakdown.round_dollar_total = ROUND_DOLLAR_POINTS;
    }
    if total.is_multiple_of_cents(QUARTER_CENTS) {
        breakdown.quarter_multiple_total = QUARTER_MULTIPLE_POINTS;
    }

    breakdown.item_pairs = (receipt.items.len() / 2) as u64 * POINTS_PER_ITEM_PAIR;

    for item in &receipt.items {
        let length = item.short_description.trim().len();
        if length > 0 && length % 3 == 0 {
            let price: Amount = item.price.parse()?;
            breakdown.item_descriptions = breakdown
                .item_descriptions
                .saturating_add(description_bonus(price));
        }
    }

    let date = parse_purchase_date(&receipt.purchase_date)?;
    if date.day() % 2 == 1 {
        breakdown.odd_purchase_day = ODD_DAY_POINTS;
    }

    let time = parse_purchase_time(&receipt.purchase_time)?;
    let minutes = time.hour() * 60 + time.minute();
    if minutes > AFTERNOON_START_MINUTES && minutes < AFTERNOON_END_MINUTES {
        breakdown.afternoon_purchase = AFTERNOON_POINTS;
    }

    debug!(
        retailer = %receipt.retailer,
        ?breakdown,
        points = breakdown.total(),
        "Scored receipt"
    );

    Ok(breakdown)
}

fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

fn description_bonus(price: Amount) -> u64 {
    let bonus = price.cents().div_ceil(DESCRIPTION_BONUS_CENTS_DIVISOR);
    u64::try_from(bonus).unwrap_or(u64::MAX)
}

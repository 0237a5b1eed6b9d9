//! Reduces match records to a category score.

use affectlex_core::{Category, Encoding};
use rust_decimal::prelude::*;

use crate::types::MatchRecord;

/// Beyond this many places an `f64` has no digits left to round.
const MAX_ROUNDING_PLACES: u32 = 15;

/// Round `value` to `places` decimals, halves away from zero.
///
/// The rounding runs on the exact binary value of `value`, so `2.675`
/// (stored as `2.67499999...`) rounds down like any other sub-half value.
/// Non-finite values, values outside the `Decimal` range, and `places`
/// above 15 are returned unchanged.
#[must_use]
pub fn round_to(value: f64, places: u32) -> f64 {
    if places > MAX_ROUNDING_PLACES {
        return value;
    }
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// The unrounded amount one record adds to its category under `encoding`.
#[must_use]
pub fn contribution(record: &MatchRecord, encoding: Encoding, wordcount: usize) -> f64 {
    match encoding {
        Encoding::Binary => record.weight,
        Encoding::Frequency => {
            if wordcount == 0 {
                return 0.0;
            }
            #[allow(clippy::cast_precision_loss)]
            let ratio = record.count as f64 / wordcount as f64;
            ratio * record.weight
        }
    }
}

/// Sum of contributions plus the category intercept, rounded to `places`.
///
/// With no records the score is the intercept alone.
#[must_use]
pub fn aggregate(
    category: Category,
    records: &[MatchRecord],
    encoding: Encoding,
    wordcount: usize,
    places: u32,
) -> f64 {
    let sum: f64 = records
        .iter()
        .map(|r| contribution(r, encoding, wordcount))
        .sum();
    round_to(sum + category.intercept(), places)
}

//! # Rounding Policy
//!
//! Single home for every rounding rule the engine applies. All arithmetic
//! runs on [`rust_decimal::Decimal`] so binary floating point never touches
//! a price, and rounding happens at exactly three points:
//!
//! 1. **Input normalization** - every raw scalar read from a request or a
//!    catalog record is quantized to 4 decimal places before use
//!    ([`quantize`]).
//! 2. **Money externalization** - prices and costs are rounded to 2 decimal
//!    places only when they leave the engine ([`round_money`]).
//! 3. **Percentage externalization** - the reported margin is rounded to
//!    1 decimal place ([`round_percent`]).
//!
//! Intermediate results (panel widths, areas, running totals) keep full
//! `Decimal` precision. Every rounding step uses half-up (midpoint away
//! from zero), the convention of commercial invoicing.
//!
//! ## Example
//!
//! ```rust
//! use quote_core::money::{quantize, round_money};
//! use rust_decimal_macros::dec;
//!
//! assert_eq!(quantize(dec!(1.00005)), dec!(1.0001));
//! assert_eq!(round_money(dec!(121.446)), dec!(121.45));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for normalized inputs (dimensions, rates, percentages).
pub const INPUT_DP: u32 = 4;

/// Decimal places for externalized money values.
pub const MONEY_DP: u32 = 2;

/// Decimal places for the reported margin percentage.
pub const PERCENT_DP: u32 = 1;

/// Half-up rounding to `dp` decimal places.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Normalize a raw input scalar to the engine's working precision.
///
/// Applied once, at the point a value enters a computation; derived values
/// are never re-quantized.
pub fn quantize(value: Decimal) -> Decimal {
    round_half_up(value, INPUT_DP)
}

/// Round a monetary amount for externalization.
pub fn round_money(value: Decimal) -> Decimal {
    round_half_up(value, MONEY_DP)
}

/// Round a percentage for externalization.
pub fn round_percent(value: Decimal) -> Decimal {
    round_half_up(value, PERCENT_DP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quantize_half_up_at_tie() {
        assert_eq!(quantize(dec!(0.00005)), dec!(0.0001));
        assert_eq!(quantize(dec!(0.00015)), dec!(0.0002));
        assert_eq!(quantize(dec!(2.71828)), dec!(2.7183));
    }

    #[test]
    fn test_quantize_is_idempotent() {
        let once = quantize(dec!(1.23456789));
        assert_eq!(quantize(once), once);
    }

    #[test]
    fn test_quantize_leaves_coarse_values_alone() {
        assert_eq!(quantize(dec!(90)), dec!(90));
        assert_eq!(quantize(dec!(1.5)), dec!(1.5));
    }

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec!(2.345)), dec!(2.35));
        assert_eq!(round_money(dec!(2.344)), dec!(2.34));
        assert_eq!(round_money(dec!(142.3595)), dec!(142.36));
    }

    #[test]
    fn test_round_percent() {
        assert_eq!(round_percent(dec!(41.9730)), dec!(42.0));
        assert_eq!(round_percent(dec!(43.4234)), dec!(43.4));
        assert_eq!(round_percent(dec!(0.05)), dec!(0.1));
    }
}

// ============================================================================
// Rounding Primitives
// Round-half-up on scaled floats and conversions to rust_decimal
// ============================================================================

use super::errors::{TickError, TickResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Scale used by currency rounding (two decimal places)
pub const CURRENCY_SCALE: f64 = 100.0;

/// Largest number of decimal places `decimal_places` will report
const MAX_DECIMAL_PLACES: u32 = 9;

/// Round `value` to the nearest multiple of `step`, ties upward.
///
/// Computes `trunc(value * (1/step) + 0.5) / (1/step)`. The truncating cast
/// is the rounding policy: outputs must stay bit-identical at band
/// boundaries, so `f64::round` is deliberately not used here.
#[inline]
pub fn round_half_up(value: f64, step: f64) -> f64 {
    let scale = 1.0 / step;
    (value * scale + 0.5) as i64 as f64 / scale
}

/// Round a monetary amount to two decimal places, ties upward.
///
/// # Example
/// ```
/// use tick_ladder::numeric::round_size;
///
/// assert_eq!(round_size(10.9274), 10.93);
/// ```
#[inline]
pub fn round_size(value: f64) -> f64 {
    (value * CURRENCY_SCALE + 0.5) as i64 as f64 / CURRENCY_SCALE
}

/// Number of decimal places needed to print multiples of `step` exactly.
pub fn decimal_places(step: f64) -> u32 {
    let mut factor = 1.0_f64;
    for places in 0..MAX_DECIMAL_PLACES {
        let scaled = step * factor;
        if (scaled - scaled.round()).abs() < 1e-9 * factor.max(1.0) {
            return places;
        }
        factor *= 10.0;
    }
    MAX_DECIMAL_PLACES
}

/// Convert a float to `Decimal`, rounded to `places` decimal places.
///
/// # Errors
/// Returns `NonFinitePrice` for NaN/infinite input or values beyond the
/// `Decimal` range.
pub fn to_decimal(value: f64, places: u32) -> TickResult<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero))
        .ok_or(TickError::NonFinitePrice(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_basic() {
        assert_eq!(round_half_up(1.0104, 0.01), 1.01);
        assert_eq!(round_half_up(1.0532, 0.01), 1.05);
        assert_eq!(round_half_up(3.57, 0.05), 3.55);
        assert_eq!(round_half_up(214.0, 10.0), 210.0);
    }

    #[test]
    fn test_round_half_up_ties_go_up() {
        assert_eq!(round_half_up(2.5, 1.0), 3.0);
        assert_eq!(round_half_up(3.5, 1.0), 4.0);
        assert_eq!(round_half_up(0.25, 0.5), 0.5);
    }

    #[test]
    fn test_round_size() {
        assert_eq!(round_size(10.9274), 10.93);
        assert_eq!(round_size(10.9249), 10.92);
        assert_eq!(round_size(0.0), 0.0);
        assert_eq!(round_size(7.0), 7.0);
    }

    #[test]
    fn test_round_size_truncates_toward_zero_for_negatives() {
        // trunc(-1.234 * 100 + 0.5) == trunc(-122.9) == -122
        assert_eq!(round_size(-1.234), -1.22);
    }

    #[test]
    fn test_decimal_places() {
        assert_eq!(decimal_places(0.01), 2);
        assert_eq!(decimal_places(0.02), 2);
        assert_eq!(decimal_places(0.05), 2);
        assert_eq!(decimal_places(0.1), 1);
        assert_eq!(decimal_places(0.5), 1);
        assert_eq!(decimal_places(1.0), 0);
        assert_eq!(decimal_places(10.0), 0);
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(to_decimal(1.01, 2).unwrap(), Decimal::new(101, 2));
        assert_eq!(to_decimal(3.55, 2).unwrap(), Decimal::new(355, 2));
        assert_eq!(to_decimal(210.0, 0).unwrap(), Decimal::new(210, 0));
    }

    #[test]
    fn test_to_decimal_rejects_non_finite() {
        assert!(matches!(
            to_decimal(f64::NAN, 2),
            Err(TickError::NonFinitePrice(_))
        ));
        assert!(to_decimal(f64::INFINITY, 2).is_err());
    }
}

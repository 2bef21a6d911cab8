// ============================================================================
// Standard Schedule Functions
// Total conversions over the standard tick schedule
// ============================================================================
//
// These never fail: out-of-domain input produces a best-effort value the
// same way `DomainPolicy::Total` does. Use `TickTable::strict()` when
// rejections are wanted.

use super::tick_table::TickTable;
use crate::domain::Classification;

static STANDARD_TABLE: TickTable = TickTable::STANDARD;

/// Rounded price, tick size and tick index of `price`.
///
/// ```
/// assert_eq!(tick_ladder::classify(1.0104).into_parts(), (1.01, 0.01, 1));
/// ```
#[inline]
pub fn classify(price: f64) -> Classification {
    STANDARD_TABLE.resolve(price)
}

/// Snap a price to its nearest valid tick, ties upward.
#[inline]
pub fn round_to_tick(price: f64) -> f64 {
    classify(price).rounded
}

/// Tick size of the band `price` falls in.
#[inline]
pub fn band_size(price: f64) -> f64 {
    classify(price).tick_size
}

/// Tick index of `price`, 1..=350 for prices in the priced range.
#[inline]
pub fn index_of(price: f64) -> i64 {
    classify(price).index
}

/// Price sitting at a tick index.
#[inline]
pub fn price_at_index(index: i64) -> f64 {
    STANDARD_TABLE.resolve_index(index)
}

/// Move `price` by `ticks` steps.
///
/// ```
/// let shifted = tick_ladder::shift(1.01, 5);
/// assert!((shifted - 1.06).abs() < 1e-9);
/// ```
#[inline]
pub fn shift(price: f64, ticks: i64) -> f64 {
    price_at_index(index_of(price).saturating_add(ticks))
}

/// Number of tick steps between two prices, in either order.
#[inline]
pub fn distance(a: f64, b: f64) -> u64 {
    if a == b {
        return 0;
    }

    let (low, high) = if a > b { (b, a) } else { (a, b) };
    index_of(high).abs_diff(index_of(low))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_price_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_round_to_tick() {
        assert_eq!(round_to_tick(1.0104), 1.01);
        assert_eq!(round_to_tick(1.0532), 1.05);
        assert_eq!(round_to_tick(3.57), 3.55);
        assert_eq!(round_to_tick(214.0), 210.0);
    }

    #[test]
    fn test_band_size() {
        assert_eq!(band_size(1.0104), 0.01);
        assert_eq!(band_size(1.0532), 0.01);
        assert_eq!(band_size(3.57), 0.05);
        assert_eq!(band_size(214.0), 10.0);
    }

    #[test]
    fn test_index_of() {
        assert_eq!(index_of(1.0104), 1);
        assert_eq!(index_of(1.0532), 5);
        assert_eq!(index_of(3.57), 161);
        assert_eq!(index_of(214.0), 271);
    }

    #[test]
    fn test_price_at_index() {
        assert_price_eq(price_at_index(1), 1.01);
        assert_price_eq(price_at_index(5), 1.05);
        assert_price_eq(price_at_index(100), 2.0);
        assert_price_eq(price_at_index(149), 2.98);
        assert_price_eq(price_at_index(150), 3.0);
    }

    #[test]
    fn test_shift() {
        assert_price_eq(shift(1.01, 5), 1.06);
        assert_price_eq(shift(2.10, -12), 1.93);
        assert_price_eq(shift(1.99, 1), 2.0);
        assert_price_eq(shift(2.0, -1), 1.99);
        assert_price_eq(shift(95.0, 1), 100.0);
    }

    #[test]
    fn test_shift_does_not_overflow() {
        assert!(shift(1.01, i64::MAX).is_finite());
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(1.01, 1.06), 5);
        assert_eq!(distance(1.06, 1.01), 5);
        assert_eq!(distance(2.10, 1.93), 12);
        assert_eq!(distance(1.93, 2.10), 12);
        assert_eq!(distance(4.2, 4.2), 0);
    }

    #[test]
    fn test_distance_within_one_tick_is_zero() {
        assert_eq!(distance(1.011, 1.012), 0);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::numeric::round_size;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-9;

    proptest! {
        #[test]
        fn round_trip_through_index(price in 1.01f64..1000.0) {
            let rounded = round_to_tick(price);
            prop_assert!((price_at_index(index_of(price)) - rounded).abs() < TOLERANCE);
        }

        #[test]
        fn rounding_is_idempotent(price in 0.0f64..2000.0) {
            let once = round_to_tick(price);
            prop_assert!((round_to_tick(once) - once).abs() < TOLERANCE);
        }

        #[test]
        fn index_is_in_range_for_priced_range(price in 1.01f64..1000.0) {
            let index = index_of(price);
            prop_assert!((1..=350).contains(&index));
        }

        #[test]
        fn shift_is_invertible(price in 1.01f64..1000.0, ticks in -100i64..100) {
            let target = index_of(price) + ticks;
            prop_assume!((1..=350).contains(&target));

            let there_and_back = shift(shift(price, ticks), -ticks);
            prop_assert!((there_and_back - round_to_tick(price)).abs() < TOLERANCE);
        }

        #[test]
        fn distance_matches_shift(price in 1.01f64..1000.0, ticks in 0i64..100) {
            prop_assume!(index_of(price) + ticks <= 350);
            prop_assert_eq!(distance(price, shift(price, ticks)), ticks as u64);
        }

        #[test]
        fn band_size_is_monotonic(a in 0.0f64..2000.0, b in 0.0f64..2000.0) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(band_size(low) <= band_size(high));
        }

        #[test]
        fn round_size_stays_within_half_cent(value in 0.0f64..1_000_000.0) {
            prop_assert!((round_size(value) - value).abs() <= 0.005 + TOLERANCE);
        }
    }
}

// ============================================================================
// Tick Bands
// Price bands of constant tick size and the standard tiered schedule
// ============================================================================

use crate::numeric::round_half_up;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compensates float representation error before the index is truncated
pub const INDEX_EPSILON: f64 = 0.000_000_5;

/// Lowest tick index produced by a valid price
pub const MIN_TICK_INDEX: i64 = 1;

/// Highest tick index covered by the standard schedule (price 1000)
pub const MAX_TICK_INDEX: i64 = 350;

/// A contiguous price interval over which the tick size is constant.
///
/// The band's upper bound is implied by the next band's `lower_bound`;
/// the last band of a schedule is open-ended.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TickBand {
    /// Minimum raw price included in this band
    pub lower_bound: f64,
    /// Minimum price increment within the band
    pub tick_size: f64,
    /// Anchor price the band's index arithmetic is measured from
    pub price_offset: f64,
    /// Tick index assigned to `price_offset`
    pub index_offset: i64,
}

impl TickBand {
    pub const fn new(lower_bound: f64, tick_size: f64, price_offset: f64, index_offset: i64) -> Self {
        Self {
            lower_bound,
            tick_size,
            price_offset,
            index_offset,
        }
    }

    /// Snap a price to this band's tick grid.
    #[inline]
    pub fn round(&self, price: f64) -> f64 {
        round_half_up(price, self.tick_size)
    }

    /// Tick index of an already rounded price.
    #[inline]
    pub fn index_of_rounded(&self, rounded: f64) -> i64 {
        ((rounded - self.price_offset) / self.tick_size
            + self.index_offset as f64
            + INDEX_EPSILON) as i64
    }

    /// Price sitting at `index`, measured from this band's anchor.
    #[inline]
    pub fn price_at(&self, index: i64) -> f64 {
        self.price_offset + (index - self.index_offset) as f64 * self.tick_size
    }
}

/// The standard tiered schedule: ten bands from 0.01 up to 10.00 ticks.
pub const STANDARD_BANDS: [TickBand; 10] = [
    TickBand::new(0.0, 0.01, 1.0, 0),
    TickBand::new(2.0, 0.02, 2.0, 100),
    TickBand::new(3.0, 0.05, 3.0, 150),
    TickBand::new(4.0, 0.10, 4.0, 170),
    TickBand::new(6.0, 0.20, 6.0, 190),
    TickBand::new(10.0, 0.50, 10.0, 210),
    TickBand::new(20.0, 1.00, 20.0, 230),
    TickBand::new(30.0, 2.00, 30.0, 240),
    TickBand::new(50.0, 5.00, 50.0, 250),
    TickBand::new(100.0, 10.00, 100.0, 260),
];

// ============================================================================
// Tick Schedule Interface
// Defines the contract for price <-> tick conversions
// ============================================================================

use crate::domain::Classification;
use crate::numeric::TickResult;

/// Strategy interface for tick schedules.
///
/// Implementors provide the two primitive conversions; every other
/// operation is derived from them.
pub trait TickSchedule: Send + Sync {
    /// Classify a raw price into `(rounded, tick_size, index)`
    fn classify(&self, price: f64) -> TickResult<Classification>;

    /// Price sitting at a tick index
    fn price_at_index(&self, index: i64) -> TickResult<f64>;

    /// Schedule name for logging
    fn name(&self) -> &str;

    /// Snap a price to its nearest valid tick
    fn round_to_tick(&self, price: f64) -> TickResult<f64> {
        self.classify(price).map(|c| c.rounded)
    }

    /// Minimum price increment at the price's level
    fn band_size(&self, price: f64) -> TickResult<f64> {
        self.classify(price).map(|c| c.tick_size)
    }

    /// Tick index of a price
    fn index_of(&self, price: f64) -> TickResult<i64> {
        self.classify(price).map(|c| c.index)
    }

    /// Move a price by `ticks` steps, up for positive counts and down for negative
    fn shift(&self, price: f64, ticks: i64) -> TickResult<f64> {
        let index = self.index_of(price)?;
        self.price_at_index(index.saturating_add(ticks))
    }

    /// Number of tick steps between two prices, in either order.
    ///
    /// Identical prices are 0 ticks apart without an index lookup.
    fn distance(&self, a: f64, b: f64) -> TickResult<u64> {
        if a == b {
            return Ok(0);
        }

        let (low, high) = if a > b { (b, a) } else { (a, b) };
        let low_index = self.index_of(low)?;
        let high_index = self.index_of(high)?;

        Ok(high_index.abs_diff(low_index))
    }
}

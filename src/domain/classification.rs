// ============================================================================
// Classification
// Rounded price, tick size and tick index produced for a raw price
// ============================================================================

use crate::numeric::{decimal_places, to_decimal, TickResult};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of classifying a raw price against a tick schedule
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Classification {
    /// Price snapped to the nearest tick, ties upward
    pub rounded: f64,
    /// Tick size of the band the price falls in
    pub tick_size: f64,
    /// Dense integer coordinate of the rounded price
    pub index: i64,
}

impl Classification {
    pub fn new(rounded: f64, tick_size: f64, index: i64) -> Self {
        Self {
            rounded,
            tick_size,
            index,
        }
    }

    /// Split into `(rounded, tick_size, index)`
    #[inline]
    pub fn into_parts(self) -> (f64, f64, i64) {
        (self.rounded, self.tick_size, self.index)
    }

    /// Rounded price as a `Decimal` carrying the tick's precision.
    ///
    /// # Errors
    /// Returns `NonFinitePrice` when the rounded value has no decimal form.
    pub fn rounded_decimal(&self) -> TickResult<Decimal> {
        to_decimal(self.rounded, decimal_places(self.tick_size))
    }

    /// Tick size as a `Decimal`
    pub fn tick_size_decimal(&self) -> TickResult<Decimal> {
        to_decimal(self.tick_size, decimal_places(self.tick_size))
    }
}

impl From<Classification> for (f64, f64, i64) {
    fn from(classification: Classification) -> Self {
        classification.into_parts()
    }
}

// ============================================================================
// Tick Ladder Library
// Price <-> tick conversions under a tiered tick-size schedule
// ============================================================================

//! # Tick Ladder
//!
//! Conversions between a raw price, its rounded tick value and a dense
//! integer tick index for instruments whose minimum price increment grows
//! with the price level.
//!
//! ## Features
//!
//! - **Standard ten-band schedule** from 0.01 ticks below 2.00 up to 10.00
//!   ticks from 100 upward, indices 1..=350
//! - **Total free functions** matching the classic behavior bit for bit
//! - **Strict tables** that reject non-finite, negative and out-of-range input
//! - **Custom schedules** validated for contiguity, behind the `TickSchedule` trait
//!
//! ## Example
//!
//! ```rust
//! use tick_ladder::prelude::*;
//!
//! // Free functions over the standard schedule
//! assert_eq!(tick_ladder::round_to_tick(3.57), 3.55);
//! assert_eq!(tick_ladder::band_size(3.57), 0.05);
//! assert_eq!(tick_ladder::distance(1.01, 1.06), 5);
//! assert_eq!(tick_ladder::round_size(10.9274), 10.93);
//!
//! // Strict table rejects prices outside the priced range
//! let table = TickTable::strict();
//! assert!(table.classify(-1.0).is_err());
//! assert_eq!(table.index_of(1.0532).unwrap(), 5);
//! ```

pub mod domain;
pub mod interfaces;
pub mod ladder;
pub mod numeric;
pub mod utils;

pub use ladder::{band_size, classify, distance, index_of, price_at_index, round_to_tick, shift};
pub use numeric::round_size;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Classification, DomainPolicy, TickBand, TickTableConfig, MAX_TICK_INDEX,
        MIN_TICK_INDEX, STANDARD_BANDS,
    };
    pub use crate::interfaces::TickSchedule;
    pub use crate::ladder::TickTable;
    pub use crate::numeric::{TickError, TickResult};
}

// ============================================================================
// Numeric Module
// Error types and rounding primitives shared by the tick ladder
// ============================================================================
//
// This module provides:
// - TickError / TickResult: errors for out-of-domain inputs and bad schedules
// - round_half_up: the truncating half-up rounding used for tick snapping
// - round_size: two-decimal currency rounding
// - to_decimal: float to rust_decimal conversion for display boundaries

mod errors;
mod rounding;

pub use errors::{TickError, TickResult};
pub use rounding::{decimal_places, round_half_up, round_size, to_decimal, CURRENCY_SCALE};

// ============================================================================
// Ladder Module
// Contains the price <-> tick conversion logic
// ============================================================================

mod functions;
mod tick_table;

pub use functions::{
    band_size, classify, distance, index_of, price_at_index, round_to_tick, shift,
};
pub use tick_table::TickTable;

// ============================================================================
// Domain Models Module
// Tick bands, classifications and table configuration
// ============================================================================

pub mod band;
pub mod classification;
pub mod config;

pub use band::{TickBand, INDEX_EPSILON, MAX_TICK_INDEX, MIN_TICK_INDEX, STANDARD_BANDS};
pub use classification::Classification;
pub use config::{DomainPolicy, TickTableConfig};

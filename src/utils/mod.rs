// ============================================================================
// Utilities Module
// Ambient helpers that sit outside the conversion logic
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;

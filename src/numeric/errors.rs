// ============================================================================
// Tick Errors
// Error types for out-of-domain prices, indices and malformed schedules
// ============================================================================

use std::fmt;

/// Errors reported by tick conversions running under a strict domain policy,
/// and by schedule construction.
#[derive(Debug, Clone, PartialEq)]
pub enum TickError {
    /// Price is NaN or infinite
    NonFinitePrice(f64),
    /// Price is below zero
    NegativePrice(f64),
    /// Price resolves to a tick index outside the configured range
    PriceOutOfRange { price: f64, index: i64 },
    /// Tick index lies outside the configured range
    IndexOutOfRange { index: i64, min: i64, max: i64 },
    /// Band list does not describe a contiguous, increasing schedule
    InvalidTable { band: usize, reason: &'static str },
    /// Table configuration rejected by validation
    InvalidConfig(String),
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickError::NonFinitePrice(price) => write!(f, "non-finite price: {}", price),
            TickError::NegativePrice(price) => write!(f, "negative price: {}", price),
            TickError::PriceOutOfRange { price, index } => write!(
                f,
                "price out of range: {} resolves to tick index {}",
                price, index
            ),
            TickError::IndexOutOfRange { index, min, max } => write!(
                f,
                "tick index out of range: {} not in [{}, {}]",
                index, min, max
            ),
            TickError::InvalidTable { band, reason } => {
                write!(f, "invalid tick table at band {}: {}", band, reason)
            },
            TickError::InvalidConfig(reason) => write!(f, "invalid table config: {}", reason),
        }
    }
}

impl std::error::Error for TickError {}

/// Result type alias for tick operations
pub type TickResult<T> = Result<T, TickError>;

// ============================================================================
// Logging Setup
// tracing-subscriber initialisation for binaries and demos
// ============================================================================

use tracing::Level;

/// Install a global `fmt` subscriber at the given maximum level.
///
/// Table construction and strict-policy rejections are reported at `DEBUG`.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(level: Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("failed to install tracing subscriber: {}", e))
}

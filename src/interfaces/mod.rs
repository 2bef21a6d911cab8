// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod tick_schedule;

pub use tick_schedule::TickSchedule;

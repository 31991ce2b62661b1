// ============================================================================
// Domain Models Module
// Accumulator state, operations, session identity and configuration
// ============================================================================

pub mod accumulator;
pub mod config;
pub mod operation;
pub mod session;

pub use accumulator::{Accumulator, AccumulatorState};
pub use config::{CalculatorConfig, DEFAULT_HISTORY_FILE};
pub use operation::Operation;
pub use session::SessionId;

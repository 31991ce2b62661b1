// ============================================================================
// Engine Module
// Calculator business logic and the interactive session around it
// ============================================================================

mod calculator;
mod command;
mod session;

pub mod factory;

pub use calculator::ConversionCalculator;
pub use command::Command;
pub use factory::{create_event_handler, create_from_config};
pub use session::Session;

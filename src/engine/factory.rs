// ============================================================================
// Calculator Factory
// Creates calculators with the handlers their configuration asks for
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::ConversionCalculator;
use crate::interfaces::{CompositeEventHandler, EventHandler, HistoryFileHandler, LoggingEventHandler};
use std::sync::Arc;

/// Creates a calculator from configuration
///
/// Events always go to the `tracing` logging handler; when the config names a
/// history file, applied operations are appended to it as well.
///
/// # Example
/// ```
/// use radix_calculator::prelude::*;
///
/// let config = CalculatorConfig::headless(Radix::Hexadecimal);
/// let mut calc = create_from_config(&config).unwrap();
/// calc.enter("FF").unwrap();
/// assert_eq!(calc.add("1"), Ok(256.0));
/// ```
pub fn create_from_config(config: &CalculatorConfig) -> Result<ConversionCalculator, String> {
    // Validate configuration first
    config.validate()?;

    let handler = create_event_handler(config)?;
    ConversionCalculator::from_config(config, handler)
}

/// Builds the event handler chain for `config`
pub fn create_event_handler(config: &CalculatorConfig) -> Result<Arc<dyn EventHandler>, String> {
    let mut handlers: Vec<Box<dyn EventHandler>> = vec![Box::new(LoggingEventHandler)];

    if let Some(path) = &config.history_file {
        let history = HistoryFileHandler::open(path).map_err(|e| {
            format!("Cannot open history file {}: {}", path.display(), e)
        })?;
        handlers.push(Box::new(history));
    }

    Ok(Arc::new(CompositeEventHandler::new(handlers)))
}

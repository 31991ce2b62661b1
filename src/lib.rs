// ============================================================================
// Radix Calculator Library
// Accumulator calculator with binary, octal, decimal and hexadecimal numerals
// ============================================================================

//! # Radix Calculator
//!
//! A running-total calculator whose operands can be entered in base 2, 8, 10
//! or 16 and whose result is shown in all four.
//!
//! ## Features
//!
//! - **Radix codec**: stateless parsing and formatting for every supported base
//! - **Accumulator** with an explicit Empty/Holding lifecycle
//! - **Conversion calculator** applying `+ - * /` with operands in the active radix
//! - **Event handlers** for `tracing` output and an append-only history file
//! - **Interactive session** over any `BufRead`/`Write` pair
//!
//! Fractional parts are always rendered as four base-10 digits after the
//! point, whatever the radix of the integer part.
//!
//! ## Example
//!
//! ```rust
//! use radix_calculator::prelude::*;
//! use std::sync::Arc;
//!
//! let mut calc = ConversionCalculator::new(Radix::Decimal, Arc::new(NoOpEventHandler));
//!
//! calc.enter("10").unwrap();
//! let result = calc.add("5").unwrap();
//!
//! assert_eq!(format_number(result, Radix::Binary), "1111");
//! assert_eq!(format_number(result, Radix::Hexadecimal), "F");
//!
//! // Switch input to binary: the value is untouched
//! calc.set_radix(Radix::Binary);
//! assert_eq!(calc.multiply("10").unwrap(), 30.0);
//!
//! assert_eq!(calc.divide("0"), Err(CalcError::DivisionByZero));
//! assert_eq!(calc.value(), 30.0);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Accumulator, AccumulatorState, CalculatorConfig, Operation, SessionId,
        DEFAULT_HISTORY_FILE,
    };
    pub use crate::engine::{
        create_event_handler, create_from_config, Command, ConversionCalculator, Session,
    };
    pub use crate::interfaces::{
        CalculatorEvent, CompositeEventHandler, EventHandler, HistoryFileHandler,
        LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{
        format_all, format_number, parse_integer, CalcError, CalcResult, Radix, RadixRenderings,
    };
}

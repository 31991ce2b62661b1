// ============================================================================
// Conversion Calculator
// Accumulator arithmetic with operands entered in the active radix
// ============================================================================

use crate::domain::{Accumulator, CalculatorConfig, Operation, SessionId};
use crate::interfaces::{CalculatorEvent, EventHandler};
use crate::numeric::{format_all, format_number, parse_integer, CalcResult, Radix, RadixRenderings};
use chrono::Utc;
use std::sync::Arc;

/// Accumulator plus the radix operands are entered in.
///
/// The radix only selects the codec used for parsing and formatting; it is
/// never part of the accumulator, so switching it leaves the value alone.
pub struct ConversionCalculator {
    /// Identity stamped on emitted events
    session_id: SessionId,

    /// Running value
    accumulator: Accumulator,

    /// Active input/display radix
    radix: Radix,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl ConversionCalculator {
    /// Create a calculator with an Empty accumulator
    pub fn new(radix: Radix, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            session_id: SessionId::new(),
            accumulator: Accumulator::new(),
            radix,
            event_handler,
        }
    }

    /// Create a calculator from a validated configuration
    pub fn from_config(
        config: &CalculatorConfig,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::new(config.radix, event_handler))
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    /// Current accumulator value
    pub fn value(&self) -> f64 {
        self.accumulator.value()
    }

    /// Switch the active radix, returning the previous one.
    pub fn set_radix(&mut self, radix: Radix) -> Radix {
        let previous = std::mem::replace(&mut self.radix, radix);
        if previous != radix {
            tracing::debug!(from = %previous, to = %radix, "active radix changed");
            self.emit(CalculatorEvent::RadixChanged {
                session_id: self.session_id,
                from: previous,
                to: radix,
                timestamp: Utc::now(),
            });
        }
        previous
    }

    /// Switch to the radix with numeric base `base`.
    ///
    /// # Errors
    /// `UnsupportedRadix` for anything but 2, 8, 10 and 16; nothing changes.
    pub fn set_radix_base(&mut self, base: u32) -> CalcResult<Radix> {
        let radix = Radix::try_from(base)?;
        Ok(self.set_radix(radix))
    }

    /// Parse operand text under the active radix
    pub fn parse_operand(&self, text: &str) -> CalcResult<f64> {
        parse_integer(text, self.radix)
    }

    /// Parse `text` and store it as the accumulator value.
    pub fn enter(&mut self, text: &str) -> CalcResult<f64> {
        let value = self.parse_operand(text)?;
        self.accumulator.set_value(value);
        self.emit(CalculatorEvent::ValueEntered {
            session_id: self.session_id,
            value,
            renderings: format_all(value),
            timestamp: Utc::now(),
        });
        Ok(value)
    }

    /// Parse `operand` under the active radix and apply `op` to the
    /// accumulator, returning the new value.
    ///
    /// # Errors
    /// `InvalidNumeral` when the operand does not parse, `DivisionByZero`
    /// when dividing by zero. The accumulator is unchanged in both cases.
    pub fn apply(&mut self, op: Operation, operand: &str) -> CalcResult<f64> {
        let outcome = self
            .parse_operand(operand)
            .and_then(|number| Ok((number, self.accumulator.apply(op, number)?)));

        match outcome {
            Ok((number, result)) => {
                tracing::debug!(op = %op, operand = number, result, "operation applied");
                self.emit(CalculatorEvent::OperationApplied {
                    session_id: self.session_id,
                    operation: op,
                    operand: number,
                    result,
                    renderings: format_all(result),
                    timestamp: Utc::now(),
                });
                Ok(result)
            },
            Err(reason) => {
                tracing::debug!(op = %op, operand, %reason, "operation rejected");
                self.emit(CalculatorEvent::OperationRejected {
                    session_id: self.session_id,
                    operation: op,
                    operand: operand.to_string(),
                    reason,
                    timestamp: Utc::now(),
                });
                Err(reason)
            },
        }
    }

    pub fn add(&mut self, operand: &str) -> CalcResult<f64> {
        self.apply(Operation::Add, operand)
    }

    pub fn subtract(&mut self, operand: &str) -> CalcResult<f64> {
        self.apply(Operation::Subtract, operand)
    }

    pub fn multiply(&mut self, operand: &str) -> CalcResult<f64> {
        self.apply(Operation::Multiply, operand)
    }

    pub fn divide(&mut self, operand: &str) -> CalcResult<f64> {
        self.apply(Operation::Divide, operand)
    }

    /// Clear the accumulator. The active radix is kept.
    pub fn reset(&mut self) {
        self.accumulator.reset();
        self.emit(CalculatorEvent::Reset {
            session_id: self.session_id,
            timestamp: Utc::now(),
        });
    }

    /// Render `value` in the active radix
    pub fn format(&self, value: f64) -> String {
        format_number(value, self.radix)
    }

    /// Render `value` in every radix
    pub fn renderings(&self, value: f64) -> RadixRenderings {
        format_all(value)
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn emit(&self, event: CalculatorEvent) {
        self.event_handler.on_event(event);
    }
}

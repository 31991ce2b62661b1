// ============================================================================
// Accumulator
// The calculator's running value across a session
// ============================================================================

use super::operation::Operation;
use crate::numeric::CalcResult;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of the accumulator.
///
/// `initialized == false` is the Empty state; anything else is Holding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AccumulatorState {
    pub value: f64,
    pub initialized: bool,
}

impl AccumulatorState {
    /// The state a fresh (or reset) accumulator is in.
    pub const EMPTY: Self = Self {
        value: 0.0,
        initialized: false,
    };

    #[inline]
    pub const fn is_empty(&self) -> bool {
        !self.initialized
    }

    #[inline]
    pub const fn is_holding(&self) -> bool {
        self.initialized
    }
}

/// Running value with Empty -> Holding -> Empty (reset) lifecycle.
///
/// Not shared between threads; a host that needs concurrent access wraps it
/// in its own lock.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    state: AccumulatorState,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            state: AccumulatorState::EMPTY,
        }
    }

    /// Current value (0 while Empty).
    #[inline]
    pub fn value(&self) -> f64 {
        self.state.value
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.state.initialized
    }

    #[inline]
    pub fn state(&self) -> AccumulatorState {
        self.state
    }

    /// Overwrite the value and move to Holding.
    pub fn set_value(&mut self, value: f64) {
        tracing::trace!(value, was_initialized = self.state.initialized, "accumulator set");
        self.state = AccumulatorState {
            value,
            initialized: true,
        };
    }

    /// Apply `op` with `operand` and return the new value.
    ///
    /// An Empty accumulator acts as if it held 0. On error nothing changes,
    /// not even the Empty/Holding state.
    ///
    /// # Errors
    /// `DivisionByZero` for `Operation::Divide` with a zero operand.
    pub fn apply(&mut self, op: Operation, operand: f64) -> CalcResult<f64> {
        let result = op.evaluate(self.state.value, operand)?;
        self.set_value(result);
        Ok(result)
    }

    /// Back to `{ value: 0, initialized: false }`.
    pub fn reset(&mut self) {
        tracing::trace!("accumulator reset");
        self.state = AccumulatorState::EMPTY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::CalcError;
    use quickcheck::quickcheck;

    #[test]
    fn test_new_is_empty() {
        let acc = Accumulator::new();
        assert_eq!(acc.state(), AccumulatorState::EMPTY);
        assert!(acc.state().is_empty());
        assert_eq!(acc.value(), 0.0);
    }

    #[test]
    fn test_set_then_add() {
        let mut acc = Accumulator::new();
        acc.set_value(10.0);
        assert!(acc.is_initialized());
        assert_eq!(acc.apply(Operation::Add, 5.0), Ok(15.0));
        assert_eq!(acc.value(), 15.0);
    }

    #[test]
    fn test_apply_on_empty_starts_from_zero() {
        let mut acc = Accumulator::new();
        assert_eq!(acc.apply(Operation::Subtract, 4.0), Ok(-4.0));
        assert!(acc.state().is_holding());

        let mut acc = Accumulator::new();
        assert_eq!(acc.apply(Operation::Multiply, 4.0), Ok(0.0));
        assert!(acc.is_initialized());
    }

    #[test]
    fn test_divide_by_zero_leaves_value() {
        let mut acc = Accumulator::new();
        acc.set_value(10.0);
        assert_eq!(acc.apply(Operation::Divide, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(acc.value(), 10.0);
        assert!(acc.is_initialized());
    }

    #[test]
    fn test_divide_by_zero_on_empty_stays_empty() {
        let mut acc = Accumulator::new();
        assert_eq!(acc.apply(Operation::Divide, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(acc.state(), AccumulatorState::EMPTY);
    }

    #[test]
    fn test_reset() {
        let mut acc = Accumulator::new();
        acc.set_value(42.0);
        acc.apply(Operation::Multiply, 2.0).unwrap();
        acc.reset();
        assert_eq!(acc.state(), AccumulatorState::EMPTY);

        // Reusable after reset
        assert_eq!(acc.apply(Operation::Add, 1.0), Ok(1.0));
    }

    quickcheck! {
        fn prop_divide_by_zero_never_mutates(start: f64, initialized: bool) -> bool {
            let mut acc = Accumulator::new();
            if initialized {
                acc.set_value(start);
            }
            let before = acc.state();
            let failed = acc.apply(Operation::Divide, 0.0) == Err(CalcError::DivisionByZero);
            let after = acc.state();
            // NaN != NaN, so compare bit patterns
            failed
                && before.initialized == after.initialized
                && before.value.to_bits() == after.value.to_bits()
        }

        fn prop_reset_always_empty(values: Vec<f64>) -> bool {
            let mut acc = Accumulator::new();
            for (i, v) in values.iter().enumerate() {
                let op = Operation::ALL[i % Operation::ALL.len()];
                let _ = acc.apply(op, *v);
            }
            acc.reset();
            acc.state() == AccumulatorState::EMPTY
        }

        fn prop_add_matches_float_add(start: f64, operand: f64) -> bool {
            let mut acc = Accumulator::new();
            acc.set_value(start);
            let result = acc.apply(Operation::Add, operand).unwrap();
            result.to_bits() == (start + operand).to_bits()
                && acc.value().to_bits() == result.to_bits()
        }
    }
}

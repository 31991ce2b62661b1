// ============================================================================
// Command Parsing
// One line of interactive input -> typed command
// ============================================================================

use crate::domain::Operation;
use crate::numeric::{CalcError, CalcResult};

/// What the user asked for on one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `q`: leave the session
    Quit,
    /// `c`: clear the accumulator
    Reset,
    /// `i`: choose a new input radix
    SelectRadix,
    /// `+5`, `-3`, `*2`, `/4`, or a bare operand (addition)
    Apply { op: Operation, operand: String },
}

impl Command {
    /// Parse a trimmed input line.
    ///
    /// The operand text is not validated here; that needs the active radix.
    ///
    /// # Errors
    /// `InvalidNumeral` when the line has no operand (empty, or a lone
    /// operator symbol).
    pub fn parse(line: &str) -> CalcResult<Self> {
        let line = line.trim();

        if line.eq_ignore_ascii_case("q") {
            return Ok(Command::Quit);
        }
        if line.eq_ignore_ascii_case("c") {
            return Ok(Command::Reset);
        }
        if line.eq_ignore_ascii_case("i") {
            return Ok(Command::SelectRadix);
        }

        let mut chars = line.chars();
        let (op, operand) = match chars.next().and_then(Operation::from_symbol) {
            Some(op) => (op, chars.as_str().trim()),
            None => (Operation::Add, line),
        };

        if operand.is_empty() {
            return Err(CalcError::InvalidNumeral);
        }

        Ok(Command::Apply {
            op,
            operand: operand.to_string(),
        })
    }
}

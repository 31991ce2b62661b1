// ============================================================================
// Numeric Module
// Multi-radix parsing and formatting for the calculator
// ============================================================================
//
// This module provides:
// - Radix: the four supported bases (2, 8, 10, 16)
// - parse_integer / format_number: the numeral codec
// - RadixRenderings: one value rendered in every radix
// - CalcError: error type shared by the whole crate
//
// Design principles:
// - No state: the radix is a parameter of every call
// - All parsing returns Result (no panics)
// - Fractional parts are always shown as four base-10 digits

mod codec;
mod errors;
mod radix;

pub use codec::{
    format_all, format_fixed, format_number, parse_integer, RadixRenderings, FRACTION_DIGITS,
};
pub use errors::{CalcError, CalcResult};
pub use radix::Radix;

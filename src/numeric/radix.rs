// ============================================================================
// Radix
// The four supported numeral bases
// ============================================================================

use super::errors::{CalcError, CalcResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric base used for textual encoding.
///
/// Only bases 2, 8, 10 and 16 exist; every other value is rejected at
/// construction with [`CalcError::UnsupportedRadix`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum Radix {
    Binary = 2,
    Octal = 8,
    #[default]
    Decimal = 10,
    Hexadecimal = 16,
}

impl Radix {
    /// All radixes in ascending order
    pub const ALL: [Radix; 4] = [
        Radix::Binary,
        Radix::Octal,
        Radix::Decimal,
        Radix::Hexadecimal,
    ];

    /// The numeric base (2, 8, 10 or 16).
    #[inline]
    pub const fn base(self) -> u32 {
        self as u32
    }

    /// Human readable name, used by the interactive display.
    pub const fn name(self) -> &'static str {
        match self {
            Radix::Binary => "Binary",
            Radix::Octal => "Octal",
            Radix::Decimal => "Decimal",
            Radix::Hexadecimal => "Hexadecimal",
        }
    }

    /// Three-letter label used in history lines.
    pub const fn label(self) -> &'static str {
        match self {
            Radix::Binary => "BIN",
            Radix::Octal => "OCT",
            Radix::Decimal => "DEC",
            Radix::Hexadecimal => "HEX",
        }
    }

    /// Whether `c` belongs to this radix's digit alphabet (either case for hex).
    #[inline]
    pub fn is_digit(self, c: char) -> bool {
        c.is_digit(self.base())
    }

    /// Position in [`Radix::ALL`].
    #[inline]
    pub(crate) const fn index(self) -> usize {
        match self {
            Radix::Binary => 0,
            Radix::Octal => 1,
            Radix::Decimal => 2,
            Radix::Hexadecimal => 3,
        }
    }
}

impl TryFrom<u32> for Radix {
    type Error = CalcError;

    fn try_from(base: u32) -> CalcResult<Self> {
        match base {
            2 => Ok(Radix::Binary),
            8 => Ok(Radix::Octal),
            10 => Ok(Radix::Decimal),
            16 => Ok(Radix::Hexadecimal),
            other => Err(CalcError::UnsupportedRadix(other)),
        }
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.base()
    }
}

impl FromStr for Radix {
    type Err = CalcError;

    /// Parse a base written in decimal ("2", "8", "10", "16").
    ///
    /// Text that is not a number at all is an `InvalidNumeral`; a number
    /// that is not a supported base is an `UnsupportedRadix`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let base: u32 = s.trim().parse().map_err(|_| CalcError::InvalidNumeral)?;
        Radix::try_from(base)
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base())
    }
}

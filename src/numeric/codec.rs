// ============================================================================
// Radix Codec
// Stateless translation between numerals and f64 values in bases 2/8/10/16
// ============================================================================

use super::errors::{CalcError, CalcResult};
use super::radix::Radix;
use arrayvec::ArrayVec;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Write as _;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digits rendered after the point for a non-zero fractional part.
pub const FRACTION_DIGITS: u32 = 4;

/// 10^FRACTION_DIGITS
const FRACTION_SCALE: u64 = 10_000;

/// Canonical uppercase digit alphabet
const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A u64 magnitude needs at most 64 binary digits.
const MAX_DIGITS: usize = 64;

// ============================================================================
// Parsing
// ============================================================================

/// Parse an operand numeral under `radix`.
///
/// - Decimal accepts an optional `-`, integer digits and an optional
///   fractional part (`12`, `-0.75`, `.5`, `5.`). No exponent, no `inf`/`NaN`.
/// - Binary, octal and hexadecimal accept an optional `-` followed by an
///   integer in that base (hex digits in either case). The value must fit in
///   an i64 and is widened to f64.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
/// `InvalidNumeral` for an empty numeral, a character outside the radix's
/// alphabet, fractional digits in a non-decimal radix, or a magnitude that
/// overflows i64 (non-decimal) / f64 (decimal).
pub fn parse_integer(text: &str, radix: Radix) -> CalcResult<f64> {
    let text = text.trim();
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() {
        return Err(CalcError::InvalidNumeral);
    }

    match radix {
        Radix::Decimal => parse_decimal(text, digits),
        _ => parse_whole(text, digits, radix),
    }
}

fn parse_decimal(text: &str, digits: &str) -> CalcResult<f64> {
    let (int_digits, frac_digits) = digits.split_once('.').unwrap_or((digits, ""));
    if int_digits.is_empty() && frac_digits.is_empty() {
        return Err(CalcError::InvalidNumeral);
    }

    // A second '.' lands in frac_digits and fails here
    let valid = int_digits
        .chars()
        .chain(frac_digits.chars())
        .all(|c| Radix::Decimal.is_digit(c));
    if !valid {
        return Err(CalcError::InvalidNumeral);
    }

    let value: f64 = text.parse().map_err(|_| CalcError::InvalidNumeral)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidNumeral)
    }
}

fn parse_whole(text: &str, digits: &str, radix: Radix) -> CalcResult<f64> {
    // from_str_radix alone would also accept a leading '+'
    if !digits.chars().all(|c| radix.is_digit(c)) {
        return Err(CalcError::InvalidNumeral);
    }

    i64::from_str_radix(text, radix.base())
        .map(|n| n as f64)
        .map_err(|_| CalcError::InvalidNumeral)
}

// ============================================================================
// Formatting
// ============================================================================

/// Render `value` in `radix`.
///
/// The integer part (truncated toward zero) is written in the target radix
/// with uppercase digits and a single leading `-` for negative values. A
/// non-zero fractional part is appended as `.` followed by exactly
/// [`FRACTION_DIGITS`] base-10 digits of its magnitude, whatever the target
/// radix is: `format_number(10.5, Radix::Binary) == "1010.5000"`.
///
/// Fractions round half away from zero; a fraction that rounds up to one
/// carries into the integer part. Integer parts outside the i64 range
/// saturate. Non-finite values render as `inf`, `-inf` and `NaN`.
pub fn format_number(value: f64, radix: Radix) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let int_part = value.trunc();
    let fractional_part = value - int_part;

    // `as` saturates at the i64 bounds
    let mut magnitude = (int_part as i64).unsigned_abs();
    let mut fraction = None;

    if fractional_part != 0.0 {
        let mut scaled = round_fraction(fractional_part.abs());
        if scaled >= FRACTION_SCALE {
            magnitude = magnitude.saturating_add(1);
            scaled -= FRACTION_SCALE;
        }
        fraction = Some(scaled);
    }

    let mut out = String::with_capacity(MAX_DIGITS + 2 + FRACTION_DIGITS as usize);
    if value < 0.0 {
        out.push('-');
    }
    push_digits(&mut out, magnitude, radix);
    if let Some(scaled) = fraction {
        let _ = write!(out, ".{:0width$}", scaled, width = FRACTION_DIGITS as usize);
    }
    out
}

/// Render `value` in all four radixes.
pub fn format_all(value: f64) -> RadixRenderings {
    RadixRenderings(Radix::ALL.map(|radix| format_number(value, radix)))
}

/// Render `value` in decimal with exactly `places` digits after the point,
/// rounding half away from zero.
pub fn format_fixed(value: f64, places: u32) -> String {
    match Decimal::from_f64_retain(value) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.prec$}", rounded, prec = places as usize)
        },
        None => format!("{:.prec$}", value, prec = places as usize),
    }
}

/// Scale a fraction in [0, 1) to FRACTION_DIGITS decimal digits.
fn round_fraction(fraction: f64) -> u64 {
    Decimal::from_f64_retain(fraction)
        .map(|d| d.round_dp_with_strategy(FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| (d * Decimal::from(FRACTION_SCALE)).to_u64())
        .unwrap_or_else(|| (fraction * FRACTION_SCALE as f64).round() as u64)
}

fn push_digits(out: &mut String, mut magnitude: u64, radix: Radix) {
    let base = u64::from(radix.base());
    let mut buf: ArrayVec<u8, MAX_DIGITS> = ArrayVec::new();

    loop {
        buf.push(DIGITS[(magnitude % base) as usize]);
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }

    out.extend(buf.iter().rev().map(|&b| char::from(b)));
}

// ============================================================================
// Renderings
// ============================================================================

/// One value rendered in every radix.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadixRenderings([String; 4]);

impl RadixRenderings {
    /// Rendering for `radix`.
    #[inline]
    pub fn get(&self, radix: Radix) -> &str {
        &self.0[radix.index()]
    }

    /// Renderings in ascending radix order.
    pub fn iter(&self) -> impl Iterator<Item = (Radix, &str)> + '_ {
        Radix::ALL.into_iter().map(move |radix| (radix, self.get(radix)))
    }

    /// `first` followed by the remaining radixes in ascending order.
    pub fn starting_with(&self, first: Radix) -> impl Iterator<Item = (Radix, &str)> + '_ {
        std::iter::once((first, self.get(first)))
            .chain(self.iter().filter(move |(radix, _)| *radix != first))
    }
}

impl Index<Radix> for RadixRenderings {
    type Output = str;

    fn index(&self, radix: Radix) -> &str {
        self.get(radix)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_integer("12", Radix::Decimal), Ok(12.0));
        assert_eq!(parse_integer("-0.75", Radix::Decimal), Ok(-0.75));
        assert_eq!(parse_integer(".5", Radix::Decimal), Ok(0.5));
        assert_eq!(parse_integer("5.", Radix::Decimal), Ok(5.0));
        assert_eq!(parse_integer("  42  ", Radix::Decimal), Ok(42.0));
    }

    #[test]
    fn test_parse_decimal_invalid() {
        for text in ["", "-", ".", "-.", "1.2.3", "1e5", "inf", "NaN", "+5", "--5", "12a", "1 2"] {
            assert_eq!(
                parse_integer(text, Radix::Decimal),
                Err(CalcError::InvalidNumeral),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_decimal_overflow() {
        let huge = format!("1{}", "0".repeat(400));
        assert_eq!(parse_integer(&huge, Radix::Decimal), Err(CalcError::InvalidNumeral));
    }

    #[test]
    fn test_parse_other_radixes() {
        assert_eq!(parse_integer("1111", Radix::Binary), Ok(15.0));
        assert_eq!(parse_integer("-1010", Radix::Binary), Ok(-10.0));
        assert_eq!(parse_integer("17", Radix::Octal), Ok(15.0));
        assert_eq!(parse_integer("ff", Radix::Hexadecimal), Ok(255.0));
        assert_eq!(parse_integer("FF", Radix::Hexadecimal), Ok(255.0));
    }

    #[test]
    fn test_parse_invalid_digit() {
        assert_eq!(parse_integer("1G", Radix::Hexadecimal), Err(CalcError::InvalidNumeral));
        assert_eq!(parse_integer("102", Radix::Binary), Err(CalcError::InvalidNumeral));
        assert_eq!(parse_integer("8", Radix::Octal), Err(CalcError::InvalidNumeral));
        assert_eq!(parse_integer("+1", Radix::Binary), Err(CalcError::InvalidNumeral));
    }

    #[test]
    fn test_parse_fraction_rejected_outside_decimal() {
        assert_eq!(parse_integer("1.1", Radix::Binary), Err(CalcError::InvalidNumeral));
        assert_eq!(parse_integer("7.0", Radix::Octal), Err(CalcError::InvalidNumeral));
        assert_eq!(parse_integer("A.8", Radix::Hexadecimal), Err(CalcError::InvalidNumeral));
    }

    #[test]
    fn test_parse_i64_bounds() {
        assert_eq!(
            parse_integer("-8000000000000000", Radix::Hexadecimal),
            Ok(i64::MIN as f64)
        );
        assert_eq!(
            parse_integer("7FFFFFFFFFFFFFFF", Radix::Hexadecimal),
            Ok(i64::MAX as f64)
        );
        assert_eq!(
            parse_integer("8000000000000000", Radix::Hexadecimal),
            Err(CalcError::InvalidNumeral)
        );
    }

    #[test]
    fn test_format_zero() {
        for radix in Radix::ALL {
            assert_eq!(format_number(0.0, radix), "0");
            assert_eq!(format_number(-0.0, radix), "0");
        }
    }

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(15.0, Radix::Binary), "1111");
        assert_eq!(format_number(15.0, Radix::Octal), "17");
        assert_eq!(format_number(15.0, Radix::Decimal), "15");
        assert_eq!(format_number(15.0, Radix::Hexadecimal), "F");
        assert_eq!(format_number(-255.0, Radix::Hexadecimal), "-FF");
        assert_eq!(format_number(-10.0, Radix::Binary), "-1010");
    }

    #[test]
    fn test_format_fraction_is_base_ten() {
        assert_eq!(format_number(5.5, Radix::Decimal), "5.5000");
        assert_eq!(format_number(-3.25, Radix::Decimal), "-3.2500");
        assert_eq!(format_number(10.5, Radix::Binary), "1010.5000");
        assert_eq!(format_number(-26.125, Radix::Hexadecimal), "-1A.1250");
    }

    #[test]
    fn test_format_small_negative_keeps_sign() {
        assert_eq!(format_number(-0.25, Radix::Decimal), "-0.2500");
        assert_eq!(format_number(-0.25, Radix::Binary), "-0.2500");
    }

    #[test]
    fn test_format_fraction_rounding() {
        // 0.03125 is exact in binary, so this is a true midpoint
        assert_eq!(format_number(1.03125, Radix::Decimal), "1.0313");
        assert_eq!(format_number(1.0 / 3.0, Radix::Decimal), "0.3333");
        assert_eq!(format_number(2.0 / 3.0, Radix::Octal), "0.6667");
    }

    #[test]
    fn test_format_fraction_carry() {
        assert_eq!(format_number(2.99999, Radix::Decimal), "3.0000");
        assert_eq!(format_number(-0.99999, Radix::Binary), "-1.0000");
        assert_eq!(format_number(15.99999, Radix::Hexadecimal), "10.0000");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::NAN, Radix::Binary), "NaN");
        assert_eq!(format_number(f64::INFINITY, Radix::Decimal), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY, Radix::Hexadecimal), "-inf");
    }

    #[test]
    fn test_format_saturates_outside_i64() {
        assert_eq!(format_number(1e30, Radix::Hexadecimal), "7FFFFFFFFFFFFFFF");
        assert_eq!(format_number(-1e30, Radix::Hexadecimal), "-8000000000000000");
    }

    #[test]
    fn test_format_all_and_ordering() {
        let renderings = format_all(15.0);
        assert_eq!(renderings.get(Radix::Binary), "1111");
        assert_eq!(&renderings[Radix::Octal], "17");
        assert_eq!(&renderings[Radix::Hexadecimal], "F");

        let ascending: Vec<Radix> = renderings.iter().map(|(r, _)| r).collect();
        assert_eq!(ascending, Radix::ALL.to_vec());

        let display: Vec<Radix> = renderings
            .starting_with(Radix::Octal)
            .map(|(r, _)| r)
            .collect();
        assert_eq!(
            display,
            vec![Radix::Octal, Radix::Binary, Radix::Decimal, Radix::Hexadecimal]
        );
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(15.0, 2), "15.00");
        assert_eq!(format_fixed(2.125, 2), "2.13");
        assert_eq!(format_fixed(-2.125, 2), "-2.13");
        assert_eq!(format_fixed(0.1, 2), "0.10");
    }

    fn radix_strategy() -> impl Strategy<Value = Radix> {
        prop::sample::select(Radix::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn integer_round_trip(n in -(1i64 << 53)..=(1i64 << 53), radix in radix_strategy()) {
            let text = format_number(n as f64, radix);
            prop_assert_eq!(parse_integer(&text, radix), Ok(n as f64));
        }

        #[test]
        fn integer_round_trip_full_range(n in any::<i64>(), radix in radix_strategy()) {
            let value = n as f64;
            let text = format_number(value, radix);
            prop_assert_eq!(parse_integer(&text, radix), Ok(value));
        }

        #[test]
        fn fraction_suffix_has_four_digits(value in -1.0e9f64..1.0e9, radix in radix_strategy()) {
            let text = format_number(value, radix);
            if value.fract() != 0.0 {
                let (_, suffix) = text.rsplit_once('.').unwrap();
                prop_assert_eq!(suffix.len(), FRACTION_DIGITS as usize);
                prop_assert!(suffix.chars().all(|c| c.is_ascii_digit()));
            } else {
                prop_assert!(!text.contains('.'));
            }
        }

        #[test]
        fn sign_matches_value(value in -1.0e9f64..1.0e9, radix in radix_strategy()) {
            let text = format_number(value, radix);
            prop_assert_eq!(text.starts_with('-'), value < 0.0);
            prop_assert_eq!(text.matches('-').count(), usize::from(value < 0.0));
        }
    }
}

// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Numeral formatting for the calculator display.
//!
//! Results are rounded to [`PRECISION`] significant digits and rendered in a
//! general format: positional notation for moderate magnitudes, scientific
//! notation (`1.5E+20`, `1E-06`) otherwise. Trailing fractional zeros and a
//! dangling decimal point are never shown.

use std::iter;

use crate::engine::error::CalcError;

/// Significant digits kept in a displayed result.
pub(crate) const PRECISION: usize = 15;

// Smallest decimal exponent still rendered positionally.
const MIN_POSITIONAL_EXPONENT: i32 = -4;

/// Formats a calculation result for display.
///
/// # Errors
///
/// Returns [`CalcError::NonFinite`] for NaN and infinite values, which have
/// no numeral representation.
///
/// For example `1.50` becomes `1.5`, `1.0` becomes `1`, `0.0001` stays
/// positional and `0.00001` becomes `1E-05`.
pub(crate) fn format_number(value: f64) -> Result<String, CalcError> {
    if !value.is_finite() {
        return Err(CalcError::NonFinite(value));
    }

    // Covers negative zero as well
    if value == 0.0 {
        return Ok("0".to_string());
    }

    let rounded = format!("{:.*e}", PRECISION - 1, value);
    let (mantissa, exponent) = rounded
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
        .ok_or(CalcError::NonFinite(value))?;

    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_end_matches('0');

    let mut text = String::with_capacity(PRECISION + 8);
    if mantissa.starts_with('-') {
        text.push('-');
    }

    if (MIN_POSITIONAL_EXPONENT..PRECISION as i32).contains(&exponent) {
        push_positional(&mut text, digits, exponent);
    } else {
        push_scientific(&mut text, digits, exponent);
    }

    Ok(text)
}

fn push_positional(text: &mut String, digits: &str, exponent: i32) {
    if exponent < 0 {
        text.push_str("0.");
        text.extend(iter::repeat_n('0', exponent.unsigned_abs() as usize - 1));
        text.push_str(digits);
        return;
    }

    let integer_len = exponent as usize + 1;
    if digits.len() <= integer_len {
        text.push_str(digits);
        text.extend(iter::repeat_n('0', integer_len - digits.len()));
    } else {
        let (integer, fraction) = digits.split_at(integer_len);
        text.push_str(integer);
        text.push('.');
        text.push_str(fraction);
    }
}

fn push_scientific(text: &mut String, digits: &str, exponent: i32) {
    let (lead, rest) = digits.split_at(1);
    text.push_str(lead);
    if !rest.is_empty() {
        text.push('.');
        text.push_str(rest);
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    text.push_str(&format!("E{}{:02}", sign, exponent.unsigned_abs()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fmt(value: f64) -> String {
        format_number(value).unwrap()
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(fmt(1.50), "1.5");
        assert_eq!(fmt(1.0), "1");
        assert_eq!(fmt(100.0), "100");
        assert_eq!(fmt(-2.5), "-2.5");
    }

    #[test]
    fn test_rounds_to_fifteen_significant_digits() {
        assert_eq!(fmt(0.1 + 0.2), "0.3");
        assert_eq!(fmt(1.0 / 3.0), "0.333333333333333");
        assert_eq!(fmt(2.0 / 3.0), "0.666666666666667");
        assert_eq!(fmt(123456789012345.0), "123456789012345");
    }

    #[test]
    fn test_scientific_for_large_and_tiny_magnitudes() {
        assert_eq!(fmt(1e15), "1E+15");
        assert_eq!(fmt(1234567890123456.0), "1.23456789012346E+15");
        assert_eq!(fmt(-1.5e20), "-1.5E+20");
        assert_eq!(fmt(0.0001), "0.0001");
        assert_eq!(fmt(0.00001), "1E-05");
        assert_eq!(fmt(-0.000025), "-2.5E-05");
        assert_eq!(fmt(0.000001), "1E-06");
        assert_eq!(fmt(2.5e-120), "2.5E-120");
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(fmt(-0.0), "0");
        assert_eq!(fmt(0.0 * -5.0), "0");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(format_number(f64::NAN), Err(CalcError::NonFinite(_))));
        assert!(matches!(format_number(f64::INFINITY), Err(CalcError::NonFinite(_))));
        assert!(matches!(format_number(f64::NEG_INFINITY), Err(CalcError::NonFinite(_))));
        assert!(format_number(1e300 * 1e10).is_err());
    }

    #[test]
    fn test_minimal_numeral_is_fixed_point() {
        for numeral in ["1.5", "0.5", "42", "-7.25", "1E+20", "1E-05", "1E-06", "0.0001"] {
            let value: f64 = numeral.parse().unwrap();
            assert_eq!(fmt(value), numeral);
        }
    }

    proptest! {
        #[test]
        fn formatting_is_idempotent(value in -1e300f64..1e300f64) {
            let once = fmt(value);
            let reparsed: f64 = once.parse().unwrap();
            prop_assert_eq!(fmt(reparsed), once);
        }

        #[test]
        fn formatted_output_is_minimal(value in -1e12f64..1e12f64) {
            let text = fmt(value);
            prop_assert!(!text.ends_with('.'));
            if text.contains('.') && !text.contains('E') {
                prop_assert!(!text.ends_with('0'));
            }
        }
    }
}

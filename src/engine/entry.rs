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

//! The value shown on the calculator display.

use crate::engine::{error::CalcError, format::format_number};

/// Literal shown in place of a numeral after a failed calculation.
pub(crate) const ERROR_MARKER: &str = "Error";

pub(crate) const DECIMAL_POINT: char = '.';

/// Either the numeral being entered/displayed, or the error state.
///
/// A numeral is always a (possibly signed) decimal with at most one decimal
/// point, or a formatted result in scientific notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Entry {
    Numeral(String),
    Error,
}

impl Default for Entry {
    fn default() -> Self {
        Self::zero()
    }
}

impl Entry {
    pub(crate) fn zero() -> Self {
        Self::Numeral("0".to_string())
    }

    /// Commits the outcome of a calculation, collapsing any failure (including
    /// a non-finite value) into the error state.
    pub(crate) fn from_result(result: Result<f64, CalcError>) -> Self {
        match result.and_then(format_number) {
            Ok(numeral) => Self::Numeral(numeral),
            Err(e) => {
                tracing::debug!(error = %e, "calculation failed");
                Self::Error
            }
        }
    }

    /// The numeric value of the entry, if it has one.
    ///
    /// A typed numeral beyond the range of `f64` parses to an infinity, which
    /// then fails formatting wherever it is used in a calculation.
    pub(crate) fn value(&self) -> Option<f64> {
        match self {
            Self::Numeral(text) => text.parse::<f64>().ok(),
            Self::Error => None,
        }
    }

    pub(crate) fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    pub(crate) fn as_str(&self) -> &str {
        match self {
            Self::Numeral(text) => text,
            Self::Error => ERROR_MARKER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_renders_marker_and_has_no_value() {
        let entry = Entry::Error;
        assert_eq!(entry.as_str(), "Error");
        assert_eq!(entry.value(), None);
    }

    #[test]
    fn test_partial_numerals_parse() {
        assert_eq!(Entry::Numeral("0.".into()).value(), Some(0.0));
        assert_eq!(Entry::Numeral("-12.5".into()).value(), Some(-12.5));
        assert_eq!(Entry::Numeral("1.5E+20".into()).value(), Some(1.5e20));
    }

    #[test]
    fn test_out_of_range_numeral_is_infinite() {
        let entry = Entry::Numeral("9".repeat(400));
        assert_eq!(entry.value(), Some(f64::INFINITY));
        assert_eq!(Entry::Numeral(format!("-{}", "9".repeat(400))).value(), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_from_result_collapses_failures() {
        assert_eq!(Entry::from_result(Ok(2.5)), Entry::Numeral("2.5".into()));
        assert_eq!(Entry::from_result(Ok(f64::NAN)), Entry::Error);
        assert_eq!(Entry::from_result(Err(CalcError::ZeroReciprocal)), Entry::Error);
    }
}

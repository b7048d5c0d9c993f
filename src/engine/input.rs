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

//! The closed set of inputs understood by the calculator.
//!
//! Presentation layers translate their own gestures (button presses, typed
//! commands) into a [`CalcInput`] and hand it to
//! [`Calculator::dispatch`](crate::engine::Calculator::dispatch). Display
//! glyphs for operators and functions are the presentation layer's concern
//! and deliberately do not live here.

use crate::engine::error::CalcError;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// A transform applied in place to the current entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnaryFunction {
    SquareRoot,
    Square,
    CubeRoot,
    Reciprocal,
    NaturalLog,
}

impl UnaryFunction {
    /// Applies the function, refusing operands outside its domain.
    pub(crate) fn evaluate(self, operand: f64) -> Result<f64, CalcError> {
        match self {
            Self::SquareRoot if operand < 0.0 => Err(CalcError::NegativeSquareRoot(operand)),
            Self::SquareRoot => Ok(operand.sqrt()),
            Self::Square => Ok(operand * operand),
            Self::CubeRoot => Ok(operand.cbrt()),
            Self::Reciprocal if operand == 0.0 => Err(CalcError::ZeroReciprocal),
            Self::Reciprocal => Ok(1.0 / operand),
            Self::NaturalLog if operand <= 0.0 => Err(CalcError::NonPositiveLogarithm(operand)),
            Self::NaturalLog => Ok(operand.ln()),
        }
    }
}

/// One discrete calculator input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CalcInput {
    /// A digit character or the decimal point.
    Symbol(char),
    Operator(Operator),
    Equals,
    Clear,
    ToggleSign,
    Percent,
    Unary(UnaryFunction),
}

impl CalcInput {
    /// The entry of a single decimal digit.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is greater than 9.
    pub(crate) const fn digit(digit: u8) -> Self {
        assert!(digit <= 9, "not a decimal digit");
        Self::Symbol((b'0' + digit) as char)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_guards() {
        assert_eq!(
            UnaryFunction::SquareRoot.evaluate(-4.0),
            Err(CalcError::NegativeSquareRoot(-4.0))
        );
        assert_eq!(
            UnaryFunction::NaturalLog.evaluate(0.0),
            Err(CalcError::NonPositiveLogarithm(0.0))
        );
        assert_eq!(
            UnaryFunction::NaturalLog.evaluate(-1.0),
            Err(CalcError::NonPositiveLogarithm(-1.0))
        );
        assert_eq!(UnaryFunction::Reciprocal.evaluate(0.0), Err(CalcError::ZeroReciprocal));
    }

    #[test]
    fn test_unrestricted_functions() {
        assert_eq!(UnaryFunction::SquareRoot.evaluate(0.0), Ok(0.0));
        assert_eq!(UnaryFunction::Square.evaluate(-3.0), Ok(9.0));
        assert_eq!(UnaryFunction::CubeRoot.evaluate(-27.0), Ok(-3.0));
        assert_eq!(UnaryFunction::Reciprocal.evaluate(4.0), Ok(0.25));
        assert_eq!(UnaryFunction::NaturalLog.evaluate(1.0), Ok(0.0));
    }

    #[test]
    fn test_digit_constructor() {
        assert_eq!(CalcInput::digit(0), CalcInput::Symbol('0'));
        assert_eq!(CalcInput::digit(7), CalcInput::Symbol('7'));
        assert_eq!(CalcInput::digit(9), CalcInput::Symbol('9'));
    }

    #[test]
    #[should_panic(expected = "not a decimal digit")]
    fn test_digit_constructor_rejects_non_digits() {
        let _ = CalcInput::digit(10);
    }
}

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

//! Calculator engine.
//!
//! A self-contained state machine that turns a sequence of calculator inputs
//! into a display string. It knows nothing about terminals, widgets or key
//! codes; the presentation layer feeds it [`CalcInput`]s and renders whatever
//! [`Calculator::display`] returns.
//!
//! # Semantics
//!
//! * Binary operators chain strictly left to right: pressing an operator after
//!   a second operand has been typed resolves the pending operation first, so
//!   `2 + 3 + 4 =` shows `5` on the second `+` and `9` on `=`.
//! * Percent and the unary functions replace the current entry with their
//!   result and leave the calculator ready for a fresh number.
//! * Failures (division by zero, domain violations, overflow) put the entry
//!   into the error state. Any digit or a clear leaves it again.
//!
//! # Sub-modules
//!
//! * [`entry`]: the displayed value, a numeral or the error marker.
//! * [`error`]: why a calculation failed.
//! * [`format`]: rendering of results as numerals.
//! * [`input`]: operators, unary functions and the input event type.

pub(crate) mod entry;
pub(crate) mod error;
pub(crate) mod format;
pub(crate) mod input;

pub(crate) use entry::Entry;
pub(crate) use input::{CalcInput, Operator, UnaryFunction};

use entry::DECIMAL_POINT;

/// Calculator state and the operations that mutate it.
#[derive(Debug, Clone)]
pub(crate) struct Calculator {
    current: Entry,
    previous_value: Option<f64>,
    pending_operator: Option<Operator>,
    is_new_input: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub(crate) fn new() -> Self {
        Self {
            current: Entry::zero(),
            previous_value: None,
            pending_operator: None,
            is_new_input: true,
        }
    }

    /// The text to show on the display.
    pub(crate) fn display(&self) -> &str {
        self.current.as_str()
    }

    pub(crate) fn entry(&self) -> &Entry {
        &self.current
    }

    /// The left operand held for the pending operator, if any.
    pub(crate) fn previous_value(&self) -> Option<f64> {
        self.previous_value
    }

    pub(crate) fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub(crate) fn is_new_input(&self) -> bool {
        self.is_new_input
    }

    /// Routes a single input event to its operation and returns the new
    /// display text.
    pub(crate) fn dispatch(&mut self, input: CalcInput) -> &str {
        match input {
            CalcInput::Symbol(symbol) => self.enter_digit_or_decimal(symbol),
            CalcInput::Operator(op) => self.select_operator(op),
            CalcInput::Equals => self.evaluate_equals(),
            CalcInput::Clear => self.clear_all(),
            CalcInput::ToggleSign => self.toggle_sign(),
            CalcInput::Percent => self.apply_percent(),
            CalcInput::Unary(UnaryFunction::SquareRoot) => self.square_root(),
            CalcInput::Unary(UnaryFunction::Square) => self.square(),
            CalcInput::Unary(UnaryFunction::CubeRoot) => self.cube_root(),
            CalcInput::Unary(UnaryFunction::Reciprocal) => self.reciprocal(),
            CalcInput::Unary(UnaryFunction::NaturalLog) => self.natural_log(),
        };

        tracing::debug!(
            ?input,
            display = self.display(),
            new_input = self.is_new_input(),
            "input processed"
        );

        self.display()
    }

    /// Enters a digit or the decimal point.
    ///
    /// A fresh number replaces whatever is shown (a bare decimal point becomes
    /// `0.`). Otherwise the symbol is appended, except that a second decimal
    /// point is ignored and a lone `0` is overwritten rather than extended.
    pub(crate) fn enter_digit_or_decimal(&mut self, symbol: char) -> &str {
        if !symbol.is_ascii_digit() && symbol != DECIMAL_POINT {
            tracing::warn!(%symbol, "ignoring unsupported entry symbol");
            return self.display();
        }

        let starts_fresh = self.is_new_input || self.current.is_error();
        if starts_fresh {
            let text = if symbol == DECIMAL_POINT {
                "0.".to_string()
            } else {
                symbol.to_string()
            };
            self.current = Entry::Numeral(text);
            self.is_new_input = false;
        } else if let Entry::Numeral(text) = &mut self.current {
            if symbol == DECIMAL_POINT {
                if !text.contains(DECIMAL_POINT) {
                    text.push(DECIMAL_POINT);
                }
            } else if text == "0" {
                *text = symbol.to_string();
            } else {
                text.push(symbol);
            }
        }

        self.display()
    }

    /// Selects a binary operator.
    ///
    /// If a second operand has been typed since the last operator, the pending
    /// operation is resolved first and its result becomes the new left
    /// operand. Otherwise the current entry becomes the left operand, which
    /// also lets the user change their mind about the operator.
    pub(crate) fn select_operator(&mut self, op: Operator) -> &str {
        let Some(current) = self.current.value() else {
            return self.display();
        };

        match (self.previous_value, self.pending_operator) {
            (Some(previous), Some(pending)) if !self.is_new_input => {
                let result = apply(pending, previous, current);
                self.previous_value = Some(result);
                self.current = Entry::from_result(Ok(result));
            }
            _ => self.previous_value = Some(current),
        }

        self.pending_operator = Some(op);
        self.is_new_input = true;

        self.display()
    }

    /// Resolves the pending operation, if there is one.
    pub(crate) fn evaluate_equals(&mut self) -> &str {
        let (Some(previous), Some(pending)) = (self.previous_value, self.pending_operator) else {
            return self.display();
        };
        let Some(current) = self.current.value() else {
            return self.display();
        };

        self.current = Entry::from_result(Ok(apply(pending, previous, current)));
        self.previous_value = None;
        self.pending_operator = None;
        self.is_new_input = true;

        self.display()
    }

    pub(crate) fn clear_all(&mut self) -> &str {
        self.current = Entry::zero();
        self.previous_value = None;
        self.pending_operator = None;
        self.is_new_input = true;

        self.display()
    }

    /// Flips the sign of the current entry. A lone `0` and the error state are
    /// left alone.
    pub(crate) fn toggle_sign(&mut self) -> &str {
        if let Entry::Numeral(text) = &mut self.current {
            if text == "0" {
                return self.display();
            }

            match text.strip_prefix('-') {
                Some(unsigned) => *text = unsigned.to_string(),
                None => text.insert(0, '-'),
            }
        }

        self.display()
    }

    pub(crate) fn apply_percent(&mut self) -> &str {
        let Some(current) = self.current.value() else {
            return self.display();
        };

        self.current = Entry::from_result(Ok(current / 100.0));
        self.is_new_input = true;

        self.display()
    }

    /// Replaces the current entry with `function` applied to it.
    ///
    /// An operand outside the function's domain puts the calculator into the
    /// error state.
    pub(crate) fn apply_unary(&mut self, function: UnaryFunction) -> &str {
        let Some(current) = self.current.value() else {
            return self.display();
        };

        self.current = Entry::from_result(function.evaluate(current));
        self.is_new_input = true;

        self.display()
    }

    pub(crate) fn square_root(&mut self) -> &str {
        self.apply_unary(UnaryFunction::SquareRoot)
    }

    pub(crate) fn square(&mut self) -> &str {
        self.apply_unary(UnaryFunction::Square)
    }

    pub(crate) fn cube_root(&mut self) -> &str {
        self.apply_unary(UnaryFunction::CubeRoot)
    }

    pub(crate) fn reciprocal(&mut self) -> &str {
        self.apply_unary(UnaryFunction::Reciprocal)
    }

    pub(crate) fn natural_log(&mut self) -> &str {
        self.apply_unary(UnaryFunction::NaturalLog)
    }
}

/// Evaluates a binary operation.
///
/// Division by exactly zero yields NaN, which the display renders as the
/// error marker.
pub(crate) fn apply(op: Operator, left: f64, right: f64) -> f64 {
    match op {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide if right == 0.0 => f64::NAN,
        Operator::Divide => left / right,
    }
}

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

//! Calculator keypad widget and state management.
//!
//! The keypad is a fixed grid of buttons, each bound to one [`CalcInput`].
//! It tracks which button has focus and where each button was last drawn so
//! that both keyboard navigation and mouse clicks can activate buttons. This
//! is also where operators and functions get their display glyphs; the engine
//! itself only knows the abstract inputs.

mod event;
mod render;

use std::borrow::Cow;

use ratatui::layout::{Position, Rect};

use crate::engine::{CalcInput, Operator, UnaryFunction};

pub(crate) const ROWS: usize = 6;
pub(crate) const COLUMNS: usize = 4;

const LAYOUT: [[CalcInput; COLUMNS]; ROWS] = [
    [
        CalcInput::Clear,
        CalcInput::ToggleSign,
        CalcInput::Percent,
        CalcInput::Operator(Operator::Divide),
    ],
    [
        CalcInput::Unary(UnaryFunction::SquareRoot),
        CalcInput::Unary(UnaryFunction::Square),
        CalcInput::Unary(UnaryFunction::CubeRoot),
        CalcInput::Operator(Operator::Multiply),
    ],
    [
        CalcInput::digit(7),
        CalcInput::digit(8),
        CalcInput::digit(9),
        CalcInput::Operator(Operator::Subtract),
    ],
    [
        CalcInput::digit(4),
        CalcInput::digit(5),
        CalcInput::digit(6),
        CalcInput::Operator(Operator::Add),
    ],
    [
        CalcInput::digit(1),
        CalcInput::digit(2),
        CalcInput::digit(3),
        CalcInput::Unary(UnaryFunction::Reciprocal),
    ],
    [
        CalcInput::Unary(UnaryFunction::NaturalLog),
        CalcInput::digit(0),
        CalcInput::Symbol('.'),
        CalcInput::Equals,
    ],
];

/// Visual category of a button, used to pick its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonKind {
    Entry,
    Operator,
    Function,
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeypadAction {
    Activate(CalcInput),
}

pub(crate) const fn operator_glyph(op: Operator) -> &'static str {
    match op {
        Operator::Add => "+",
        Operator::Subtract => "\u{2212}",
        Operator::Multiply => "\u{00D7}",
        Operator::Divide => "\u{00F7}",
    }
}

const fn function_label(function: UnaryFunction) -> &'static str {
    match function {
        UnaryFunction::SquareRoot => "\u{221A}x",
        UnaryFunction::Square => "x\u{00B2}",
        UnaryFunction::CubeRoot => "\u{221B}x",
        UnaryFunction::Reciprocal => "1/x",
        UnaryFunction::NaturalLog => "ln",
    }
}

pub(crate) fn button_label(input: CalcInput) -> Cow<'static, str> {
    match input {
        CalcInput::Symbol(symbol) => Cow::Owned(symbol.to_string()),
        CalcInput::Operator(op) => Cow::Borrowed(operator_glyph(op)),
        CalcInput::Equals => Cow::Borrowed("="),
        CalcInput::Clear => Cow::Borrowed("AC"),
        CalcInput::ToggleSign => Cow::Borrowed("\u{00B1}"),
        CalcInput::Percent => Cow::Borrowed("%"),
        CalcInput::Unary(function) => Cow::Borrowed(function_label(function)),
    }
}

pub(crate) fn button_kind(input: CalcInput) -> ButtonKind {
    match input {
        CalcInput::Symbol(_) => ButtonKind::Entry,
        CalcInput::Operator(_) | CalcInput::Equals => ButtonKind::Operator,
        CalcInput::Unary(_) | CalcInput::Percent | CalcInput::ToggleSign => ButtonKind::Function,
        CalcInput::Clear => ButtonKind::Control,
    }
}

pub(crate) struct Keypad {
    row: usize,
    column: usize,
    // Screen areas from the most recent render, for mouse hit-testing
    button_areas: Vec<(Rect, CalcInput)>,
}

impl Keypad {
    pub(crate) fn new() -> Self {
        Self {
            row: 2,
            column: 0,
            button_areas: Vec::with_capacity(ROWS * COLUMNS),
        }
    }

    pub(crate) fn selected(&self) -> (usize, usize) {
        (self.row, self.column)
    }

    pub(crate) fn selected_input(&self) -> CalcInput {
        LAYOUT[self.row][self.column]
    }

    pub(crate) fn select_next_column(&mut self) {
        self.column = (self.column + 1) % COLUMNS;
    }

    pub(crate) fn select_previous_column(&mut self) {
        self.column = (self.column + COLUMNS - 1) % COLUMNS;
    }

    pub(crate) fn select_next_row(&mut self) {
        self.row = (self.row + 1) % ROWS;
    }

    pub(crate) fn select_previous_row(&mut self) {
        self.row = (self.row + ROWS - 1) % ROWS;
    }

    /// Moves the focus to the button bound to `input`, if there is one.
    pub(crate) fn select_input(&mut self, input: CalcInput) {
        let found = LAYOUT.iter().enumerate().find_map(|(row, buttons)| {
            buttons
                .iter()
                .position(|&candidate| candidate == input)
                .map(|column| (row, column))
        });

        if let Some((row, column)) = found {
            self.row = row;
            self.column = column;
        }
    }

    /// The button drawn at the given terminal cell, if any.
    pub(crate) fn input_at(&self, column: u16, row: u16) -> Option<CalcInput> {
        let position = Position::new(column, row);
        self.button_areas
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|&(_, input)| input)
    }

    fn set_button_areas(&mut self, areas: impl IntoIterator<Item = (Rect, CalcInput)>) {
        self.button_areas.clear();
        self.button_areas.extend(areas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_input_has_a_button() {
        let inputs: Vec<CalcInput> = LAYOUT.iter().flatten().copied().collect();
        for digit in 0..=9 {
            assert!(inputs.contains(&CalcInput::digit(digit)));
        }
        for input in [
            CalcInput::Symbol('.'),
            CalcInput::Operator(Operator::Add),
            CalcInput::Operator(Operator::Subtract),
            CalcInput::Operator(Operator::Multiply),
            CalcInput::Operator(Operator::Divide),
            CalcInput::Equals,
            CalcInput::Clear,
            CalcInput::ToggleSign,
            CalcInput::Percent,
            CalcInput::Unary(UnaryFunction::SquareRoot),
            CalcInput::Unary(UnaryFunction::Square),
            CalcInput::Unary(UnaryFunction::CubeRoot),
            CalcInput::Unary(UnaryFunction::Reciprocal),
            CalcInput::Unary(UnaryFunction::NaturalLog),
        ] {
            assert!(inputs.contains(&input), "missing {:?}", input);
        }
    }

    #[test]
    fn test_navigation_wraps() {
        let mut keypad = Keypad::new();
        assert_eq!(keypad.selected_input(), CalcInput::digit(7));

        keypad.select_previous_column();
        assert_eq!(keypad.selected_input(), CalcInput::Operator(Operator::Subtract));
        keypad.select_next_column();
        assert_eq!(keypad.selected(), (2, 0));

        for _ in 0..ROWS {
            keypad.select_next_row();
        }
        assert_eq!(keypad.selected(), (2, 0));

        keypad.select_previous_row();
        keypad.select_previous_row();
        keypad.select_previous_row();
        assert_eq!(keypad.selected(), (5, 0));
        assert_eq!(keypad.selected_input(), CalcInput::Unary(UnaryFunction::NaturalLog));
    }

    #[test]
    fn test_select_input() {
        let mut keypad = Keypad::new();
        keypad.select_input(CalcInput::Equals);
        assert_eq!(keypad.selected(), (5, 3));
    }

    #[test]
    fn test_hit_testing_uses_last_rendered_areas() {
        let mut keypad = Keypad::new();
        assert_eq!(keypad.input_at(1, 1), None);

        keypad.set_button_areas([
            (Rect::new(0, 0, 5, 3), CalcInput::Clear),
            (Rect::new(5, 0, 5, 3), CalcInput::Percent),
        ]);
        assert_eq!(keypad.input_at(1, 1), Some(CalcInput::Clear));
        assert_eq!(keypad.input_at(7, 2), Some(CalcInput::Percent));
        assert_eq!(keypad.input_at(7, 3), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(button_label(CalcInput::Operator(Operator::Multiply)), "\u{00D7}");
        assert_eq!(button_label(CalcInput::Operator(Operator::Divide)), "\u{00F7}");
        assert_eq!(button_label(CalcInput::digit(5)), "5");
        assert_eq!(button_label(CalcInput::Unary(UnaryFunction::Reciprocal)), "1/x");
        assert_eq!(button_kind(CalcInput::Equals), ButtonKind::Operator);
    }
}

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

//! Input handling and event processing for the keypad.
//!
//! This module maps raw terminal events to focus movement and button
//! activation. Keys only ever move the focus or press the focused button;
//! they are never interpreted as digits or operators directly.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};

use crate::components::keypad::{Keypad, KeypadAction};

impl Keypad {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<KeypadAction> {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                match key_event.code {
                    KeyCode::Char('l') | KeyCode::Right => self.select_next_column(),
                    KeyCode::Char('h') | KeyCode::Left => self.select_previous_column(),
                    KeyCode::Char('j') | KeyCode::Down => self.select_next_row(),
                    KeyCode::Char('k') | KeyCode::Up => self.select_previous_row(),

                    KeyCode::Enter | KeyCode::Char(' ') => {
                        return Some(KeypadAction::Activate(self.selected_input()));
                    }

                    _ => {}
                }

                None
            }

            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    let input = self.input_at(mouse_event.column, mouse_event.row)?;
                    self.select_input(input);
                    Some(KeypadAction::Activate(input))
                }

                _ => None,
            },

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::layout::Rect;

    use super::*;
    use crate::engine::{CalcInput, Operator};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_enter_activates_focused_button() {
        let mut keypad = Keypad::new();
        assert_eq!(keypad.process_event(&key(KeyCode::Right)), None);
        assert_eq!(
            keypad.process_event(&key(KeyCode::Enter)),
            Some(KeypadAction::Activate(CalcInput::Symbol('8')))
        );
        assert_eq!(
            keypad.process_event(&key(KeyCode::Char(' '))),
            Some(KeypadAction::Activate(CalcInput::Symbol('8')))
        );
    }

    #[test]
    fn test_vi_keys_move_focus() {
        let mut keypad = Keypad::new();
        keypad.process_event(&key(KeyCode::Char('k')));
        keypad.process_event(&key(KeyCode::Char('h')));
        assert_eq!(keypad.selected_input(), CalcInput::Operator(Operator::Multiply));
    }

    #[test]
    fn test_digit_keys_are_not_shortcuts() {
        let mut keypad = Keypad::new();
        assert_eq!(keypad.process_event(&key(KeyCode::Char('5'))), None);
        assert_eq!(keypad.selected(), (2, 0));
    }

    #[test]
    fn test_click_activates_and_focuses_button() {
        let mut keypad = Keypad::new();
        keypad.set_button_areas([(Rect::new(10, 4, 6, 3), CalcInput::Equals)]);

        assert_eq!(keypad.process_event(&click(0, 0)), None);
        assert_eq!(
            keypad.process_event(&click(12, 5)),
            Some(KeypadAction::Activate(CalcInput::Equals))
        );
        assert_eq!(keypad.selected(), (5, 3));
    }
}

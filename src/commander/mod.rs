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

//! Command-line input logic and state management.
//!
//! This module implements a command-line component: `:` opens a text input,
//! and when a command is submitted it is translated into the corresponding
//! application event, usually a calculator input.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    actions::events::AppEvent,
    engine::{CalcInput, Operator, UnaryFunction},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    Calculate(CalcInput),
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Processes a terminal event, returning `true` if the commander consumed
    /// it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if key_event.kind != KeyEventKind::Press {
            return self.active;
        }

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }

            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                if !buffer.is_empty() {
                    if let Err(e) = self.run_command(&buffer, event_tx) {
                        tracing::error!(error = %e, "failed to dispatch command");
                    }
                }

                self.input.reset();
                self.active = false;
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        true
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        match parse_command(buffer) {
            Some(Command::Quit) => event_tx.send(AppEvent::ExitApplication)?,
            Some(Command::Calculate(input)) => event_tx.send(AppEvent::Input(input))?,
            None => {
                tracing::warn!(command = buffer, "unknown command");
                event_tx.send(AppEvent::Error(format!("Unknown command: {}", buffer)))?
            }
        }

        Ok(())
    }
}

/// Maps a submitted command line to a command.
pub(crate) fn parse_command(buffer: &str) -> Option<Command> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let input = match parts.as_slice() {
        ["q"] | ["quit"] => return Some(Command::Quit),

        ["c"] | ["ac"] | ["clear"] => CalcInput::Clear,
        ["="] | ["eq"] => CalcInput::Equals,
        ["neg"] => CalcInput::ToggleSign,
        ["%"] | ["pct"] => CalcInput::Percent,

        ["+"] | ["add"] => CalcInput::Operator(Operator::Add),
        ["-"] | ["sub"] => CalcInput::Operator(Operator::Subtract),
        ["*"] | ["mul"] => CalcInput::Operator(Operator::Multiply),
        ["/"] | ["div"] => CalcInput::Operator(Operator::Divide),

        ["sqrt"] => CalcInput::Unary(UnaryFunction::SquareRoot),
        ["sqr"] => CalcInput::Unary(UnaryFunction::Square),
        ["cbrt"] => CalcInput::Unary(UnaryFunction::CubeRoot),
        ["inv"] => CalcInput::Unary(UnaryFunction::Reciprocal),
        ["ln"] => CalcInput::Unary(UnaryFunction::NaturalLog),

        _ => return None,
    };

    Some(Command::Calculate(input))
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("  clear "), Some(Command::Calculate(CalcInput::Clear)));
        assert_eq!(
            parse_command("div"),
            Some(Command::Calculate(CalcInput::Operator(Operator::Divide)))
        );
        assert_eq!(
            parse_command("ln"),
            Some(Command::Calculate(CalcInput::Unary(UnaryFunction::NaturalLog)))
        );
        assert_eq!(parse_command("sqrt 4"), None);
        assert_eq!(parse_command("bogus"), None);
    }

    #[test]
    fn test_inactive_commander_ignores_keys() {
        let (tx, _rx) = mpsc::channel();
        let mut commander = Commander::new();
        assert!(!commander.handle_event(&key(KeyCode::Char('x')), &tx));
        assert!(!commander.active());
    }

    #[test]
    fn test_submit_sends_calculator_input() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(commander.handle_event(&key(KeyCode::Char(':')), &tx));
        assert!(commander.active());
        for c in "inv".chars() {
            assert!(commander.handle_event(&key(KeyCode::Char(c)), &tx));
        }
        assert_eq!(commander.input.value(), "inv");

        assert!(commander.handle_event(&key(KeyCode::Enter), &tx));
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(matches!(
            rx.try_recv(),
            Ok(AppEvent::Input(CalcInput::Unary(UnaryFunction::Reciprocal)))
        ));
    }

    #[test]
    fn test_unknown_command_reports_error() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &tx);
        commander.handle_event(&key(KeyCode::Char('x')), &tx);
        commander.handle_event(&key(KeyCode::Enter), &tx);

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Error(msg)) if msg == "Unknown command: x"));
    }

    #[test]
    fn test_escape_cancels() {
        let (tx, rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &tx);
        commander.handle_event(&key(KeyCode::Char('q')), &tx);
        assert!(commander.handle_event(&key(KeyCode::Esc), &tx));

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(rx.try_recv().is_err());
    }
}

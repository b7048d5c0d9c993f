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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard and mouse), the calculator
//! engine, and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel fed by the terminal input thread and by components.
//! 2. **Process**: The [`process_events`] function routes raw terminal events
//!    to the commander and keypad, and hands calculator inputs to the engine.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, components::KeypadAction, engine::CalcInput, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Terminal(Event),

    Input(CalcInput),

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Terminal(event) => process_terminal_event(app, event)?,
        AppEvent::Input(input) => handle_input(app, input),
        AppEvent::Error(message) => app.status = Some(message),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}

fn handle_input(app: &mut App, input: CalcInput) {
    app.status = None;
    app.calculator.dispatch(input);
}

/// Routes a raw terminal event.
///
/// The commander gets first refusal while it is open, then the keypad, and
/// finally the global application keys.
///
/// # Errors
///
/// Returns an error if an event cannot be posted back to the event channel.
fn process_terminal_event(app: &mut App, event: Event) -> Result<()> {
    if app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    if let Some(KeypadAction::Activate(input)) = app.keypad.process_event(&event) {
        app.event_tx.send(AppEvent::Input(input))?;
        return Ok(());
    }

    if let Event::Key(key) = event
        && key.kind == KeyEventKind::Press
    {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.event_tx.send(AppEvent::ExitApplication)?,
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::config::AppConfig;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    /// Handles `event` and everything it posts back, as the loop would.
    fn pump(app: &mut App, event: AppEvent) -> bool {
        handle_event(app, event).unwrap();
        while let Ok(event) = app.event_rx.try_recv() {
            if matches!(event, AppEvent::ExitApplication) {
                return false;
            }
            handle_event(app, event).unwrap();
        }
        true
    }

    #[test]
    fn test_keypad_activation_reaches_engine() {
        let mut app = App::new(AppConfig::default());

        // Focus starts on 7
        pump(&mut app, key(KeyCode::Enter));
        pump(&mut app, key(KeyCode::Right));
        pump(&mut app, key(KeyCode::Enter));

        assert_eq!(app.calculator.display(), "78");
    }

    #[test]
    fn test_commander_input_reaches_engine() {
        let mut app = App::new(AppConfig::default());
        pump(&mut app, AppEvent::Input(CalcInput::digit(9)));

        for code in [':', 's', 'q', 'r', 't'].map(KeyCode::Char) {
            pump(&mut app, key(code));
        }
        pump(&mut app, key(KeyCode::Enter));

        assert_eq!(app.calculator.display(), "3");
    }

    #[test]
    fn test_error_sets_status_until_next_input() {
        let mut app = App::new(AppConfig::default());
        pump(&mut app, AppEvent::Error("Unknown command: x".into()));
        assert_eq!(app.status.as_deref(), Some("Unknown command: x"));

        pump(&mut app, AppEvent::Input(CalcInput::Clear));
        assert_eq!(app.status, None);
    }

    #[test]
    fn test_quit_key_exits() {
        let mut app = App::new(AppConfig::default());
        assert!(!pump(&mut app, key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_q_inside_commander_does_not_exit() {
        let mut app = App::new(AppConfig::default());
        pump(&mut app, key(KeyCode::Char(':')));
        assert!(pump(&mut app, key(KeyCode::Char('q'))));
    }
}

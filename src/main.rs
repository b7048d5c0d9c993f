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

//! # Calculator TUI.
//!
//! A terminal calculator with a clickable keypad.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! framework-free calculator engine.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns the calculator
//!   and renders the UI.
//! * An **Input Thread** forwards raw terminal events (keys, mouse, resize)
//!   to the main thread.
//! * The **Event Loop** routes those events through the commander and keypad,
//!   and feeds the resulting calculator inputs to the engine.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the input thread and the UI is handled via `std::sync::mpsc`
//! channels.

mod actions;
mod commander;
mod components;
mod config;
mod engine;
mod logging;
mod render;
mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};

use crate::{
    actions::events::{AppEvent, process_events},
    commander::Commander,
    components::Keypad,
    config::AppConfig,
    engine::Calculator,
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub calculator: Calculator,

    pub keypad: Keypad,
    pub commander: Commander,

    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            calculator: Calculator::new(),
            keypad: Keypad::new(),
            commander: Commander::new(),
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, manages the terminal lifecycle,
/// and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    // Logging is best-effort, the calculator works without it. Report a
    // failure now, while stderr is still the normal screen.
    match config::log_file_path() {
        Some(log_file) => {
            if let Err(e) = logging::init_logging(&config, &log_file) {
                eprintln!("calcui: logging disabled: {e:#}");
            }
        }
        None => eprintln!("calcui: logging disabled: no configuration directory"),
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting calcui");

    let mut app = App::new(config);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal, &app);

    tracing::info!(display = app.calculator.display(), "exiting calcui");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture, if configured, so keypad buttons can be clicked.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    if app.config.mouse_enabled {
        execute!(stdout, EnableMouseCapture).context("Failed to enable mouse capture")?;
    }

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`]. It also ensures the
/// cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &App) {
    disable_raw_mode().ok();
    if app.config.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture).ok();
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the input thread and enters the main event loop.
///
/// The input thread blocks on the terminal and forwards every key, mouse and
/// resize event as an [`AppEvent::Terminal`]. After spawning it, control is
/// handed to [`process_events`] to manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tx_terminal = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if tx_terminal.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to read terminal event");
                    let _ = tx_terminal.send(AppEvent::Error(e.to_string()));
                    break;
                }
            }
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}

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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod commander;
mod display;

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{
    App,
    render::{commander::draw_commander, display::draw_display},
    theme::Theme,
};

const MAX_WIDTH: u16 = 44;

const DISPLAY_HEIGHT: u16 = 4;

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The calculator is drawn as a single centred column:
///
/// * **Display**: The current entry, with any pending operation above it.
/// * **Keypad**: The button grid, which records its button positions for
///   mouse hit-testing as it draws.
/// * **Status**: The command line while it is open, otherwise the most recent
///   status message or a key hint.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let [column] = Layout::horizontal([Constraint::Max(MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let [display_area, keypad_area, status_area] = Layout::vertical([
        Constraint::Length(DISPLAY_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(column);

    draw_display(f, display_area, app);

    app.keypad.draw(f, keypad_area, &app.theme);

    draw_commander(f, status_area, app);
}

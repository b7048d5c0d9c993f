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

//! Render the command-line interface.
//!
//! This module renders the status line: the command-line text and cursor
//! while the commander is open, otherwise the latest status message.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const KEY_HINT: &str = "arrows move  enter press  : command  q quit";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let [container] = Layout::horizontal([Constraint::Min(1)])
        .horizontal_margin(1)
        .areas(area);

    if commander.active() {
        f.render_widget(
            Paragraph::new(format!(":{}", commander.input.value())).style(
                Style::default()
                    .fg(app.theme.commander_colour)
                    .bg(app.theme.panel_colour),
            ),
            container,
        );

        let cursor_x = container.x + 1 + commander.input.visual_cursor() as u16;
        let cursor_y = container.y;
        f.set_cursor_position((cursor_x, cursor_y));
        return;
    }

    let (text, fg) = match &app.status {
        Some(message) => (message.as_str(), app.theme.error_fg),
        None => (KEY_HINT, app.theme.status_fg),
    };

    f.render_widget(Paragraph::new(text).style(Style::default().fg(fg)), container);
}

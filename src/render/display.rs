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

//! Render the calculator display.
//!
//! The current entry is shown verbatim, right aligned. When an operation is
//! pending, the left operand and operator glyph are shown on the line above.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Padding, Paragraph},
};

use crate::{
    App,
    components::keypad::operator_glyph,
    engine::{Calculator, entry::ERROR_MARKER, format::format_number},
};

pub(crate) fn draw_display(f: &mut Frame, area: Rect, app: &App) {
    let calculator = &app.calculator;

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(app.theme.border_colour))
        .style(Style::default().bg(app.theme.panel_colour))
        .padding(Padding::horizontal(1));

    let pending = if app.config.show_pending {
        pending_text(calculator).unwrap_or_default()
    } else {
        String::new()
    };

    let entry_fg = if calculator.entry().is_error() {
        app.theme.error_fg
    } else {
        app.theme.display_fg
    };

    let lines = vec![
        Line::from(pending).fg(app.theme.pending_fg),
        Line::from(calculator.display()).style(Style::default().fg(entry_fg).add_modifier(Modifier::BOLD)),
    ];

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Right).block(block), area);
}

/// Describes the pending operation, e.g. `12 ×`.
pub(crate) fn pending_text(calculator: &Calculator) -> Option<String> {
    let previous = calculator.previous_value()?;
    let op = calculator.pending_operator()?;

    let operand = format_number(previous).unwrap_or_else(|_| ERROR_MARKER.to_string());

    Some(format!("{} {}", operand, operator_glyph(op)))
}

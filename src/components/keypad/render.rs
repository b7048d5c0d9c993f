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

//! UI rendering logic for the keypad.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Paragraph},
};

use crate::{
    components::keypad::{ButtonKind, COLUMNS, Keypad, LAYOUT, ROWS, button_kind, button_label},
    render::Render,
    theme::Theme,
};

impl Render for Keypad {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::vertical([Constraint::Ratio(1, ROWS as u32); ROWS]).split(area);

        let mut areas = Vec::with_capacity(ROWS * COLUMNS);
        for (row, row_area) in rows.iter().enumerate() {
            let cells =
                Layout::horizontal([Constraint::Ratio(1, COLUMNS as u32); COLUMNS]).split(*row_area);

            for (column, &cell) in cells.iter().enumerate() {
                let input = LAYOUT[row][column];
                let focused = self.selected() == (row, column);

                let fg = match button_kind(input) {
                    ButtonKind::Entry => theme.entry_fg,
                    ButtonKind::Operator => theme.operator_fg,
                    ButtonKind::Function => theme.function_fg,
                    ButtonKind::Control => theme.control_fg,
                };

                let (border_style, style) = if focused {
                    (
                        Style::default().fg(theme.accent_colour),
                        Style::default().fg(theme.background_colour).bg(theme.accent_colour),
                    )
                } else {
                    (Style::default().fg(theme.border_colour), Style::default().fg(fg))
                };

                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .style(Style::default().bg(style.bg.unwrap_or(theme.background_colour)));

                // Push the label down to the middle line of the button
                let inner = block.inner(cell);
                let label_area = Rect {
                    y: inner.y + inner.height.saturating_sub(1) / 2,
                    height: inner.height.min(1),
                    ..inner
                };

                f.render_widget(block, cell);
                f.render_widget(
                    Paragraph::new(button_label(input))
                        .alignment(Alignment::Center)
                        .style(style.add_modifier(Modifier::BOLD)),
                    label_area,
                );

                areas.push((cell, input));
            }
        }

        self.set_button_areas(areas);
    }
}

// at-mentions — @mention tracking for editable text fields
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.


use ratatui::layout::{Constraint, Layout, Rect};

pub struct AppLayout {
    pub body: Rect,
    pub input_sep: Rect,
    pub input: Rect,
    pub input_bottom_sep: Rect,
    pub footer: Option<Rect>,
}

pub fn compute(area: Rect, input_lines: u16) -> AppLayout {
    let input_height = input_lines.max(1);

    if area.height < 6 {
        // Ultra-compact: no separators, no footer
        let [body, input] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(input_height)]).areas(area);
        let zero = Rect::new(area.x, input.y, area.width, 0);
        AppLayout { body, input_sep: zero, input, input_bottom_sep: zero, footer: None }
    } else {
        let [body, input_sep, input, input_bottom_sep, footer] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(input_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        AppLayout { body, input_sep, input, input_bottom_sep, footer: Some(footer) }
    }
}

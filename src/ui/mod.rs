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


mod comments;
mod input;
mod layout;
mod suggestions;
pub mod theme;

pub use input::highlighted_spans;

use crate::app::App;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const FOOTER_PAD: u16 = 2;

pub fn render(frame: &mut Frame, app: &App) {
    let frame_area = frame.area();
    let input_lines = input::visual_line_count(app, frame_area.width);
    let areas = layout::compute(frame_area, input_lines);

    comments::render(frame, areas.body, app);

    render_separator(frame, areas.input_sep);
    input::render(frame, areas.input, app);

    // Suggestion dropdown (floating overlay above input)
    if suggestions::is_active(app) {
        suggestions::render(frame, areas.input, app);
    }

    render_separator(frame, areas.input_bottom_sep);

    if let Some(footer_area) = areas.footer {
        render_footer(frame, footer_area, app);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + FOOTER_PAD,
        y: area.y,
        width: area.width.saturating_sub(FOOTER_PAD * 2),
        height: area.height,
    };
    let hint = |key: &'static str, label: &'static str| {
        [
            Span::styled(key, Style::default().fg(Color::White)),
            Span::styled(label, Style::default().fg(theme::DIM)),
        ]
    };
    let mut spans = Vec::new();
    if app.suggestions.is_some() {
        spans.extend(hint("↑↓", " select  "));
        spans.extend(hint("Enter", " mention  "));
        spans.extend(hint("Esc", " dismiss  "));
    } else {
        spans.extend(hint("@", " mention  "));
        spans.extend(hint("Enter", " post  "));
    }
    spans.extend(hint("Ctrl+Q", " quit"));

    let mentioned = app.mentions.inserted_mentions().len();
    if mentioned > 0 {
        spans.push(Span::styled(
            format!("  [{mentioned} mentioned]"),
            Style::default().fg(theme::RUST_ORANGE),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), padded);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let sep_str = theme::SEPARATOR_CHAR.repeat(usize::from(area.width));
    let line = Line::from(Span::styled(sep_str, Style::default().fg(theme::DIM)));
    frame.render_widget(Paragraph::new(line), area);
}

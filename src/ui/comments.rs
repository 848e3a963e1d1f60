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


use crate::app::{App, Comment};
use crate::ui::input::highlighted_spans;
use crate::ui::theme;
use crate::view::Highlight;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

const BODY_PAD: u16 = 2;

/// Posted comments, newest at the bottom.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + BODY_PAD,
        y: area.y,
        width: area.width.saturating_sub(BODY_PAD * 2),
        height: area.height,
    };

    if app.comments.is_empty() {
        let line = Line::from(Span::styled(
            "No comments yet. Type @ to mention someone.",
            Style::default().fg(theme::DIM),
        ));
        frame.render_widget(Paragraph::new(line), padded);
        return;
    }

    let color = app.mentions.config().highlight_color;
    let lines: Vec<Line<'static>> = app.comments.iter().map(|c| comment_line(c, color)).collect();

    // Keep the latest comments in view
    let skip = lines.len().saturating_sub(usize::from(padded.height));
    let paragraph = Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, padded);
}

pub fn comment_line(comment: &Comment, color: Color) -> Line<'static> {
    let highlights: Vec<Highlight> = comment
        .mentions
        .iter()
        .map(|m| Highlight { start: m.offset, end: m.end(), color })
        .collect();
    let mut spans = vec![Span::styled(format!("{} ", theme::BULLET_CHAR), Style::default().fg(theme::DIM))];
    spans.extend(highlighted_spans(&comment.text, &highlights));
    Line::from(spans)
}

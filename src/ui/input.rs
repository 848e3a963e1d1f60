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


use crate::app::App;
use crate::text::{char_len, slice_chars};
use crate::ui::theme;
use crate::view::{Highlight, TextView};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

const INPUT_PAD: u16 = 2;

const PROMPT_WIDTH: u16 = 2;

const MAX_INPUT_HEIGHT: u16 = 6;

/// Split `text` into plain and highlighted spans. Highlight positions are
/// character indices; overlapping or out-of-range parts are skipped.
pub fn highlighted_spans(text: &str, highlights: &[Highlight]) -> Vec<Span<'static>> {
    let mut sorted = highlights.to_vec();
    sorted.sort_by_key(|h| h.start);

    let len = char_len(text);
    let mut spans = Vec::new();
    let mut pos = 0;
    for h in sorted {
        let start = h.start.max(pos).min(len);
        let end = h.end.min(len);
        if start >= end {
            continue;
        }
        if pos < start {
            spans.push(Span::raw(slice_chars(text, pos, start).to_owned()));
        }
        spans.push(Span::styled(
            slice_chars(text, start, end).to_owned(),
            Style::default().fg(h.color).add_modifier(Modifier::BOLD),
        ));
        pos = end;
    }
    if pos < len {
        spans.push(Span::raw(slice_chars(text, pos, len).to_owned()));
    }
    spans
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let padded = Rect {
        x: area.x + INPUT_PAD,
        y: area.y,
        width: area.width.saturating_sub(INPUT_PAD * 2),
        height: area.height,
    };
    let prompt =
        Span::styled(format!("{} ", theme::PROMPT_CHAR), Style::default().fg(theme::RUST_ORANGE));

    if app.input.is_empty() {
        // Placeholder
        let line = Line::from(vec![
            prompt,
            Span::styled("Write a comment, @ to mention...", Style::default().fg(theme::DIM)),
        ]);
        frame.render_widget(Paragraph::new(line), padded);

        // Cursor after prompt char
        frame.set_cursor_position((padded.x + PROMPT_WIDTH, padded.y));
        return;
    }

    let mut spans = vec![prompt];
    spans.extend(highlighted_spans(app.input.text(), app.input.highlights()));
    let paragraph = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, padded);

    // Place terminal cursor accounting for visual wrapping.
    let content_width = padded.width.saturating_sub(PROMPT_WIDTH);
    if content_width == 0 {
        return;
    }
    let (wrap_row, wrap_col) = cursor_offset(app, content_width);
    let cursor_x = padded.x + PROMPT_WIDTH + wrap_col;
    let cursor_y = padded.y + wrap_row;
    if cursor_x < padded.right() && cursor_y < padded.bottom() {
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// `(row, column)` of the caret within the wrapped text.
#[allow(clippy::cast_possible_truncation)]
fn cursor_offset(app: &App, content_width: u16) -> (u16, u16) {
    let before = slice_chars(app.input.text(), 0, app.input.cursor());
    let width = before.width();
    let content_width = usize::from(content_width);
    ((width / content_width) as u16, (width % content_width) as u16)
}

#[allow(clippy::cast_possible_truncation)]
pub fn visual_line_count(app: &App, area_width: u16) -> u16 {
    if app.input.is_empty() {
        return 1;
    }
    let content_width =
        usize::from(area_width.saturating_sub(INPUT_PAD * 2).saturating_sub(PROMPT_WIDTH));
    if content_width == 0 {
        return 1;
    }
    // The caret may sit one cell past the last character
    let width = app.input.text().width() + 1;
    (width.div_ceil(content_width) as u16).clamp(1, MAX_INPUT_HEIGHT)
}

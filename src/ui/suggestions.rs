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


use crate::app::{App, MAX_VISIBLE, SuggestionState, User};
use crate::text::{char_len, slice_chars};
use crate::ui::theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

const INPUT_PAD: u16 = 2;
const PROMPT_WIDTH: u16 = 2;
const MAX_WIDTH: u16 = 40;

pub fn is_active(app: &App) -> bool {
    app.suggestions.as_ref().is_some_and(|s| !s.candidates.is_empty())
}

#[allow(clippy::cast_possible_truncation)]
pub fn compute_height(app: &App) -> u16 {
    match &app.suggestions {
        Some(s) if !s.candidates.is_empty() => {
            let visible = s.candidates.len().min(MAX_VISIBLE) as u16;
            visible.saturating_add(2) // +2 for top/bottom border
        }
        _ => 0,
    }
}

pub fn render(frame: &mut Frame, input_area: Rect, app: &App) {
    let suggestions = match &app.suggestions {
        Some(s) if !s.candidates.is_empty() => s,
        _ => return,
    };

    let height = compute_height(app);
    // Position: above input, aligned with text start
    let x = input_area.x + INPUT_PAD + PROMPT_WIDTH;
    let width = input_area.width.saturating_sub(INPUT_PAD * 2 + PROMPT_WIDTH).min(MAX_WIDTH);
    let y = input_area.y.saturating_sub(height);
    let dropdown_area = Rect { x, y, width, height };

    let title = format!(" People ({}) ", suggestions.candidates.len());
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(theme::DIM)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::DIM));

    let paragraph = Paragraph::new(dropdown_lines(suggestions)).block(block);
    // Clear the area first so the overlay has a solid background
    frame.render_widget(Clear, dropdown_area);
    frame.render_widget(paragraph, dropdown_area);
}

fn dropdown_lines(suggestions: &SuggestionState) -> Vec<Line<'static>> {
    let (start, end) = suggestions.visible_range();
    suggestions.candidates[start..end]
        .iter()
        .enumerate()
        .map(|(i, user)| {
            let is_selected = start + i == suggestions.selected;
            let mut spans = vec![if is_selected {
                Span::styled(
                    format!(" {} ", theme::SELECTED_CHAR),
                    Style::default().fg(theme::RUST_ORANGE).add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw("   ")
            }];
            spans.extend(name_spans(user, &suggestions.query));
            Line::from(spans)
        })
        .collect()
}

/// Full name with the part matching `query` emphasized.
fn name_spans(user: &User, query: &str) -> Vec<Span<'static>> {
    let name = user.full_name();
    let query_lower = query.to_lowercase();
    let match_start = if name.to_lowercase().starts_with(&query_lower) {
        Some(0)
    } else if user.last_name.to_lowercase().starts_with(&query_lower) {
        Some(char_len(&user.first_name) + 1)
    } else {
        None
    };

    let Some(match_start) = match_start.filter(|_| !query.is_empty()) else {
        return vec![Span::raw(name)];
    };
    let match_end = match_start + char_len(query);
    let mut spans = Vec::with_capacity(3);
    if match_start > 0 {
        spans.push(Span::raw(slice_chars(&name, 0, match_start).to_owned()));
    }
    spans.push(Span::styled(
        slice_chars(&name, match_start, match_end).to_owned(),
        Style::default().fg(theme::RUST_ORANGE).add_modifier(Modifier::BOLD),
    ));
    let len = char_len(&name);
    if match_end < len {
        spans.push(Span::raw(slice_chars(&name, match_end, len).to_owned()));
    }
    spans
}

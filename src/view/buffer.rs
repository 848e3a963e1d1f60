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

use super::{Highlight, TextView};
use crate::mention::TextEdit;
use crate::text::{char_len, char_to_byte_index};
use ratatui::style::Color;

/// In-memory editable text with a selection and highlight spans.
///
/// Editing methods return the [`TextEdit`] they performed so the caller can
/// feed it to the mention engine; `None` means the text did not change.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    selection_start: usize,
    selection_end: usize,
    highlights: Vec<Highlight>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the caret at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = char_len(&text);
        Self { text, selection_start: end, selection_end: end, highlights: Vec::new() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        char_len(&self.text)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.selection_end
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.selection_start != self.selection_end
    }

    #[must_use]
    pub fn highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Select `[start, end)`; endpoints may come in either order.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.len();
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.selection_start = start.min(len);
        self.selection_end = end.min(len);
    }

    /// Replace the whole text, caret at the end.
    pub fn set_text(&mut self, text: &str) -> Option<TextEdit> {
        let removed = self.len();
        let inserted = char_len(text);
        if removed == 0 && inserted == 0 {
            return None;
        }
        self.replace_range(0, removed, text);
        self.set_selection(inserted);
        Some(TextEdit::new(0, removed, inserted))
    }

    pub fn clear(&mut self) -> Option<TextEdit> {
        self.set_text("")
    }

    /// Replace the selection (or insert at the caret) with `s`.
    pub fn insert_str(&mut self, s: &str) -> Option<TextEdit> {
        let start = self.selection_start;
        let removed = self.selection_end - start;
        let inserted = char_len(s);
        if removed == 0 && inserted == 0 {
            return None;
        }
        self.replace_range(start, start + removed, s);
        self.set_selection(start + inserted);
        Some(TextEdit::new(start, removed, inserted))
    }

    pub fn insert_char(&mut self, c: char) -> Option<TextEdit> {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf))
    }

    /// Backspace: delete the selection, or the character before the caret.
    pub fn delete_char_before(&mut self) -> Option<TextEdit> {
        if self.has_selection() {
            return self.insert_str("");
        }
        let cursor = self.cursor();
        if cursor == 0 {
            return None;
        }
        self.replace_range(cursor - 1, cursor, "");
        self.set_selection(cursor - 1);
        Some(TextEdit::deletion(cursor - 1, 1))
    }

    /// Forward delete: delete the selection, or the character after the caret.
    pub fn delete_char_after(&mut self) -> Option<TextEdit> {
        if self.has_selection() {
            return self.insert_str("");
        }
        let cursor = self.cursor();
        if cursor >= self.len() {
            return None;
        }
        self.replace_range(cursor, cursor + 1, "");
        self.set_selection(cursor);
        Some(TextEdit::deletion(cursor, 1))
    }

    pub fn move_left(&mut self) {
        let target = if self.has_selection() {
            self.selection_start
        } else {
            self.cursor().saturating_sub(1)
        };
        self.set_selection(target);
    }

    pub fn move_right(&mut self) {
        let target = if self.has_selection() { self.selection_end } else { self.cursor() + 1 };
        self.set_selection(target);
    }

    pub fn move_home(&mut self) {
        self.set_selection(0);
    }

    pub fn move_end(&mut self) {
        self.set_selection(self.len());
    }
}

/// Where `pos` lands after `[start, end)` is replaced by `inserted` chars.
fn shift_position(pos: usize, start: usize, end: usize, inserted: usize) -> usize {
    if pos <= start {
        pos
    } else if pos >= end {
        pos - (end - start) + inserted
    } else {
        start + inserted
    }
}

impl TextView for TextBuffer {
    fn text(&self) -> &str {
        &self.text
    }

    fn selection_start(&self) -> usize {
        self.selection_start
    }

    fn selection_end(&self) -> usize {
        self.selection_end
    }

    fn set_selection(&mut self, pos: usize) {
        let pos = pos.min(self.len());
        self.selection_start = pos;
        self.selection_end = pos;
    }

    fn replace_range(&mut self, start: usize, end: usize, replacement: &str) {
        let len = self.len();
        let end = end.min(len);
        let start = start.min(end);
        let from = char_to_byte_index(&self.text, start);
        let to = char_to_byte_index(&self.text, end);
        self.text.replace_range(from..to, replacement);

        let inserted = char_len(replacement);
        self.selection_start = shift_position(self.selection_start, start, end, inserted);
        self.selection_end = shift_position(self.selection_end, start, end, inserted);
        // Spans past the edit are stale until the next highlight pass
        self.highlights.retain(|h| h.end <= start);
    }

    fn apply_highlight(&mut self, start: usize, end: usize, color: Color) {
        self.highlights.push(Highlight { start, end, color });
    }

    fn clear_highlights(&mut self) {
        self.highlights.clear();
    }
}

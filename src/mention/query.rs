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

use super::config::DEFAULT_MAX_QUERY_LENGTH;
use crate::error::{MentionError, Result};
use crate::text::{char_len, char_to_byte_index, slice_chars};

/// Decides whether an `@query` is being typed at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDetector {
    max_query_length: usize,
}

impl QueryDetector {
    pub fn new(max_query_length: usize) -> Result<Self> {
        if max_query_length == 0 {
            return Err(MentionError::InvalidMaxQueryLength(max_query_length));
        }
        Ok(Self { max_query_length })
    }

    #[must_use]
    pub fn max_query_length(&self) -> usize {
        self.max_query_length
    }

    /// See [`detect_query`].
    #[must_use]
    pub fn detect(&self, text: &str, cursor: usize) -> Option<String> {
        detect_query(text, cursor, self.max_query_length)
    }
}

impl Default for QueryDetector {
    fn default() -> Self {
        Self { max_query_length: DEFAULT_MAX_QUERY_LENGTH }
    }
}

/// Detect an `@` query at character position `cursor`.
///
/// The query is the text after the last `@` up to the cursor, extended to the
/// right through the rest of the current word so a caret placed mid-word still
/// sees the whole word. It is rejected when longer than `max_query_length`,
/// when it starts with a non-alphanumeric character (`@!foo`, `@@foo`), or
/// when the `@` is glued to a preceding character (`name@domain`).
///
/// Returns `Some("")` right after a bare `@`.
#[must_use]
pub fn detect_query(text: &str, cursor: usize, max_query_length: usize) -> Option<String> {
    if text.is_empty() || !text.contains('@') {
        return None;
    }

    let (before, after) = text.split_at(char_to_byte_index(text, cursor));
    let remaining_word = after.split(' ').next().unwrap_or_default();
    let window = format!("{before}{remaining_word}");

    let last_at = window.rfind('@')?;
    let search = &window[last_at + 1..];

    if char_len(search) > max_query_length {
        return None;
    }
    if search.chars().next().is_some_and(|c| !c.is_alphanumeric()) {
        return None;
    }

    // `@` must open the text or follow whitespace
    let at_pos = before.rfind('@')?;
    let preceded_by_space = before[..at_pos].chars().next_back().is_some_and(char::is_whitespace);
    if at_pos == 0 || preceded_by_space { Some(search.to_owned()) } else { None }
}

/// True when the selection is a caret and the word ending at it starts with `@`.
#[must_use]
pub fn cursor_is_inside_at_word(text: &str, selection_start: usize, selection_end: usize) -> bool {
    if selection_start != selection_end || selection_start > char_len(text) {
        return false;
    }
    let before = slice_chars(text, 0, selection_start);
    let word = before.rsplit(' ').next().unwrap_or(before);
    word.starts_with('@')
}

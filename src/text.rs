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

//! Character-position helpers.
//!
//! All positions in this crate (cursor, mention offset, edit start) count
//! `char`s, not bytes. These helpers translate between the two.

/// Number of characters in `s`.
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Convert a character index to a byte index within a string.
/// Indices past the end clamp to `s.len()`.
#[must_use]
pub fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

/// Slice `s` by character columns `[start, end)`, clamped to the string.
#[must_use]
pub fn slice_chars(s: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let from = char_to_byte_index(s, start);
    let to = char_to_byte_index(s, end);
    &s[from..to]
}

/// True when `s` is empty or whitespace only.
#[must_use]
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

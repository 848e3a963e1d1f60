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

//! The text widget as seen by the mention engine.
//!
//! The host owns the real widget. The engine only borrows it through
//! [`TextView`] for the duration of a call, so any editable surface (a TUI
//! input, a GUI text field, the in-memory [`TextBuffer`]) can be plugged in.

mod buffer;

pub use buffer::TextBuffer;

use ratatui::style::Color;

/// A visual decoration over `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
    pub color: Color,
}

/// Capabilities the mention engine needs from an editable text widget.
///
/// Positions are character indices. `replace_range` must not report the edit
/// back to the engine: edits the engine makes itself are already reconciled.
pub trait TextView {
    fn text(&self) -> &str;
    fn selection_start(&self) -> usize;
    fn selection_end(&self) -> usize;
    /// Collapse the selection to a caret at `pos`.
    fn set_selection(&mut self, pos: usize);
    fn replace_range(&mut self, start: usize, end: usize, replacement: &str);
    fn apply_highlight(&mut self, start: usize, end: usize, color: Color);
    fn clear_highlights(&mut self);
}

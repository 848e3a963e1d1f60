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

use super::users::User;

/// Maximum candidates shown in the dropdown.
pub const MAX_VISIBLE: usize = 6;

/// Open suggestion dropdown for the current `@` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionState {
    /// Query text after the `@` (e.g. "Br" from "@Br").
    pub query: String,
    pub candidates: Vec<User>,
    /// Index into `candidates` of the highlighted item.
    pub selected: usize,
    /// Scroll offset for the dropdown (when candidates > max visible).
    pub scroll_offset: usize,
}

impl SuggestionState {
    pub fn new(query: String, candidates: Vec<User>) -> Self {
        Self { query, candidates, selected: 0, scroll_offset: 0 }
    }

    /// Swap in results for a new query, keeping the highlight where possible.
    pub fn update(&mut self, query: String, candidates: Vec<User>) {
        self.query = query;
        self.candidates = candidates;
        self.clamp();
    }

    #[must_use]
    pub fn selected_user(&self) -> Option<&User> {
        self.candidates.get(self.selected)
    }

    /// Move selection up (with wrap-around).
    pub fn move_up(&mut self) {
        if self.candidates.is_empty() {
            return;
        }
        if self.selected == 0 {
            self.selected = self.candidates.len() - 1;
        } else {
            self.selected -= 1;
        }
        self.clamp();
    }

    /// Move selection down (with wrap-around).
    pub fn move_down(&mut self) {
        if self.candidates.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.candidates.len();
        self.clamp();
    }

    /// `[start, end)` of the candidates currently on screen.
    #[must_use]
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.scroll_offset.min(self.candidates.len());
        let end = (start + MAX_VISIBLE).min(self.candidates.len());
        (start, end)
    }

    /// Keep `selected` in bounds and visible within the `MAX_VISIBLE` window.
    fn clamp(&mut self) {
        if self.candidates.is_empty() {
            self.selected = 0;
            self.scroll_offset = 0;
            return;
        }
        self.selected = self.selected.min(self.candidates.len() - 1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + MAX_VISIBLE {
            self.scroll_offset = self.selected + 1 - MAX_VISIBLE;
        }
        let max_start = self.candidates.len().saturating_sub(MAX_VISIBLE);
        self.scroll_offset = self.scroll_offset.min(max_start);
    }
}

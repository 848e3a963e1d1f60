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

use crate::error::{MentionError, Result};
use ratatui::style::Color;

/// Characters evaluated after `@` before a query stops being one.
pub const DEFAULT_MAX_QUERY_LENGTH: usize = 13;

/// Default mention highlight.
pub const ORANGE: Color = Color::Rgb(244, 118, 0);

/// Immutable mention settings. Reconfigure by deriving a new value with the
/// `with_*` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentionsConfig {
    pub max_query_length: usize,
    pub highlight_color: Color,
}

impl MentionsConfig {
    pub fn with_max_query_length(self, max_query_length: usize) -> Result<Self> {
        if max_query_length == 0 {
            return Err(MentionError::InvalidMaxQueryLength(max_query_length));
        }
        Ok(Self { max_query_length, ..self })
    }

    #[must_use]
    pub fn with_highlight_color(self, highlight_color: Color) -> Self {
        Self { highlight_color, ..self }
    }
}

impl Default for MentionsConfig {
    fn default() -> Self {
        Self { max_query_length: DEFAULT_MAX_QUERY_LENGTH, highlight_color: ORANGE }
    }
}

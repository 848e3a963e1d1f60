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

/// Programmer errors surfaced synchronously by the mention API.
///
/// Every variant is an invalid argument: the caller handed over something the
/// tracker cannot attach to the text. Drift between tracked spans and live text
/// is not an error; it is logged and healed inside the tracker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MentionError {
    #[error("mention name must not be blank")]
    BlankMentionName,
    #[error("mentions to add must not be empty")]
    EmptyMentionList,
    #[error("mentions cannot be added to blank text")]
    BlankText,
    #[error("mentions to add must be present in the text")]
    MentionsNotInText,
    #[error("maximum query length must be greater than 0, got {0}")]
    InvalidMaxQueryLength(usize),
}

impl MentionError {
    /// All variants belong to the invalid-argument class.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::BlankMentionName
                | Self::EmptyMentionList
                | Self::BlankText
                | Self::MentionsNotInText
                | Self::InvalidMaxQueryLength(_)
        )
    }
}

pub type Result<T, E = MentionError> = std::result::Result<T, E>;

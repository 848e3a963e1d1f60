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

mod config;
mod model;
mod query;
mod range;
mod tracker;

pub use config::{DEFAULT_MAX_QUERY_LENGTH, MentionsConfig, ORANGE};
pub use model::{Mention, TextEdit};
pub use query::{QueryDetector, cursor_is_inside_at_word, detect_query};
pub use range::Range;
pub use tracker::MentionTracker;

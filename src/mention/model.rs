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

use crate::text::char_len;
use serde::{Deserialize, Serialize};

/// A name attached to a span of the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mention {
    /// Display name, as it appears in the text.
    pub name: String,
    /// Character position of the first character of `name`.
    pub offset: usize,
    /// Character count of the span. Equals the name's length once attached.
    pub length: usize,
}

impl Mention {
    /// A mention not yet placed in any text; `insert` positions it.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), offset: 0, length: 0 }
    }

    /// A mention already present in the text at `offset`.
    pub fn at(name: impl Into<String>, offset: usize) -> Self {
        let name = name.into();
        let length = char_len(&name);
        Self { name, offset, length }
    }

    /// One past the last character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// A contiguous edit: `removed` characters starting at `start` were replaced
/// by `inserted` new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEdit {
    pub start: usize,
    pub removed: usize,
    pub inserted: usize,
}

impl TextEdit {
    pub fn new(start: usize, removed: usize, inserted: usize) -> Self {
        Self { start, removed, inserted }
    }

    pub fn insertion(start: usize, inserted: usize) -> Self {
        Self::new(start, 0, inserted)
    }

    pub fn deletion(start: usize, removed: usize) -> Self {
        Self::new(start, removed, 0)
    }

    /// Same-length replacements leave every later position where it was.
    #[must_use]
    pub fn preserves_length(&self) -> bool {
        self.removed == self.inserted
    }
}

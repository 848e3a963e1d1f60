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

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<T> {
    min: T,
    max: T,
}

impl<T: Ord + Copy> Range<T> {
    /// Build a range from two endpoints given in either order.
    #[must_use]
    pub fn between(a: T, b: T) -> Self {
        if a <= b { Self { min: a, max: b } } else { Self { min: b, max: a } }
    }

    #[must_use]
    pub fn min(&self) -> T {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> T {
        self.max
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether the two ranges share at least one point.
    ///
    /// Checking both of our endpoints against `other` plus `other.min` against
    /// us covers containment either way, partial overlap from either side and
    /// a single shared endpoint.
    #[must_use]
    pub fn is_overlapped_by(&self, other: &Self) -> bool {
        other.contains(self.min) || other.contains(self.max) || self.contains(other.min)
    }
}

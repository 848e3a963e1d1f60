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

//! Keeps inserted mention spans in step with the text they live in.
//!
//! Every reported edit either shifts a mention (edit before it), drops it
//! (edit touching its interior), or leaves it alone (edit after it). After
//! each change the highlight pass re-checks every span against the live
//! text and drops the ones that drifted.

use super::config::ORANGE;
use super::model::{Mention, TextEdit};
use super::range::Range;
use crate::error::{MentionError, Result};
use crate::text::{char_len, is_blank, slice_chars};
use crate::view::TextView;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionTracker {
    mentions: Vec<Mention>,
    highlight_color: Color,
}

impl MentionTracker {
    pub fn new(highlight_color: Color) -> Self {
        Self { mentions: Vec::new(), highlight_color }
    }

    /// Tracked mentions in insertion order.
    #[must_use]
    pub fn mentions(&self) -> &[Mention] {
        &self.mentions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mentions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mentions.is_empty()
    }

    #[must_use]
    pub fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    /// Takes effect on the next highlight pass.
    pub fn set_highlight_color(&mut self, color: Color) {
        self.highlight_color = color;
    }

    pub fn clear(&mut self) {
        self.mentions.clear();
    }

    /// Replace the `@query` before the caret with `mention.name` plus a space,
    /// then track and highlight the new span.
    ///
    /// With no `@` before the caret the name is inserted at the caret.
    pub fn insert<V: TextView + ?Sized>(&mut self, view: &mut V, mut mention: Mention) -> Result<()> {
        if is_blank(&mention.name) {
            return Err(MentionError::BlankMentionName);
        }
        let name_len = char_len(&mention.name);
        mention.length = name_len;

        let (start, cursor) = {
            let text = view.text();
            let cursor = view.selection_end().min(char_len(text));
            let before = slice_chars(text, 0, cursor);
            let start = before.rfind('@').map_or(cursor, |at| char_len(&before[..at]));
            (start, cursor)
        };

        // Delete then insert, reconciled in that order like two widget edits
        view.replace_range(start, cursor, "");
        self.reconcile(TextEdit::deletion(start, cursor - start));
        view.replace_range(start, start, &format!("{} ", mention.name));
        self.reconcile(TextEdit::insertion(start, name_len + 1));
        view.set_selection(start + name_len + 1);

        mention.offset = start;
        tracing::debug!(name = %mention.name, offset = start, "mention inserted");
        self.mentions.push(mention);
        self.highlight(view);
        Ok(())
    }

    /// Register mentions already present in the view's text.
    pub fn add_mentions<V: TextView + ?Sized>(
        &mut self,
        view: &mut V,
        mentions: Vec<Mention>,
    ) -> Result<()> {
        if mentions.is_empty() {
            return Err(MentionError::EmptyMentionList);
        }
        if is_blank(view.text()) {
            return Err(MentionError::BlankText);
        }
        if !Self::text_has_mentions(view.text(), &mentions) {
            return Err(MentionError::MentionsNotInText);
        }
        self.mentions.extend(mentions);
        self.highlight(view);
        Ok(())
    }

    /// Whether every mention's `[offset, offset + length)` slice of `text` is
    /// non-blank and equal to its name.
    #[must_use]
    pub fn text_has_mentions(text: &str, mentions: &[Mention]) -> bool {
        let text_len = char_len(text);
        mentions.iter().all(|m| {
            if m.end() > text_len {
                return false;
            }
            let shown = slice_chars(text, m.offset, m.end());
            !is_blank(shown) && shown == m.name
        })
    }

    /// Bring tracked spans up to date with one edit.
    ///
    /// An edit overlapping a mention's interior `[offset + 1, end - 1]` drops
    /// it; an edit starting at or before its offset shifts it by the length
    /// delta. Same-length replacements are ignored entirely, even inside a
    /// mention; the highlight pass catches those.
    pub fn reconcile(&mut self, edit: TextEdit) {
        if self.mentions.is_empty() || edit.preserves_length() {
            return;
        }
        let edit_range = Range::between(edit.start, edit.start + edit.removed);
        self.mentions.retain_mut(|mention| {
            let interior = Range::between(mention.offset + 1, mention.end().saturating_sub(1));
            if edit_range.is_overlapped_by(&interior) {
                tracing::debug!(name = %mention.name, offset = mention.offset, "edit inside mention");
                return false;
            }
            if edit.start <= mention.offset {
                let old_offset = mention.offset;
                mention.offset = (old_offset + edit.inserted).saturating_sub(edit.removed);
                tracing::debug!(
                    name = %mention.name,
                    old_offset,
                    new_offset = mention.offset,
                    "mention shifted"
                );
            }
            true
        });
    }

    /// Forget every mention when the whole non-blank `text_before` is being
    /// replaced by nothing (e.g. the host clearing the field after sending).
    pub fn check_if_programmatically_cleared(&mut self, text_before: &str, edit: TextEdit) {
        if !is_blank(text_before)
            && edit.start == 0
            && edit.removed == char_len(text_before)
            && edit.inserted == 0
        {
            tracing::debug!(dropped = self.mentions.len(), "text cleared");
            self.mentions.clear();
        }
    }

    /// Re-apply highlights, dropping mentions whose span no longer shows their name.
    pub fn highlight<V: TextView + ?Sized>(&mut self, view: &mut V) {
        view.clear_highlights();
        let color = self.highlight_color;
        self.mentions.retain(|mention| {
            let text = view.text();
            let intact = mention.end() <= char_len(text)
                && slice_chars(text, mention.offset, mention.end()) == mention.name;
            if intact {
                view.apply_highlight(mention.offset, mention.end(), color);
            } else {
                tracing::warn!(name = %mention.name, offset = mention.offset, "mention lost");
            }
            intact
        });
    }
}

impl Default for MentionTracker {
    fn default() -> Self {
        Self::new(ORANGE)
    }
}

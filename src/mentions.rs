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

//! Host-facing entry point: wires widget change notifications to query
//! detection and mention tracking, and reports back through two listeners.
//!
//! A host forwards each edit of its text widget in three steps, in order:
//! [`Mentions::before_change`], [`Mentions::after_range_edited`],
//! [`Mentions::after_change_settled`] (or all at once with
//! [`Mentions::apply_edit`]). When the user picks a suggestion it calls
//! [`Mentions::insert_mention`].

use crate::error::Result;
use crate::mention::{
    Mention, MentionTracker, MentionsConfig, QueryDetector, TextEdit, cursor_is_inside_at_word,
};
use crate::text::is_blank;
use crate::view::TextView;
use ratatui::style::Color;

type QueryListener = Box<dyn FnMut(&str)>;
type SuggestionsListener = Box<dyn FnMut(bool)>;

#[derive(Default)]
pub struct MentionsBuilder {
    config: MentionsConfig,
    on_query: Option<QueryListener>,
    on_suggestions_visibility_changed: Option<SuggestionsListener>,
}

impl MentionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: MentionsConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Characters after `@` still treated as a query. Must be > 0.
    pub fn max_query_length(mut self, max_query_length: usize) -> Result<Self> {
        self.config = self.config.with_max_query_length(max_query_length)?;
        Ok(self)
    }

    #[must_use]
    pub fn highlight_color(mut self, color: Color) -> Self {
        self.config = self.config.with_highlight_color(color);
        self
    }

    /// Called with every non-blank query detected after an edit.
    #[must_use]
    pub fn on_query(mut self, listener: impl FnMut(&str) + 'static) -> Self {
        self.on_query = Some(Box::new(listener));
        self
    }

    /// Called with `false` when the suggestion list should close: the query
    /// went away or a mention was just inserted.
    #[must_use]
    pub fn on_suggestions_visibility_changed(mut self, listener: impl FnMut(bool) + 'static) -> Self {
        self.on_suggestions_visibility_changed = Some(Box::new(listener));
        self
    }

    /// Fails when the config carries a zero `max_query_length`.
    pub fn build(self) -> Result<Mentions> {
        let detector = QueryDetector::new(self.config.max_query_length)?;
        Ok(Mentions {
            detector,
            tracker: MentionTracker::new(self.config.highlight_color),
            config: self.config,
            on_query: self.on_query,
            on_suggestions_visibility_changed: self.on_suggestions_visibility_changed,
        })
    }
}

pub struct Mentions {
    config: MentionsConfig,
    detector: QueryDetector,
    tracker: MentionTracker,
    on_query: Option<QueryListener>,
    on_suggestions_visibility_changed: Option<SuggestionsListener>,
}

impl Mentions {
    pub fn builder() -> MentionsBuilder {
        MentionsBuilder::new()
    }

    #[must_use]
    pub fn config(&self) -> MentionsConfig {
        self.config
    }

    pub fn set_max_query_length(&mut self, max_query_length: usize) -> Result<MentionsConfig> {
        let config = self.config.with_max_query_length(max_query_length)?;
        self.detector = QueryDetector::new(max_query_length)?;
        self.config = config;
        Ok(config)
    }

    pub fn set_highlight_color(&mut self, color: Color) -> MentionsConfig {
        self.config = self.config.with_highlight_color(color);
        self.tracker.set_highlight_color(color);
        self.config
    }

    /// Copy of the mentions currently in the text.
    #[must_use]
    pub fn inserted_mentions(&self) -> Vec<Mention> {
        self.tracker.mentions().to_vec()
    }

    /// Before the widget applies `edit` to `text_before`.
    pub fn before_change(&mut self, text_before: &str, edit: TextEdit) {
        self.tracker.check_if_programmatically_cleared(text_before, edit);
    }

    /// Right after the widget applied `edit`.
    pub fn after_range_edited<V: TextView + ?Sized>(&mut self, view: &mut V, edit: TextEdit) {
        self.tracker.reconcile(edit);
        self.tracker.highlight(view);
    }

    /// Once the edit has settled: look for a query at the caret.
    pub fn after_change_settled<V: TextView + ?Sized>(&mut self, view: &V) {
        let query = self.detector.detect(view.text(), view.selection_start());
        self.query_received(query.as_deref());
    }

    /// All three notifications for an edit the host already applied to `view`.
    pub fn apply_edit<V: TextView + ?Sized>(&mut self, view: &mut V, text_before: &str, edit: TextEdit) {
        self.before_change(text_before, edit);
        self.after_range_edited(view, edit);
        self.after_change_settled(view);
    }

    /// The user placed the caret somewhere: reopen suggestions when it sits
    /// in an `@` word.
    pub fn on_click<V: TextView + ?Sized>(&mut self, view: &V) {
        if cursor_is_inside_at_word(view.text(), view.selection_start(), view.selection_end()) {
            self.after_change_settled(view);
        }
    }

    /// Insert the chosen suggestion and close the suggestion list.
    pub fn insert_mention<V: TextView + ?Sized>(&mut self, view: &mut V, mention: Mention) -> Result<()> {
        self.tracker.insert(view, mention)?;
        self.notify_suggestions_visibility(false);
        Ok(())
    }

    /// Register mentions the text already contains.
    pub fn add_mentions<V: TextView + ?Sized>(
        &mut self,
        view: &mut V,
        mentions: Vec<Mention>,
    ) -> Result<()> {
        self.tracker.add_mentions(view, mentions)
    }

    fn query_received(&mut self, query: Option<&str>) {
        if let Some(query) = query.filter(|q| !is_blank(q))
            && let Some(listener) = self.on_query.as_mut()
        {
            listener(query);
            return;
        }
        self.notify_suggestions_visibility(false);
    }

    fn notify_suggestions_visibility(&mut self, visible: bool) {
        if let Some(listener) = self.on_suggestions_visibility_changed.as_mut() {
            listener(visible);
        }
    }
}

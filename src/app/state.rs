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

use super::suggestions::SuggestionState;
use super::users::UserDirectory;
use crate::error::Result;
use crate::mention::{Mention, MentionsConfig, TextEdit};
use crate::mentions::{Mentions, MentionsBuilder};
use crate::text::is_blank;
use crate::view::{TextBuffer, TextView};
use serde::Serialize;
use tokio::sync::mpsc;

/// What the mention listeners report back to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentionEvent {
    Query(String),
    SuggestionsVisible(bool),
}

/// A posted comment with the mentions it carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub text: String,
    pub mentions: Vec<Mention>,
}

pub struct App {
    pub input: TextBuffer,
    pub mentions: Mentions,
    pub users: UserDirectory,
    /// Open dropdown, if any.
    pub suggestions: Option<SuggestionState>,
    pub comments: Vec<Comment>,
    pub should_quit: bool,
    pub event_rx: mpsc::UnboundedReceiver<MentionEvent>,
}

impl App {
    pub fn new(users: UserDirectory, config: MentionsConfig) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let query_tx = event_tx.clone();
        let mentions = MentionsBuilder::from_config(config)
            .on_query(move |query| {
                let _ = query_tx.send(MentionEvent::Query(query.to_owned()));
            })
            .on_suggestions_visibility_changed(move |visible| {
                let _ = event_tx.send(MentionEvent::SuggestionsVisible(visible));
            })
            .build()?;

        Ok(Self {
            input: TextBuffer::new(),
            mentions,
            users,
            suggestions: None,
            comments: Vec::new(),
            should_quit: false,
            event_rx,
        })
    }

    /// Run an input edit through the mention engine. `edit` is `None` when the
    /// buffer did not change.
    pub fn apply_input_edit(&mut self, text_before: &str, edit: Option<TextEdit>) {
        if let Some(edit) = edit {
            self.mentions.apply_edit(&mut self.input, text_before, edit);
        }
    }

    /// Post the current input as a comment and clear the field.
    /// Blank input is ignored.
    pub fn submit_comment(&mut self) -> bool {
        if is_blank(self.input.text()) {
            return false;
        }
        let text = self.input.text().to_owned();
        self.comments.push(Comment { text: text.clone(), mentions: self.mentions.inserted_mentions() });
        let edit = self.input.clear();
        self.apply_input_edit(&text, edit);
        true
    }

    /// Insert the highlighted suggestion as a mention.
    pub fn confirm_suggestion(&mut self) {
        let Some(suggestions) = self.suggestions.take() else {
            return;
        };
        let Some(user) = suggestions.selected_user() else {
            return;
        };
        if let Err(e) = self.mentions.insert_mention(&mut self.input, Mention::new(user.full_name())) {
            tracing::error!("failed to insert mention: {e}");
        }
    }
}

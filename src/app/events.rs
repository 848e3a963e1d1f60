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

use super::state::{App, MentionEvent};
use super::suggestions::SuggestionState;
use crate::mention::TextEdit;
use crate::view::{TextBuffer, TextView};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_terminal_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if app.suggestions.is_some() {
                handle_suggestion_key(app, key);
            } else {
                handle_normal_key(app, key);
            }
        }
        Event::Paste(text) => {
            // The comment box is a single line
            let flat = text.replace(['\r', '\n'], " ");
            edit_input(app, |input| input.insert_str(&flat));
        }
        // Resize is handled automatically by ratatui
        _ => {}
    }
}

/// Apply what the mention listeners reported since the last call.
pub fn drain_mention_events(app: &mut App) {
    while let Ok(event) = app.event_rx.try_recv() {
        handle_mention_event(app, event);
    }
}

fn handle_mention_event(app: &mut App, event: MentionEvent) {
    match event {
        MentionEvent::Query(query) => {
            let candidates = app.users.search(&query);
            if candidates.is_empty() {
                app.suggestions = None;
            } else if let Some(ref mut suggestions) = app.suggestions {
                suggestions.update(query, candidates);
            } else {
                app.suggestions = Some(SuggestionState::new(query, candidates));
            }
        }
        MentionEvent::SuggestionsVisible(false) => app.suggestions = None,
        // Only a query can open the dropdown
        MentionEvent::SuggestionsVisible(true) => {}
    }
}

fn edit_input(app: &mut App, edit: impl FnOnce(&mut TextBuffer) -> Option<TextEdit>) {
    let before = app.input.text().to_owned();
    let edit = edit(&mut app.input);
    app.apply_input_edit(&before, edit);
}

/// Caret moved without editing: close the dropdown unless the caret landed in
/// an `@` word, in which case the query is re-detected.
fn move_caret(app: &mut App, movement: impl FnOnce(&mut TextBuffer)) {
    movement(&mut app.input);
    app.suggestions = None;
    app.mentions.on_click(&app.input);
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c' | 'q'), m) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        (KeyCode::Enter, _) => {
            app.submit_comment();
        }
        // Navigation
        (KeyCode::Left, _) => move_caret(app, TextBuffer::move_left),
        (KeyCode::Right, _) => move_caret(app, TextBuffer::move_right),
        (KeyCode::Home, _) => move_caret(app, TextBuffer::move_home),
        (KeyCode::End, _) => move_caret(app, TextBuffer::move_end),
        // Editing
        (KeyCode::Backspace, _) => edit_input(app, TextBuffer::delete_char_before),
        (KeyCode::Delete, _) => edit_input(app, TextBuffer::delete_char_after),
        (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
            edit_input(app, |input| input.insert_char(c));
        }
        _ => {}
    }
}

/// Handle keystrokes while the suggestion dropdown is open.
fn handle_suggestion_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Up, _) => {
            if let Some(ref mut suggestions) = app.suggestions {
                suggestions.move_up();
            }
        }
        (KeyCode::Down, _) => {
            if let Some(ref mut suggestions) = app.suggestions {
                suggestions.move_down();
            }
        }
        (KeyCode::Enter | KeyCode::Tab, _) => app.confirm_suggestion(),
        (KeyCode::Esc, _) => app.suggestions = None,
        // Everything else edits the text as usual
        _ => handle_normal_key(app, key),
    }
}

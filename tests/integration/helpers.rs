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


use at_mentions::app::{App, User, UserDirectory, drain_mention_events, handle_terminal_event};
use at_mentions::{Mentions, MentionsBuilder, MentionsConfig, TextBuffer, TextView};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::rc::Rc;

/// Listener output captured by [`recording_mentions`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Recorded {
    pub queries: Vec<String>,
    pub visibility: Vec<bool>,
}

pub fn recording_mentions(builder: MentionsBuilder) -> (Mentions, Rc<RefCell<Recorded>>) {
    let recorded = Rc::new(RefCell::new(Recorded::default()));
    let queries = Rc::clone(&recorded);
    let visibility = Rc::clone(&recorded);
    let mentions = builder
        .on_query(move |q| queries.borrow_mut().queries.push(q.to_owned()))
        .on_suggestions_visibility_changed(move |v| visibility.borrow_mut().visibility.push(v))
        .build()
        .unwrap();
    (mentions, recorded)
}

/// Type `s` one character at a time, forwarding each edit.
pub fn type_into(mentions: &mut Mentions, buf: &mut TextBuffer, s: &str) {
    for c in s.chars() {
        let before = buf.text().to_owned();
        if let Some(edit) = buf.insert_char(c) {
            mentions.apply_edit(buf, &before, edit);
        }
    }
}

pub fn backspace(mentions: &mut Mentions, buf: &mut TextBuffer, times: usize) {
    for _ in 0..times {
        let before = buf.text().to_owned();
        if let Some(edit) = buf.delete_char_before() {
            mentions.apply_edit(buf, &before, edit);
        }
    }
}

pub fn directory() -> UserDirectory {
    UserDirectory::new(vec![
        User::new("Brent", "Watson"),
        User::new("Doug", "Tabuchi"),
        User::new("Brianna", "Doe"),
        User::new("Walter", "Brennan"),
    ])
}

pub fn test_app() -> App {
    App::new(directory(), MentionsConfig::default()).unwrap()
}

pub fn press(app: &mut App, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE);
}

pub fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    handle_terminal_event(app, Event::Key(KeyEvent::new(code, modifiers)));
    drain_mention_events(app);
}

pub fn type_keys(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

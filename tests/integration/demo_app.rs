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


// Demo comment box: key handling, rendering and startup from CLI options.

use at_mentions::app::{App, User, create_app};
use at_mentions::{Cli, Mention, MentionError, MentionsConfig, TextView};
use clap::Parser;
use crossterm::event::{KeyCode, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use std::io::Write as _;

use crate::helpers::{directory, press, press_with, test_app, type_keys};

fn render_frame_to_string(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("create test terminal");
    terminal.draw(|f| at_mentions::ui::render(f, app)).expect("draw frame");

    let mut out = String::new();
    let buffer = terminal.backend().buffer();
    for y in 0..height {
        for x in 0..width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn candidate_names(app: &App) -> Vec<String> {
    app.suggestions
        .as_ref()
        .map(|s| s.candidates.iter().map(User::full_name).collect())
        .unwrap_or_default()
}

// --- Key handling ---

#[test]
fn full_comment_with_two_mentions() {
    let mut app = test_app();
    type_keys(&mut app, "Thanks @wal");
    assert_eq!(candidate_names(&app), vec!["Walter Brennan".to_owned()]);
    press(&mut app, KeyCode::Tab);
    type_keys(&mut app, "and @bre");
    assert_eq!(
        candidate_names(&app),
        vec!["Brent Watson".to_owned(), "Walter Brennan".to_owned()]
    );
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Backspace);
    type_keys(&mut app, "!");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.comments.len(), 1);
    assert_eq!(app.comments[0].text, "Thanks Walter Brennan and Brent Watson!");
    assert_eq!(
        app.comments[0].mentions,
        vec![Mention::at("Walter Brennan", 7), Mention::at("Brent Watson", 26)]
    );
}

#[test]
fn up_wraps_to_last_candidate() {
    let mut app = test_app();
    type_keys(&mut app, "@b");
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input.text(), "Walter Brennan ");
}

#[test]
fn deleting_forward_into_mention_drops_it() {
    let mut app = test_app();
    type_keys(&mut app, "@dou");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Home);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Delete);

    assert_eq!(app.input.text(), "Dug Tabuchi ");
    assert!(app.mentions.inserted_mentions().is_empty());
}

#[test]
fn ctrl_c_quits_even_with_suggestions_open() {
    let mut app = test_app();
    type_keys(&mut app, "@b");
    assert!(app.suggestions.is_some());
    press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.should_quit);
}

// --- Rendering ---

#[test]
fn empty_app_shows_placeholders() {
    let app = test_app();
    let frame = render_frame_to_string(&app, 60, 12);
    assert!(frame.contains("No comments yet"));
    assert!(frame.contains("Write a comment"));
    assert!(frame.contains("Ctrl+Q"));
}

#[test]
fn open_suggestions_render_as_dropdown() {
    let mut app = test_app();
    type_keys(&mut app, "Hi @br");
    let frame = render_frame_to_string(&app, 60, 14);
    assert!(frame.contains("People (3)"));
    assert!(frame.contains("Brent Watson"));
    assert!(frame.contains("Brianna Doe"));
    assert!(frame.contains("Walter Brennan"));
    assert!(frame.contains("Esc"));
}

#[test]
fn posted_comment_is_rendered() {
    let mut app = test_app();
    type_keys(&mut app, "Ping @doug");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);

    let frame = render_frame_to_string(&app, 60, 12);
    assert!(frame.contains("Ping Doug Tabuchi"));
    assert!(!frame.contains("No comments yet"));
}

// --- Startup ---

#[test]
fn create_app_loads_directory_and_limits_queries() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"first_name":"Brent","last_name":"Watson"}}]"#).unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let cli = Cli::parse_from(["mentions-demo", "--users", path.as_str(), "--max-query-length", "2"]);
    let mut app = create_app(&cli).unwrap();
    assert_eq!(app.users.len(), 1);
    assert_eq!(app.mentions.config().max_query_length, 2);

    type_keys(&mut app, "@br");
    assert_eq!(candidate_names(&app), vec!["Brent Watson".to_owned()]);
    type_keys(&mut app, "e");
    assert!(app.suggestions.is_none());
}

#[test]
fn create_app_rejects_zero_query_length_and_missing_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[]").unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let cli = Cli::parse_from(["mentions-demo", "--users", path.as_str(), "--max-query-length", "0"]);
    assert!(create_app(&cli).is_err());

    let cli = Cli::parse_from(["mentions-demo", "--users", "/definitely/not/here.json"]);
    assert!(create_app(&cli).is_err());
}

#[test]
fn app_rejects_zero_query_length_config() {
    let config = MentionsConfig { max_query_length: 0, ..MentionsConfig::default() };
    let result = App::new(directory(), config);
    assert!(matches!(result, Err(MentionError::InvalidMaxQueryLength(0))));
}

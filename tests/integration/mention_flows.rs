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


// End-to-end mention tracking through the public facade and `TextBuffer`.

use at_mentions::{
    Highlight, Mention, MentionError, MentionTracker, Mentions, MentionsConfig, TextBuffer,
    TextView,
};
use pretty_assertions::assert_eq;
use ratatui::style::Color;

use crate::helpers::{backspace, recording_mentions, type_into};

fn prepopulated(text: &str, mentions: Vec<Mention>) -> (Mentions, TextBuffer) {
    let mut facade = Mentions::builder().build().unwrap();
    let mut buf = TextBuffer::with_text(text);
    facade.add_mentions(&mut buf, mentions).unwrap();
    (facade, buf)
}

fn spans(buf: &TextBuffer) -> Vec<(usize, usize)> {
    buf.highlights().iter().map(|h| (h.start, h.end)).collect()
}

// --- Reconcile through real edits ---

#[test]
fn typing_inside_mention_removes_it() {
    let (mut facade, mut buf) =
        prepopulated("Hello Brent Watson", vec![Mention::at("Brent Watson", 6)]);
    buf.set_selection(17);
    let before = buf.text().to_owned();
    let edit = buf.insert_str("Test").unwrap();
    facade.apply_edit(&mut buf, &before, edit);

    assert_eq!(buf.text(), "Hello Brent WatsoTestn");
    assert!(facade.inserted_mentions().is_empty());
    assert!(buf.highlights().is_empty());
}

#[test]
fn typing_right_before_mention_shifts_it() {
    let (mut facade, mut buf) =
        prepopulated("Hello Brent Watson", vec![Mention::at("Brent Watson", 6)]);
    buf.set_selection(6);
    let before = buf.text().to_owned();
    let edit = buf.insert_str("Test").unwrap();
    facade.apply_edit(&mut buf, &before, edit);

    assert_eq!(buf.text(), "Hello TestBrent Watson");
    assert_eq!(facade.inserted_mentions(), vec![Mention::at("Brent Watson", 10)]);
    assert_eq!(spans(&buf), vec![(10, 22)]);
}

#[test]
fn replacing_selection_before_mention_shifts_by_delta() {
    let (mut facade, mut buf) = prepopulated("ab Brent Watson", vec![Mention::at("Brent Watson", 3)]);
    buf.select(0, 2);
    let before = buf.text().to_owned();
    let edit = buf.insert_str("xyz").unwrap();
    facade.apply_edit(&mut buf, &before, edit);

    assert_eq!(facade.inserted_mentions(), vec![Mention::at("Brent Watson", 4)]);
}

#[test]
fn same_length_replacement_inside_mention_is_caught_by_highlight() {
    let (mut facade, mut buf) =
        prepopulated("Hello Brent Watson", vec![Mention::at("Brent Watson", 6)]);
    buf.select(7, 8);
    let before = buf.text().to_owned();
    let edit = buf.insert_str("X").unwrap();
    facade.apply_edit(&mut buf, &before, edit);

    assert_eq!(buf.text(), "Hello BXent Watson");
    assert!(facade.inserted_mentions().is_empty());
}

#[test]
fn typing_after_mention_leaves_it_alone() {
    let (mut facade, mut buf) =
        prepopulated("Hello Brent Watson", vec![Mention::at("Brent Watson", 6)]);
    type_into(&mut facade, &mut buf, "!");
    assert_eq!(facade.inserted_mentions(), vec![Mention::at("Brent Watson", 6)]);
    assert_eq!(spans(&buf), vec![(6, 18)]);
}

// --- Insertion ---

#[test]
fn insert_replaces_query_with_name() {
    let mut facade = Mentions::builder().build().unwrap();
    let mut buf = TextBuffer::with_text("Hello @Br");
    facade.insert_mention(&mut buf, Mention::new("Brent Watson")).unwrap();

    assert_eq!(buf.text(), "Hello Brent Watson ");
    assert_eq!(buf.cursor(), 19);
    let mentions = facade.inserted_mentions();
    assert_eq!(mentions.len(), 1);
    assert_eq!((mentions[0].offset, mentions[0].length), (6, 12));
    assert_eq!(
        buf.highlights(),
        &[Highlight { start: 6, end: 18, color: at_mentions::mention::ORANGE }]
    );
}

#[test]
fn two_mentions_typed_and_inserted() {
    let mut facade = Mentions::builder().build().unwrap();
    let mut buf = TextBuffer::new();
    type_into(&mut facade, &mut buf, "Hi @Br");
    facade.insert_mention(&mut buf, Mention::new("Brent Watson")).unwrap();
    type_into(&mut facade, &mut buf, "and @do");
    facade.insert_mention(&mut buf, Mention::new("Doug Tabuchi")).unwrap();

    assert_eq!(buf.text(), "Hi Brent Watson and Doug Tabuchi ");
    assert_eq!(
        facade.inserted_mentions(),
        vec![Mention::at("Brent Watson", 3), Mention::at("Doug Tabuchi", 20)]
    );
    assert_eq!(spans(&buf), vec![(3, 15), (20, 32)]);
}

#[test]
fn backspace_into_first_mention_drops_only_that_one() {
    let (mut facade, mut buf) = prepopulated(
        "Hi Brent Watson and Doug Tabuchi ",
        vec![Mention::at("Brent Watson", 3), Mention::at("Doug Tabuchi", 20)],
    );
    buf.set_selection(8);
    backspace(&mut facade, &mut buf, 1);

    assert_eq!(facade.inserted_mentions(), vec![Mention::at("Doug Tabuchi", 19)]);
    assert_eq!(spans(&buf), vec![(19, 31)]);
}

#[test]
fn insert_counts_characters_not_bytes() {
    let mut facade = Mentions::builder().build().unwrap();
    let mut buf = TextBuffer::with_text("Zoë @jo");
    facade.insert_mention(&mut buf, Mention::new("Jo Ann")).unwrap();

    assert_eq!(buf.text(), "Zoë Jo Ann ");
    assert_eq!(facade.inserted_mentions(), vec![Mention::at("Jo Ann", 4)]);
}

#[test]
fn blank_name_is_rejected_without_touching_text() {
    let mut facade = Mentions::builder().build().unwrap();
    let mut buf = TextBuffer::with_text("Hello @Br");
    let err = facade.insert_mention(&mut buf, Mention::new("   ")).unwrap_err();
    assert_eq!(err, MentionError::BlankMentionName);
    assert!(err.is_invalid_argument());
    assert_eq!(buf.text(), "Hello @Br");
}

// --- Pre-population ---

#[test]
fn add_mentions_validates_input() {
    let mut facade = Mentions::builder().build().unwrap();
    let mut buf = TextBuffer::with_text("Hi Brent Watson");
    assert_eq!(facade.add_mentions(&mut buf, Vec::new()), Err(MentionError::EmptyMentionList));
    assert_eq!(
        facade.add_mentions(&mut buf, vec![Mention::at("Doug Tabuchi", 3)]),
        Err(MentionError::MentionsNotInText)
    );

    let mut blank = TextBuffer::with_text("  ");
    assert_eq!(
        facade.add_mentions(&mut blank, vec![Mention::at("Brent Watson", 0)]),
        Err(MentionError::BlankText)
    );
    assert!(facade.inserted_mentions().is_empty());
}

#[test]
fn add_mentions_accepts_mentions_past_the_start() {
    let (facade, buf) = prepopulated(
        "Hi Brent Watson and Doug Tabuchi",
        vec![Mention::at("Brent Watson", 3), Mention::at("Doug Tabuchi", 20)],
    );
    assert_eq!(facade.inserted_mentions().len(), 2);
    assert_eq!(spans(&buf), vec![(3, 15), (20, 32)]);
}

#[test]
fn clearing_the_field_forgets_everything() {
    let (mut facade, mut buf) =
        prepopulated("Hello Brent Watson", vec![Mention::at("Brent Watson", 6)]);
    let before = buf.text().to_owned();
    let edit = buf.clear().unwrap();
    facade.apply_edit(&mut buf, &before, edit);
    assert!(facade.inserted_mentions().is_empty());
}

// --- Highlight pass ---

#[test]
fn highlight_is_idempotent() {
    let mut tracker = MentionTracker::new(Color::Cyan);
    let mut buf = TextBuffer::with_text("Hello Brent Watson and Doug Tabuchi");
    tracker
        .add_mentions(&mut buf, vec![Mention::at("Brent Watson", 6), Mention::at("Doug Tabuchi", 23)])
        .unwrap();

    tracker.highlight(&mut buf);
    let (first_mentions, first_spans) = (tracker.mentions().to_vec(), buf.highlights().to_vec());
    tracker.highlight(&mut buf);
    assert_eq!(tracker.mentions(), first_mentions.as_slice());
    assert_eq!(buf.highlights(), first_spans.as_slice());
}

#[test]
fn highlight_color_change_applies_on_next_pass() {
    let mut facade = Mentions::builder().highlight_color(Color::Blue).build().unwrap();
    let mut buf = TextBuffer::with_text("Hello Brent Watson");
    facade.add_mentions(&mut buf, vec![Mention::at("Brent Watson", 6)]).unwrap();
    assert_eq!(buf.highlights()[0].color, Color::Blue);

    facade.set_highlight_color(Color::Green);
    type_into(&mut facade, &mut buf, "!");
    assert_eq!(buf.highlights()[0].color, Color::Green);
}

// --- Listeners ---

#[test]
fn listeners_follow_typing() {
    let (mut facade, recorded) =
        recording_mentions(Mentions::builder().max_query_length(3).unwrap());
    let mut buf = TextBuffer::new();
    type_into(&mut facade, &mut buf, "@Bren");

    let recorded = recorded.borrow();
    assert_eq!(recorded.queries, vec!["B".to_owned(), "Br".to_owned(), "Bre".to_owned()]);
    // bare "@" and the over-long "Bren"
    assert_eq!(recorded.visibility, vec![false, false]);
}

#[test]
fn config_round_trips_through_facade() {
    let facade = Mentions::builder().max_query_length(5).unwrap().build().unwrap();
    assert_eq!(
        facade.config(),
        MentionsConfig::default().with_max_query_length(5).unwrap()
    );
}

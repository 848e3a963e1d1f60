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


//! Tracks `@mentions` inside an editable text field.
//!
//! [`Mentions`] is the entry point: a host forwards the edits of its text
//! widget (anything implementing [`TextView`]) and gets told when an `@query`
//! is being typed and when the suggestion list should close. Chosen
//! suggestions are inserted with [`Mentions::insert_mention`] and stay
//! tracked while the surrounding text changes.
//!
//! The `mentions-demo` binary is a terminal comment box built on top of it.

pub mod app;
pub mod error;
pub mod mention;
pub mod mentions;
pub mod text;
pub mod ui;
pub mod view;

pub use error::{MentionError, Result};
pub use mention::{Mention, MentionTracker, MentionsConfig, QueryDetector, Range, TextEdit};
pub use mentions::{Mentions, MentionsBuilder};
pub use view::{Highlight, TextBuffer, TextView};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mentions-demo", about = "Comment box with @mention suggestions")]
pub struct Cli {
    /// JSON array of users that can be mentioned
    #[arg(long)]
    pub users: std::path::PathBuf,

    /// Longest `@query` that still opens suggestions
    #[arg(long)]
    pub max_query_length: Option<usize>,

    /// Write tracing diagnostics to this file
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (falls back to RUST_LOG, then `info`)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,

    /// Print posted comments as JSON after exiting
    #[arg(long)]
    pub dump_comments: bool,
}

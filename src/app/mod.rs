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

mod events;
mod state;
mod suggestions;
mod users;

pub use events::{drain_mention_events, handle_terminal_event};
pub use state::{App, Comment, MentionEvent};
pub use suggestions::{MAX_VISIBLE, SuggestionState};
pub use users::{User, UserDirectory, UserDirectoryError};

use crate::Cli;
use crate::mention::MentionsConfig;
use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};
use std::time::{Duration, Instant};

/// Build the demo app from CLI options: load the directory, apply the
/// query length limit.
pub fn create_app(cli: &Cli) -> anyhow::Result<App> {
    let users = UserDirectory::load(&cli.users)?;
    let mut config = MentionsConfig::default();
    if let Some(max) = cli.max_query_length {
        config = config.with_max_query_length(max)?;
    }
    tracing::debug!(max_query_length = config.max_query_length, "mentions configured");
    Ok(App::new(users, config)?)
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run_tui(app: &mut App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Bracketed paste delivers multi-line clipboard text as one event
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableBracketedPaste);

    let mut events = EventStream::new();
    let tick_duration = Duration::from_millis(16);
    let mut last_render = Instant::now();

    loop {
        // Phase 1: wait for at least one event or the next frame tick
        let time_to_next = tick_duration.saturating_sub(last_render.elapsed());
        tokio::select! {
            Some(Ok(event)) = events.next() => {
                events::handle_terminal_event(app, event);
                events::drain_mention_events(app);
            }
            () = tokio::time::sleep(time_to_next) => {}
        }

        // Phase 2: drain all remaining queued events (non-blocking). Listener
        // output is applied after each key so the next key sees the dropdown.
        while let Some(Some(Ok(event))) = events.next().now_or_never() {
            events::handle_terminal_event(app, event);
            events::drain_mention_events(app);
        }

        if app.should_quit {
            break;
        }

        // Phase 3: render once
        terminal.draw(|f| crate::ui::render(f, app))?;
        last_render = Instant::now();
    }

    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableBracketedPaste);
    ratatui::restore();

    Ok(())
}

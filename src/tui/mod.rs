//! Terminal UI for gridtac.

mod app;
mod input;
mod terminal;
mod ui;

pub use app::App;
pub use input::dispatch;
pub use terminal::TerminalSession;
pub use ui::{board_lines, draw};

use crate::config::GameConfig;
use anyhow::Result;
use crossterm::event::{self, Event};
use gridtac_core::Game;
use ratatui::{Terminal, backend::Backend};
use tracing::{debug, info, instrument};

/// Plays on the real terminal until the player quits.
#[instrument(skip_all, fields(dimension = *config.dimension()))]
pub fn run_game(config: &GameConfig) -> Result<()> {
    let game = Game::new(*config.dimension())?;
    let mut app = App::new(game, *config.keys());

    let mut session = TerminalSession::start()?;
    run(session.terminal_mut(), &mut app, std::iter::repeat_with(event::read))?;

    info!(turn = app.game().turn(), "Session ended");
    Ok(())
}

/// Runs the draw/read/apply loop over a stream of terminal events.
///
/// Each event is handled to completion and the screen redrawn before the
/// next one is read. Returns when a quit command arrives or the stream ends.
pub fn run<B, I>(terminal: &mut Terminal<B>, app: &mut App, events: I) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    I: IntoIterator<Item = std::io::Result<Event>>,
{
    terminal.draw(|f| draw(f, app))?;

    for event in events {
        match event? {
            Event::Key(key) => {
                if app.handle_key(key).is_break() {
                    info!("User quit");
                    return Ok(());
                }
            }
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
            _ => continue,
        }
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

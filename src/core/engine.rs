use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tracing::info;

use crate::core::app::{App, Control};
use crate::games::hangman::{HangmanRenderer, Session, Tally, WordSource};

/// Turn-based full-screen loop: draw, block for one key, repeat.
pub struct Engine<S: WordSource> {
    app: App<S>,
}

impl<S: WordSource> Engine<S> {
    pub fn new(session: Session<S>) -> Self {
        Self { app: App::new(session) }
    }

    /// Takes over the terminal until the player quits and restores it on
    /// every exit path.
    pub fn run(self) -> Result<Tally> {
        let terminal = ratatui::try_init()?;
        let result = self.run_loop(terminal);
        ratatui::restore();
        result
    }

    fn run_loop(mut self, mut terminal: DefaultTerminal) -> Result<Tally> {
        info!("full-screen session started");
        loop {
            terminal.draw(|f| HangmanRenderer::render(f, &self.app.screen()))?;

            if let Event::Key(key) = event::read()? {
                if self.app.handle_key(key) == Control::Quit {
                    break;
                }
            }
        }

        let tally = self.app.session().tally();
        info!(
            played = tally.played,
            won = tally.won,
            lost = tally.lost,
            "full-screen session ended"
        );
        Ok(tally)
    }
}

use serde::Serialize;
use tracing::info;

use crate::error::GameError;
use super::game::{Game, GuessStatus, Outcome};
use super::words::WordSource;

/// Finished rounds in one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
}

/// Drives consecutive rounds from one word source.
pub struct Session<S: WordSource> {
    source: S,
    max_wrong: u8,
    game: Game,
    tally: Tally,
    recorded: bool,
}

impl<S: WordSource> Session<S> {
    pub fn new(mut source: S, max_wrong: u8) -> Self {
        let game = Game::with_max_wrong(source.next_secret(), max_wrong);
        let mut session = Self {
            source,
            max_wrong,
            game,
            tally: Tally::default(),
            recorded: false,
        };
        // Secrets without letters are won on arrival.
        session.record_if_over();
        session
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn submit(&mut self, input: &str) -> Result<GuessStatus, GameError> {
        let status = self.game.guess(input)?;
        self.record_if_over();
        Ok(status)
    }

    /// Starts a fresh round; an unfinished round is abandoned unrecorded.
    pub fn next_round(&mut self) {
        self.game = Game::with_max_wrong(self.source.next_secret(), self.max_wrong);
        self.recorded = false;
        self.record_if_over();
    }

    /// End-of-round line, `None` while the round is still running
    pub fn verdict(&self) -> Option<String> {
        match self.game.outcome() {
            Outcome::InProgress => None,
            Outcome::Won => Some(format!(
                "🎉 You win! The word/phrase was: {}",
                self.game.secret()
            )),
            Outcome::Lost => Some(format!(
                "💀 You lost! The word/phrase was: {}",
                self.game.secret()
            )),
        }
    }

    fn record_if_over(&mut self) {
        if self.recorded || !self.game.is_over() {
            return;
        }
        self.recorded = true;
        self.tally.played += 1;
        match self.game.outcome() {
            Outcome::Won => self.tally.won += 1,
            Outcome::Lost => self.tally.lost += 1,
            Outcome::InProgress => {}
        }
        info!(
            played = self.tally.played,
            won = self.tally.won,
            lost = self.tally.lost,
            "round recorded"
        );
    }
}

/// Turn message for an accepted guess
pub fn feedback(status: GuessStatus, input: &str) -> String {
    match status {
        GuessStatus::Hit => "✅ Hit!".to_string(),
        GuessStatus::Miss => "❌ Miss!".to_string(),
        GuessStatus::Repeat => format!(
            "You already guessed '{}'. Try a different letter.",
            input.trim().to_lowercase()
        ),
    }
}

/// Turn message for a rejected guess
pub fn error_feedback(err: &GameError) -> String {
    format!("Input error: {}", err)
}

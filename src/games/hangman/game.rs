use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::GameError;

/// One wrong guess per gallows stage after the empty one.
pub const DEFAULT_MAX_WRONG: u8 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outcome::InProgress => "in progress",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessStatus {
    Hit,
    Miss,
    Repeat,
}

/// Pure game state - no UI or I/O concerns.
///
/// Created with a secret, mutated only through [`Game::guess`] and dropped
/// when the round ends.
#[derive(Clone)]
pub struct Game {
    secret: String,
    guessed: BTreeSet<char>,
    wrong: u8,
    max_wrong: u8,
    outcome: Outcome,
}

impl Game {
    pub fn new(secret: impl Into<String>) -> Self {
        Self::with_max_wrong(secret, DEFAULT_MAX_WRONG)
    }

    pub fn with_max_wrong(secret: impl Into<String>, max_wrong: u8) -> Self {
        let secret = secret.into().to_lowercase();
        let mut game = Self {
            secret,
            guessed: BTreeSet::new(),
            wrong: 0,
            max_wrong,
            outcome: Outcome::InProgress,
        };
        game.update_outcome();
        info!(len = game.secret.chars().count(), max_wrong, outcome = %game.outcome, "new game");
        game
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Letters guessed so far, in alphabetical order
    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    pub fn wrong(&self) -> u8 {
        self.wrong
    }

    pub fn max_wrong(&self) -> u8 {
        self.max_wrong
    }

    pub fn remaining_lives(&self) -> u8 {
        self.max_wrong.saturating_sub(self.wrong)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// True when `c` is shown in the masked word.
    pub fn is_revealed(&self, c: char) -> bool {
        !c.is_alphabetic() || self.guessed.contains(&c)
    }

    pub fn guess(&mut self, input: &str) -> Result<GuessStatus, GameError> {
        if self.is_over() {
            return Err(GameError::InvalidOperation { outcome: self.outcome });
        }

        let letter = parse_letter(input).ok_or_else(|| GameError::InvalidGuess {
            input: input.to_string(),
        })?;

        if !self.guessed.insert(letter) {
            debug!(%letter, "repeat guess");
            return Ok(GuessStatus::Repeat);
        }

        let status = if self.secret.contains(letter) {
            GuessStatus::Hit
        } else {
            self.wrong += 1;
            GuessStatus::Miss
        };
        debug!(%letter, ?status, wrong = self.wrong, "guess");

        self.update_outcome();
        if self.is_over() {
            info!(outcome = %self.outcome, wrong = self.wrong, "game finished");
        }
        Ok(status)
    }

    fn is_word_complete(&self) -> bool {
        self.secret.chars().all(|c| self.is_revealed(c))
    }

    fn update_outcome(&mut self) {
        self.outcome = if self.is_word_complete() {
            Outcome::Won
        } else if self.wrong >= self.max_wrong {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };
    }
}

// The secret stays out of logs and panics.
impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("secret", &"*".repeat(self.secret.chars().count()))
            .field("wrong", &format_args!("{}/{}", self.wrong, self.max_wrong))
            .field("guessed", &self.guessed.len())
            .field("outcome", &self.outcome)
            .finish()
    }
}

/// Trimmed input must be exactly one alphabetic character with a
/// single-character lowercase form.
fn parse_letter(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    let c = chars.next()?;
    if chars.next().is_some() || !c.is_alphabetic() {
        return None;
    }

    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letter() {
        assert_eq!(parse_letter("a"), Some('a'));
        assert_eq!(parse_letter(" Q \n"), Some('q'));
        assert_eq!(parse_letter("é"), Some('é'));
        assert_eq!(parse_letter(""), None);
        assert_eq!(parse_letter("   "), None);
        assert_eq!(parse_letter("ab"), None);
        assert_eq!(parse_letter("7"), None);
        assert_eq!(parse_letter("-"), None);
    }

    #[test]
    fn test_debug_hides_secret() {
        let game = Game::new("python");
        let debug = format!("{:?}", game);
        assert!(!debug.contains("python"));
        assert!(debug.contains("******"));
    }
}

use std::path::PathBuf;

use crate::games::hangman::Outcome;

/// Errors returned by [`Game::guess`](crate::games::hangman::Game::guess).
///
/// Both kinds are recoverable: nothing is mutated and the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("please enter a single letter (A-Z), got {input:?}")]
    InvalidGuess { input: String },

    #[error("the game is already over ({outcome})")]
    InvalidOperation { outcome: Outcome },
}

/// Word list construction errors
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("word list has no usable entries")]
    Empty,

    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {} is not a JSON array of strings", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

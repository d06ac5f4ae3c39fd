pub mod cli;
pub mod core;
pub mod error;
pub mod games;
pub mod logging;

// Re-export for convenience
pub use crate::error::{GameError, WordListError};
pub use crate::games::hangman::{Game, GuessStatus, Outcome, Session, WordList, WordSource};

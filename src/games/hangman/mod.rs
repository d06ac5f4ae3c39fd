//! Hangman game module
pub mod art;
pub mod game;
pub mod renderer;
pub mod session;
pub mod view;
pub mod words;

pub use game::{Game, GuessStatus, Outcome, DEFAULT_MAX_WRONG};
pub use renderer::HangmanRenderer;
pub use session::{error_feedback, feedback, Session, Tally};
pub use view::{gallows, guessed_letters, masked_view, status_view, StatusView};
pub use words::{WordList, WordSource, BUILTIN_WORDS};

//! Pure presentation of a [`Game`] - nothing here mutates state.

use serde::Serialize;

use super::art;
use super::game::{Game, Outcome};

pub const MASK: char = '*';

/// Snapshot of everything a frontend shows besides the word itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub remaining_lives: u8,
    pub guessed: Vec<char>,
    pub outcome: Outcome,
}

/// Secret with every un-guessed letter replaced by [`MASK`]
pub fn masked_view(game: &Game) -> String {
    game.secret()
        .chars()
        .map(|c| if game.is_revealed(c) { c } else { MASK })
        .collect()
}

pub fn status_view(game: &Game) -> StatusView {
    StatusView {
        remaining_lives: game.remaining_lives(),
        guessed: game.guessed().iter().copied().collect(),
        outcome: game.outcome(),
    }
}

pub fn gallows(game: &Game) -> &'static str {
    art::STAGES[art::stage_index(game.wrong(), game.max_wrong())]
}

pub fn guessed_letters(status: &StatusView) -> String {
    if status.guessed.is_empty() {
        return "(none)".to_string();
    }
    status
        .guessed
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

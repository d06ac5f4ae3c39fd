use hangterm::games::hangman::art::STAGES;
use hangterm::games::hangman::{gallows, guessed_letters, masked_view, status_view};
use hangterm::{Game, Outcome};

#[test]
fn test_space_never_masked() {
    let mut game = Game::new("a b");
    assert_eq!(masked_view(&game), "* *");
    game.guess("a").unwrap();
    assert_eq!(masked_view(&game), "a *");
    game.guess("b").unwrap();
    assert_eq!(masked_view(&game), "a b");
}

#[test]
fn test_punctuation_always_revealed() {
    let game = Game::new("rock'n'roll, baby!");
    assert_eq!(masked_view(&game), "****'*'****, ****!");
}

#[test]
fn test_unguessed_letters_never_revealed() {
    let secret = "assertive";
    let mut game = Game::new(secret);
    for letter in ["s", "e", "q"] {
        game.guess(letter).unwrap();
        let masked = masked_view(&game);
        assert_eq!(masked.chars().count(), secret.chars().count());
        for (shown, actual) in masked.chars().zip(secret.chars()) {
            if game.guessed().contains(&actual) {
                assert_eq!(shown, actual);
            } else {
                assert_eq!(shown, '*');
            }
        }
    }
}

#[test]
fn test_status_view() {
    let mut game = Game::with_max_wrong("south", 4);
    game.guess("z").unwrap();
    game.guess("o").unwrap();
    game.guess("b").unwrap();

    let status = status_view(&game);
    assert_eq!(status.remaining_lives, 2);
    assert_eq!(status.guessed, vec!['b', 'o', 'z']);
    assert_eq!(status.outcome, Outcome::InProgress);
    assert_eq!(guessed_letters(&status), "b o z");
}

#[test]
fn test_guessed_letters_empty() {
    let game = Game::new("share");
    assert_eq!(guessed_letters(&status_view(&game)), "(none)");
}

#[test]
fn test_gallows_progression() {
    let mut game = Game::new("a");
    assert_eq!(gallows(&game), STAGES[0]);
    game.guess("x").unwrap();
    assert_eq!(gallows(&game), STAGES[1]);
}

#[test]
fn test_lost_game_shows_final_stage() {
    let mut game = Game::with_max_wrong("a", 2);
    game.guess("x").unwrap();
    game.guess("y").unwrap();
    assert_eq!(game.outcome(), Outcome::Lost);
    assert_eq!(gallows(&game), STAGES[STAGES.len() - 1]);
}

#[test]
fn test_views_do_not_mutate() {
    let game = Game::new("beach");
    let _ = masked_view(&game);
    let _ = status_view(&game);
    let _ = gallows(&game);
    assert!(game.guessed().is_empty());
    assert_eq!(game.wrong(), 0);
}

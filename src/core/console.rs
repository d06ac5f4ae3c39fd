//! Line-based frontend: prompt, report, repeat
use std::io::Write;

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use tracing::info;

use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::{
    error_feedback, feedback, gallows, guessed_letters, masked_view, status_view, Game, GuessStatus,
    Outcome, Session, Tally, WordSource,
};

pub struct Console<S: WordSource> {
    session: Session<S>,
    json: bool,
}

impl<S: WordSource> Console<S> {
    pub fn new(session: Session<S>, json: bool) -> Self {
        Self { session, json }
    }

    pub fn run(mut self) -> Result<Tally> {
        let theme = ColorfulTheme::default();
        let mut ctx = TerminalContext::stdout();
        ctx.print_colored_line("=== HANGMAN 🪢 - Guess the word! ===", TerminalColor::Cyan)?;
        ctx.empty_line()?;

        loop {
            print_board(&mut ctx, self.session.game(), self.json)?;
            ctx.flush()?;

            while !self.session.game().is_over() {
                let input: String = Input::with_theme(&theme)
                    .with_prompt("Enter a letter")
                    .allow_empty(true)
                    .interact_text()?;
                play_turn(&mut ctx, &mut self.session, &input, self.json)?;
                ctx.flush()?;
            }

            let again = Confirm::with_theme(&theme)
                .with_prompt("Play again?")
                .default(false)
                .interact()?;
            if !again {
                break;
            }
            self.session.next_round();
        }

        let tally = self.session.tally();
        print_tally(&mut ctx, tally)?;
        if self.json {
            ctx.print_line(&serde_json::to_string(&tally)?)?;
        }
        ctx.print_line("Thanks for playing. Bye!")?;
        ctx.flush()?;
        info!(played = tally.played, "plain session ended");
        Ok(tally)
    }
}

/// Submits one line of input and prints the outcome of the turn.
pub fn play_turn<W: Write, S: WordSource>(
    ctx: &mut TerminalContext<W>,
    session: &mut Session<S>,
    input: &str,
    json: bool,
) -> Result<()> {
    match session.submit(input) {
        Ok(status) => {
            let color = match status {
                GuessStatus::Hit => TerminalColor::Green,
                GuessStatus::Miss => TerminalColor::Red,
                GuessStatus::Repeat => TerminalColor::Yellow,
            };
            ctx.print_colored_line(&feedback(status, input), color)?;
        }
        Err(err) => ctx.print_colored_line(&error_feedback(&err), TerminalColor::Yellow)?,
    }

    print_board(ctx, session.game(), json)?;

    if let Some(verdict) = session.verdict() {
        let color = if session.game().outcome() == Outcome::Won {
            TerminalColor::Green
        } else {
            TerminalColor::Red
        };
        ctx.print_colored_line(&verdict, color)?;
    }
    Ok(())
}

pub fn print_board<W: Write>(ctx: &mut TerminalContext<W>, game: &Game, json: bool) -> Result<()> {
    let status = status_view(game);
    ctx.print_line(gallows(game))?;
    ctx.print_line(&format!("Word:    {}", masked_view(game)))?;
    ctx.print_line(&format!("Guessed: {}", guessed_letters(&status)))?;
    ctx.print_line(&format!("Lives:   {}", status.remaining_lives))?;
    if json {
        ctx.print_line(&serde_json::to_string(&status)?)?;
    }
    ctx.empty_line()?;
    Ok(())
}

pub fn print_tally<W: Write>(ctx: &mut TerminalContext<W>, tally: Tally) -> Result<()> {
    ctx.print_line(&format!(
        "Rounds played: {}  won: {}  lost: {}",
        tally.played, tally.won, tally.lost
    ))?;
    Ok(())
}

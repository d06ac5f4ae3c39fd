use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use hangterm::cli::{Cli, Frontend};
use hangterm::core::console::{print_tally, Console};
use hangterm::core::engine::Engine;
use hangterm::core::terminal::TerminalContext;
use hangterm::games::hangman::Session;

fn main() -> Result<()> {
    let config = Cli::parse().into_config();
    hangterm::logging::init(config.log_file.as_deref())?;

    let words = config.word_list().context("failed to set up word list")?;
    info!(
        entries = words.words().len(),
        max_wrong = config.max_wrong,
        frontend = ?config.frontend,
        "starting"
    );
    let session = Session::new(words, config.max_wrong);

    match config.frontend {
        Frontend::Plain { json } => {
            Console::new(session, json).run()?;
        }
        Frontend::FullScreen => {
            let tally = Engine::new(session).run()?;
            let mut ctx = TerminalContext::stdout();
            print_tally(&mut ctx, tally)?;
        }
    }
    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

use crate::error::WordListError;
use crate::games::hangman::{WordList, DEFAULT_MAX_WRONG};

#[derive(Parser, Debug)]
#[command(name = "hangterm")]
#[command(about = "🪢 Hangman in the terminal")]
#[command(version)]
pub struct Cli {
    /// Wrong guesses allowed before the game is lost
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_MAX_WRONG,
        value_parser = clap::value_parser!(u8).range(1..=26)
    )]
    pub max_wrong: u8,

    /// Word list file: a JSON array of strings, or one word/phrase per line
    #[arg(short, long)]
    pub words: Option<PathBuf>,

    /// Seed for deterministic word selection
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Line-based prompts instead of the full-screen UI
    #[arg(long)]
    pub plain: bool,

    /// Print the status as JSON after every turn (plain mode)
    #[arg(long, requires = "plain")]
    pub json: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frontend {
    FullScreen,
    Plain { json: bool },
}

/// Runtime configuration resolved from the command line
#[derive(Debug, Clone)]
pub struct Config {
    pub max_wrong: u8,
    pub words: Option<PathBuf>,
    pub seed: Option<u64>,
    pub frontend: Frontend,
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let frontend = if self.plain {
            Frontend::Plain { json: self.json }
        } else {
            Frontend::FullScreen
        };
        Config {
            max_wrong: self.max_wrong,
            words: self.words,
            seed: self.seed,
            frontend,
            log_file: self.log_file,
        }
    }
}

impl Config {
    pub fn word_list(&self) -> Result<WordList, WordListError> {
        match (&self.words, self.seed) {
            (Some(path), seed) => WordList::from_path(path, seed),
            (None, Some(seed)) => Ok(WordList::builtin_seeded(seed)),
            (None, None) => Ok(WordList::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Cli::try_parse_from(["hangterm"]).unwrap().into_config();
        assert_eq!(config.max_wrong, DEFAULT_MAX_WRONG);
        assert_eq!(config.frontend, Frontend::FullScreen);
        assert!(config.words.is_none());
        assert!(config.word_list().is_ok());
    }

    #[test]
    fn test_plain_json() {
        let config = Cli::try_parse_from(["hangterm", "--plain", "--json", "-m", "3", "-s", "9"])
            .unwrap()
            .into_config();
        assert_eq!(config.frontend, Frontend::Plain { json: true });
        assert_eq!(config.max_wrong, 3);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_json_requires_plain() {
        assert!(Cli::try_parse_from(["hangterm", "--json"]).is_err());
    }

    #[test]
    fn test_max_wrong_range() {
        assert!(Cli::try_parse_from(["hangterm", "-m", "0"]).is_err());
        assert!(Cli::try_parse_from(["hangterm", "-m", "27"]).is_err());
        assert!(Cli::try_parse_from(["hangterm", "-m", "26"]).is_ok());
    }

    #[test]
    fn test_missing_word_file() {
        let config = Cli::try_parse_from(["hangterm", "-w", "/nonexistent/hangterm/words.txt"])
            .unwrap()
            .into_config();
        assert!(matches!(config.word_list(), Err(WordListError::Io { .. })));
    }
}

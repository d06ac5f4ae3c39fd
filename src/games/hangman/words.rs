use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::WordListError;

/// Candidates used when no word list file is given
pub const BUILTIN_WORDS: &[&str] = &[
    "correction",
    "childish",
    "beach",
    "python",
    "assertive",
    "interference",
    "complete",
    "share",
    "credit card",
    "rush",
    "south",
];

/// Supplies one secret per round.
pub trait WordSource {
    /// Returns a non-empty lowercase secret.
    fn next_secret(&mut self) -> String;
}

/// Uniform random draw from a fixed, non-empty candidate collection
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    rng: StdRng,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    pub fn seeded<I, S>(words: I, seed: u64) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    pub fn builtin() -> Self {
        Self::from_builtin(StdRng::from_os_rng())
    }

    pub fn builtin_seeded(seed: u64) -> Self {
        Self::from_builtin(StdRng::seed_from_u64(seed))
    }

    /// Loads candidates from `path`: a JSON array of strings for `.json`
    /// files, otherwise one per line with blank and `#` lines skipped.
    pub fn from_path(path: impl AsRef<Path>, seed: Option<u64>) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let words: Vec<String> = if is_json {
            serde_json::from_str(&text).map_err(|source| WordListError::Json {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            text.lines()
                .filter(|line| !line.trim_start().starts_with('#'))
                .map(str::to_string)
                .collect()
        };
        debug!(path = %path.display(), entries = words.len(), "loaded word list");

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(words, rng)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    fn with_rng<I, S>(words: I, rng: StdRng) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words, rng })
    }

    fn from_builtin(rng: StdRng) -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| w.to_string()).collect(),
            rng,
        }
    }
}

impl WordSource for WordList {
    fn next_secret(&mut self) -> String {
        let idx = self.rng.random_range(0..self.words.len());
        self.words[idx].clone()
    }
}

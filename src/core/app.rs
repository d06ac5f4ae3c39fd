//! Full-screen app state and key handling, kept free of terminal I/O
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::games::hangman::renderer::Screen;
use crate::games::hangman::{error_feedback, feedback, Session, WordSource};

/// What the engine loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App<S: WordSource> {
    session: Session<S>,
    message: String,
}

impl<S: WordSource> App<S> {
    pub fn new(session: Session<S>) -> Self {
        let mut app = Self {
            session,
            message: String::new(),
        };
        app.message = app.round_message();
        app
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn screen(&self) -> Screen<'_> {
        Screen {
            game: self.session.game(),
            message: &self.message,
            tally: self.session.tally(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Control::Quit,
                _ => Control::Continue,
            };
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            return Control::Continue;
        }

        if self.session.game().is_over() {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    self.session.next_round();
                    self.message = self.round_message();
                    Control::Continue
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') | KeyCode::Esc => {
                    Control::Quit
                }
                _ => Control::Continue,
            };
        }

        match key.code {
            KeyCode::Esc => Control::Quit,
            KeyCode::Char(c) => {
                let input = c.to_string();
                let text = match self.session.submit(&input) {
                    Ok(status) => feedback(status, &input),
                    Err(err) => error_feedback(&err),
                };
                self.message = match self.session.verdict() {
                    Some(verdict) => format!("{}  {}", text, verdict),
                    None => text,
                };
                Control::Continue
            }
            _ => Control::Continue,
        }
    }

    fn round_message(&self) -> String {
        self.session
            .verdict()
            .unwrap_or_else(|| "Guess the word!".to_string())
    }
}

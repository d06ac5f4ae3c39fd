//! Full-screen Hangman renderer
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::game::{Game, Outcome};
use super::session::Tally;
use super::view::{gallows, guessed_letters, masked_view, status_view};

/// Everything one frame needs
pub struct Screen<'a> {
    pub game: &'a Game,
    pub message: &'a str,
    pub tally: Tally,
}

#[derive(Debug)]
pub struct HangmanRenderer;

impl HangmanRenderer {
    pub fn render(frame: &mut Frame, screen: &Screen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Header
                Constraint::Length(10), // Gallows + word
                Constraint::Length(3),  // Message
                Constraint::Min(1),     // Help
            ])
            .split(frame.area());

        let header = Paragraph::new(format!(
            "🪢 HANGMAN  ·  played {}  won {}  lost {}",
            screen.tally.played, screen.tally.won, screen.tally.lost
        ))
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(16), Constraint::Min(0)])
            .split(chunks[1]);

        let art = Paragraph::new(gallows(screen.game).trim_start_matches('\n'))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(art, body[0]);

        let status = status_view(screen.game);
        let lives_style = if status.remaining_lives <= 1 {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };
        let lines = vec![
            Line::from(vec![
                Span::raw("Word:    "),
                Span::styled(
                    masked_view(screen.game),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::raw("Lives:   "),
                Span::styled(
                    format!(
                        "{} {}",
                        status.remaining_lives,
                        "❤".repeat(usize::from(status.remaining_lives))
                    ),
                    lives_style,
                ),
            ]),
            Line::from(format!("Guessed: {}", guessed_letters(&status))),
        ];
        let word = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(word, body[1]);

        let message_style = match status.outcome {
            Outcome::Won => Style::default().fg(Color::Green),
            Outcome::Lost => Style::default().fg(Color::Red),
            Outcome::InProgress => Style::default().fg(Color::Yellow),
        };
        let message = Paragraph::new(screen.message.to_string())
            .block(Block::default().borders(Borders::ALL))
            .style(message_style);
        frame.render_widget(message, chunks[2]);

        let help = if screen.game.is_over() {
            "Play again? [Y] yes  [N] no"
        } else {
            "Type a letter to guess  [Esc] quit"
        };
        frame.render_widget(Paragraph::new(help).alignment(Alignment::Center), chunks[3]);
    }
}

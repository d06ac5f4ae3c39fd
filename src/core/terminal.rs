//! Line-oriented output for the plain frontend
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::tty::IsTty;
use crossterm::QueueableCommand;
use std::io::{self, Stdout, Write};

pub struct TerminalContext<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W) -> Self {
        Self { out, color: true }
    }

    /// Plain text only - no escape sequences
    pub fn without_color(out: W) -> Self {
        Self { out, color: false }
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        if !self.color {
            return self.print_line(text);
        }
        self.out.queue(SetForegroundColor(color.into()))?;
        writeln!(self.out, "{}", text)?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    pub fn empty_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalContext<Stdout> {
    /// Colored only when stdout is a terminal, so piped output stays clean
    pub fn stdout() -> Self {
        let out = io::stdout();
        if out.is_tty() {
            Self::new(out)
        } else {
            Self::without_color(out)
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TerminalColor {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
        }
    }
}

//! TerminalRenderer: flushes styled lines to a real terminal.
//!
//! Full-frame redraws are plenty for a board this size; the drawing API
//! stays deliberately small.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::view::{Line, Tone};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a full frame.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;
        for (row, line) in lines.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, row as u16))?;
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
            for span in line {
                let (color, bold) = style_for(span.tone);
                self.stdout.queue(SetForegroundColor(color))?;
                if bold {
                    self.stdout.queue(SetAttribute(Attribute::Bold))?;
                }
                self.stdout.queue(Print(span.text.as_str()))?;
                if bold {
                    self.stdout.queue(SetAttribute(Attribute::NormalIntensity))?;
                }
            }
        }
        self.stdout.queue(ResetColor)?;
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn style_for(tone: Tone) -> (Color, bool) {
    match tone {
        Tone::Default => (Color::Reset, false),
        Tone::Dim => (Color::DarkGrey, false),
        Tone::Title => (Color::Yellow, true),
        Tone::Calc => (Color::Cyan, false),
        Tone::Answer => (Color::Magenta, false),
        Tone::Selected => (Color::Yellow, true),
        Tone::Matched => (Color::Green, false),
        Tone::Wrong => (Color::Red, true),
        Tone::Good => (Color::Green, false),
        Tone::Warn => (Color::DarkYellow, false),
        Tone::Bad => (Color::Red, true),
    }
}

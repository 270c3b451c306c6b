//! Terminal output using crossterm
//!
//! Wraps any writer so the renderer can target stdout or, in tests,
//! a byte buffer.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::error::Result;

/// Width used when the output is not a terminal
pub const DEFAULT_COLS: u16 = 100;

/// Styled line-oriented output
pub struct Terminal<W: Write> {
    out: W,
    /// Output width in columns
    cols: u16,
}

impl Terminal<io::Stdout> {
    /// Terminal on stdout, sized to the window when there is one
    pub fn stdout() -> Self {
        let cols = terminal::size().map(|(cols, _)| cols).unwrap_or(DEFAULT_COLS);
        Self::new(io::stdout(), cols)
    }
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, cols: u16) -> Self {
        Self { out, cols: cols.max(1) }
    }

    /// Get output width
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Write a string at the current position
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        queue!(self.out, Print(s))?;
        Ok(())
    }

    /// Write `count` cells filled with a background color
    pub fn write_block(&mut self, color: Color, count: usize) -> Result<()> {
        queue!(
            self.out,
            SetBackgroundColor(color),
            Print(" ".repeat(count)),
            ResetColor
        )?;
        Ok(())
    }

    /// Write text in a foreground color
    pub fn write_colored(&mut self, color: Color, s: &str) -> Result<()> {
        queue!(self.out, SetForegroundColor(color), Print(s), ResetColor)?;
        Ok(())
    }

    /// Set dim/faint mode (for line numbers, etc.)
    pub fn set_dim(&mut self, enabled: bool) -> Result<()> {
        if enabled {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        } else {
            queue!(self.out, SetAttribute(Attribute::NormalIntensity))?;
        }
        Ok(())
    }

    /// End the current line
    pub fn newline(&mut self) -> Result<()> {
        queue!(self.out, SetAttribute(Attribute::Reset), Print("\n"))?;
        Ok(())
    }

    /// Flush output buffer
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Take back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

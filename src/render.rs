//! Timeline rendering
//!
//! Draws each line as a numbered row of colored blocks, one block per
//! segment, sized from the segment's display width. A legend row maps
//! colors back to categories.

use std::io::Write;

use unicode_width::UnicodeWidthStr;

use crate::error::Result;
use crate::syntax::{Category, Color, Line, Palette};
use crate::terminal::Terminal;

/// Legend swatch
const SWATCH: &str = "■";

/// Renders timelines with a palette
pub struct Renderer {
    palette: Palette,
    /// Display width covered by one terminal cell
    cell_width: usize,
    pub show_line_numbers: bool,
    pub show_legend: bool,
}

impl Renderer {
    pub fn new(palette: Palette, cell_width: usize) -> Self {
        for category in palette.missing() {
            log::warn!("palette has no color for '{}'", category);
        }
        Self {
            palette,
            cell_width: cell_width.max(1),
            show_line_numbers: true,
            show_legend: true,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Terminal cells for a display width, at least one
    pub fn cells_for(&self, display_width: usize) -> usize {
        display_width.div_ceil(self.cell_width).max(1)
    }

    /// Width of the line number gutter, including the separator space
    fn gutter_width(&self, lines: &[Line]) -> usize {
        if !self.show_line_numbers {
            return 0;
        }
        let last = lines.last().map_or(1, |l| l.line_number);
        last.to_string().len().max(3) + 1
    }

    /// Render the full timeline, then the legend
    pub fn render<W: Write>(&self, term: &mut Terminal<W>, lines: &[Line]) -> Result<()> {
        let gutter = self.gutter_width(lines);
        for line in lines {
            self.render_line(term, line, gutter)?;
        }
        if self.show_legend {
            if !lines.is_empty() {
                term.newline()?;
            }
            self.render_legend(term)?;
        }
        term.flush()
    }

    /// Render one row, clipped to the terminal width
    fn render_line<W: Write>(&self, term: &mut Terminal<W>, line: &Line, gutter: usize) -> Result<()> {
        let cols = term.cols() as usize;
        if gutter > 0 {
            term.set_dim(true)?;
            term.write_str(&format!("{:>width$} ", line.line_number, width = gutter - 1))?;
            term.set_dim(false)?;
        }

        let mut used = gutter;
        for segment in &line.segments {
            if used >= cols {
                break;
            }
            let cells = self.cells_for(segment.display_width).min(cols - used);
            match self.palette.color_for(segment.category).to_crossterm() {
                Some(color) => term.write_block(color, cells)?,
                None => term.write_str(&" ".repeat(cells))?,
            }
            used += cells;
        }
        term.newline()
    }

    /// Render the legend, wrapping entries to the terminal width
    pub fn render_legend<W: Write>(&self, term: &mut Terminal<W>) -> Result<()> {
        let cols = term.cols() as usize;
        let mut used = 0;
        for category in Category::ALL.iter().filter(|c| c.in_legend()) {
            let label = category.label();
            let width = SWATCH.width() + 1 + label.width();
            if used > 0 && used + 2 + width > cols {
                term.newline()?;
                used = 0;
            }
            if used > 0 {
                term.write_str("  ")?;
                used += 2;
            }
            match self.palette.color_for(*category).to_crossterm() {
                Some(color) => term.write_colored(color, SWATCH)?,
                None => term.write_str(" ")?,
            }
            term.write_str(&format!(" {}", label))?;
            used += width;
        }
        term.newline()
    }
}

/// Plain-text listing of every segment
pub fn dump<W: Write>(out: &mut W, lines: &[Line]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}:", line.line_number)?;
        for segment in &line.segments {
            writeln!(
                out,
                "  {:<12}{:>5}  {:?}",
                segment.category.name(),
                segment.display_width,
                segment.text
            )?;
        }
    }
    Ok(())
}

/// Legend entries as (label, color), for callers drawing their own
pub fn legend_entries(palette: &Palette) -> Vec<(String, Color)> {
    Category::ALL
        .iter()
        .filter(|c| c.in_legend())
        .map(|c| (c.label(), palette.color_for(*c)))
        .collect()
}

//! Timeline construction
//!
//! Turns a text buffer into numbered lines of classified segments.
//! Everything is recomputed from scratch on each call.

use super::rules::{RuleSet, TokenContext};
use super::splitter::split_line;
use super::tokens::Category;

/// Display width per character unless the caller says otherwise
pub const DEFAULT_CHAR_WIDTH: usize = 8;

/// One classified piece of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Token text, never empty
    pub text: String,
    /// Assigned category
    pub category: Category,
    /// Character count times the width multiplier
    pub display_width: usize,
}

/// A source line with at least one segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based position in the input
    pub line_number: usize,
    /// Segments in source order
    pub segments: Vec<Segment>,
}

impl Line {
    /// Sum of segment widths
    pub fn display_width(&self) -> usize {
        self.segments
            .iter()
            .fold(0usize, |acc, s| acc.saturating_add(s.display_width))
    }

    /// Segment texts joined back together
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Splits and classifies text into timeline lines
pub struct Classifier {
    rules: RuleSet,
    char_width: usize,
}

impl Classifier {
    /// Create a classifier with the standard rules
    pub fn new(char_width: usize) -> Self {
        Self::with_rules(RuleSet::standard(), char_width)
    }

    /// Create a classifier with a custom rule list
    pub fn with_rules(rules: RuleSet, char_width: usize) -> Self {
        Self { rules, char_width }
    }

    pub fn char_width(&self) -> usize {
        self.char_width
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Display width of a token
    pub fn width_of(&self, text: &str) -> usize {
        text.chars().count().saturating_mul(self.char_width)
    }

    /// Classify one line into segments
    pub fn classify_line(&self, line: &str) -> Vec<Segment> {
        split_line(line)
            .into_iter()
            .map(|token| Segment {
                text: token.text.to_string(),
                category: self.rules.classify(&TokenContext::new(token, line)),
                display_width: self.width_of(token.text),
            })
            .collect()
    }

    /// Build the timeline for a whole buffer
    ///
    /// Lines that produce no segments are dropped; the rest keep their
    /// original line numbers.
    pub fn build(&self, text: &str) -> Vec<Line> {
        let lines: Vec<Line> = text
            .split('\n')
            .enumerate()
            .filter_map(|(idx, raw)| {
                let raw = raw.strip_suffix('\r').unwrap_or(raw);
                let segments = self.classify_line(raw);
                if segments.is_empty() {
                    None
                } else {
                    Some(Line { line_number: idx + 1, segments })
                }
            })
            .collect();
        log::debug!("built timeline: {} non-empty lines", lines.len());
        lines
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(DEFAULT_CHAR_WIDTH)
    }
}

/// Build a timeline with the standard rules and default width
pub fn build_timeline(text: &str) -> Vec<Line> {
    Classifier::default().build(text)
}

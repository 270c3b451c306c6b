//! Lexical classification
//!
//! This module turns source text into timeline lines:
//! - splitting lines into raw tokens
//! - classifying tokens with ordered rules
//! - building numbered lines of segments
//! - palettes for rendering the result

mod style;
mod tokens;
mod rules;
mod splitter;
mod timeline;

pub use style::{Color, Palette, Theme};
pub use tokens::Category;
pub use rules::{Matcher, Rule, RuleSet, TokenContext, KEYWORDS};
pub use splitter::{split_line, split_with_empties, RawToken};
pub use timeline::{build_timeline, Classifier, Line, Segment, DEFAULT_CHAR_WIDTH};

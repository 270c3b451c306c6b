//! Token splitter
//!
//! Splits one line into raw tokens. Whitespace runs and the structural
//! characters `{ } ( ) [ ] , ; .` become their own tokens; everything
//! between them stays together. A `//` comment is carved off first and
//! kept as a single token running to the end of the line.

use std::sync::OnceLock;

use regex::Regex;

/// Boundary pattern: a whitespace run or one structural character
const BOUNDARY: &str = r"\s+|[{}()\[\],;.]";

/// Marker that opens a line comment
const LINE_COMMENT: &str = "//";

/// Compiled boundary pattern, None if it failed to compile
fn boundary() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(BOUNDARY).ok()).as_ref()
}

/// A raw, unclassified piece of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken<'a> {
    /// The token text (may be empty before filtering)
    pub text: &'a str,
    /// Byte offset of the token within its line
    pub offset: usize,
    /// Whether this token is the trailing `//` comment
    pub is_comment: bool,
}

impl<'a> RawToken<'a> {
    fn new(text: &'a str, offset: usize) -> Self {
        Self { text, offset, is_comment: false }
    }

    /// Byte offset just past the token
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Split a line keeping every piece, including empty ones
///
/// Adjacent boundaries leave empty pieces between them, as a capturing
/// split does. Concatenating the texts gives back `line` exactly.
pub fn split_with_empties(line: &str) -> Vec<RawToken<'_>> {
    let (code, comment_start) = match line.find(LINE_COMMENT) {
        Some(pos) => (&line[..pos], Some(pos)),
        None => (line, None),
    };

    let mut tokens = Vec::new();
    let mut last = 0;
    for m in boundary().into_iter().flat_map(|re| re.find_iter(code)) {
        tokens.push(RawToken::new(&code[last..m.start()], last));
        tokens.push(RawToken::new(m.as_str(), m.start()));
        last = m.end();
    }
    tokens.push(RawToken::new(&code[last..], last));

    if let Some(pos) = comment_start {
        tokens.push(RawToken {
            text: &line[pos..],
            offset: pos,
            is_comment: true,
        });
    }

    tokens
}

/// Split a line into its non-empty raw tokens
pub fn split_line(line: &str) -> Vec<RawToken<'_>> {
    split_with_empties(line)
        .into_iter()
        .filter(|t| !t.is_empty())
        .collect()
}

//! code-timeline - source code as a timeline of colored token blocks
//!
//! Each line of input is split into tokens, every token is given a
//! category by an ordered list of pattern rules, and the result is a
//! sequence of numbered lines ready for rendering.
//!
//! ```
//! use code_timeline::syntax::{build_timeline, Category};
//!
//! let lines = build_timeline("let x = f(1);");
//! assert_eq!(lines[0].segments[0].category, Category::Keyword);
//! ```

pub mod config;
pub mod error;
pub mod render;
pub mod syntax;
pub mod terminal;

pub use error::{Result, TimelineError};

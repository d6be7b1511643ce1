//! Block-level parser.
//!
//! The block parser is line-oriented and recognizes, in priority order:
//! - ATX-style headings
//! - `- ` unordered lists
//! - `* ` ordered lists
//! - Paragraphs
//!
//! Anything else (blank lines) is skipped.

mod event;
mod parser;

pub use event::{Block, BlockLines, ListKind};
pub use parser::BlockParser;

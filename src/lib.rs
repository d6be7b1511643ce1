//! markhash: line-oriented Markdown subset to HTML converter
//!
//! The input is split into lines once; a block parser then walks them
//! with a cursor and every recognized block is rendered straight to an
//! HTML fragment.
//!
//! # Supported syntax
//! - `#` to `######` headings
//! - `- ` lists (`<ul>`) and `* ` lists (`<ol>`), flat only
//! - Paragraphs, with `<br/>` between their lines
//! - `**b**`, `__em__`, `[[md5]]` and `((strip c))` inline spans
//!
//! Text is not HTML-escaped.

pub mod block;
pub mod convert;
pub mod document;
pub mod inline;
pub mod render;

use std::io::{self, Write};

// Re-export primary types
pub use block::{Block, BlockLines, BlockParser, ListKind};
pub use convert::{ConvertError, ConvertStats, convert_file};
pub use document::Document;
pub use inline::{InlineRule, transform};
pub use render::{HtmlWriter, render_block};

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases.
///
/// # Example
/// ```
/// let html = markhash::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>\nWorld\n</p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    let document = Document::new(input);
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    for block in BlockParser::new(document.lines()) {
        writer.write_block(&block);
    }
    writer.into_string()
}

/// Convert already-split lines into one HTML fragment per block.
///
/// Lines may keep their trailing `\n`. Blank lines produce no fragment.
pub fn to_html_fragments<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    BlockParser::new(lines)
        .map(|block| render_block(&block))
        .collect()
}

/// Stream the HTML for `lines` into `out`, one block at a time.
///
/// Returns the number of fragments written.
pub fn write_html<S: AsRef<str>, W: Write>(lines: &[S], mut out: W) -> io::Result<usize> {
    let mut writer = HtmlWriter::new();
    let mut blocks = 0;
    for block in BlockParser::new(lines) {
        writer.clear();
        writer.write_block(&block);
        out.write_all(writer.as_str().as_bytes())?;
        blocks += 1;
    }
    Ok(blocks)
}

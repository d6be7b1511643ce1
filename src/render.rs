//! HTML output writer.
//!
//! Every block becomes one fragment that ends in `\n`. Inline text is
//! passed through [`inline::transform`](crate::inline::transform) and is
//! not HTML-escaped.

use crate::block::Block;
use crate::inline;

/// HTML output writer with a reusable buffer.
///
/// # Example
/// ```
/// use markhash::HtmlWriter;
///
/// let mut writer = HtmlWriter::new();
/// writer.heading_start(2);
/// writer.write_inline("**Hello**");
/// writer.heading_end(2);
///
/// assert_eq!(writer.into_string(), "<h2><b>Hello</b></h2>\n");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Tags add roughly a quarter on top of typical input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write a static string (compile-time known).
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.push_str(s);
    }

    /// Write text after applying the inline passes.
    #[inline]
    pub fn write_inline(&mut self, text: &str) {
        self.out.push_str(&inline::transform(text));
    }

    /// Write a newline.
    #[inline]
    pub fn newline(&mut self) {
        self.out.push('\n');
    }

    /// Current output length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    /// Output written so far.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Create with capacity sized for `block`.
    fn sized_for(block: &Block<'_>) -> Self {
        let hint = match block {
            Block::Heading { content, .. } => content.len() + 16,
            Block::List { items, .. } => items.iter().map(|i| i.len() + 10).sum::<usize>() + 12,
            Block::Paragraph { lines } => lines.iter().map(|l| l.len() + 7).sum::<usize>() + 10,
            Block::Blank => 0,
        };
        Self {
            out: String::with_capacity(hint),
        }
    }

    // --- HTML Tag Helpers ---

    /// Write opening tag: `<tagname>`
    #[inline]
    pub fn open_tag(&mut self, tag: &'static str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Write closing tag: `</tagname>`
    #[inline]
    pub fn close_tag(&mut self, tag: &'static str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Write opening tag with newline: `<tagname>\n`
    #[inline]
    pub fn open_tag_nl(&mut self, tag: &'static str) {
        self.open_tag(tag);
        self.newline();
    }

    /// Write closing tag with newline: `</tagname>\n`
    #[inline]
    pub fn close_tag_nl(&mut self, tag: &'static str) {
        self.close_tag(tag);
        self.newline();
    }

    // --- Block Elements ---

    /// Write heading start: `<hN>`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.out.push_str("<h");
        self.out.push(char::from(b'0' + level));
        self.out.push('>');
    }

    /// Write heading end: `</hN>\n`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.out.push_str("</h");
        self.out.push(char::from(b'0' + level));
        self.out.push_str(">\n");
    }

    /// Write list item: `<li>...</li>\n`
    #[inline]
    pub fn list_item(&mut self, text: &str) {
        self.write_str("<li>");
        self.write_inline(text);
        self.write_str("</li>\n");
    }

    /// Write a line break between paragraph lines: `\n<br/>\n`
    #[inline]
    pub fn line_break(&mut self) {
        self.write_str("\n<br/>\n");
    }

    /// Write one complete block fragment.
    ///
    /// Blank blocks write nothing.
    pub fn write_block(&mut self, block: &Block<'_>) {
        match block {
            Block::Heading { level, content } => {
                self.heading_start(*level);
                self.write_inline(content);
                self.heading_end(*level);
            }
            Block::List { kind, items } => {
                self.open_tag_nl(kind.tag());
                for item in items {
                    self.list_item(item);
                }
                self.close_tag_nl(kind.tag());
            }
            Block::Paragraph { lines } => {
                self.open_tag_nl("p");
                for (i, line) in lines.iter().enumerate() {
                    if i > 0 {
                        self.line_break();
                    }
                    self.write_inline(line);
                }
                self.newline();
                self.close_tag_nl("p");
            }
            Block::Blank => {}
        }
    }
}

/// Render a single block into its own fragment.
pub fn render_block(block: &Block<'_>) -> String {
    let mut writer = HtmlWriter::sized_for(block);
    writer.write_block(block);
    writer.into_string()
}

//! Line-indexed view over an input document.
//!
//! The whole input is split once into lines that keep their terminator
//! (`\n`, `\r\n` or a lone `\r`), so the block parser can look ahead by
//! index.

/// An ordered, indexable sequence of input lines.
///
/// # Example
/// ```
/// use markhash::Document;
///
/// let doc = Document::new("# Title\n\nbody");
/// assert_eq!(doc.len(), 3);
/// assert_eq!(doc.line(0), Some("# Title\n"));
/// assert_eq!(doc.line(2), Some("body"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Document<'a> {
    /// Split `input` into lines, keeping each line's terminator.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line. A trailing terminator
    /// does not produce an extra empty line.
    pub fn new(input: &'a str) -> Self {
        let bytes = input.as_bytes();
        let mut lines = Vec::new();
        let mut start = 0;

        while let Some(found) = memchr::memchr2(b'\n', b'\r', &bytes[start..]) {
            let mut end = start + found + 1;
            if bytes[end - 1] == b'\r' && bytes.get(end) == Some(&b'\n') {
                end += 1;
            }
            lines.push(&input[start..end]);
            start = end;
        }

        if start < input.len() {
            lines.push(&input[start..]);
        }

        Self { lines }
    }

    /// Build a document from already-split lines.
    pub fn from_lines(lines: Vec<&'a str>) -> Self {
        Self { lines }
    }

    /// All lines, in input order.
    #[inline]
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// The raw line at `index`, if any.
    #[inline]
    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.lines.get(index).copied()
    }

    /// Number of lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_terminators() {
        let doc = Document::new("a\nb\n");
        assert_eq!(doc.lines(), &["a\n", "b\n"]);
    }

    #[test]
    fn test_last_line_without_newline() {
        let doc = Document::new("a\nb");
        assert_eq!(doc.lines(), &["a\n", "b"]);
    }

    #[test]
    fn test_blank_lines_are_lines() {
        let doc = Document::new("\n\n\n");
        assert_eq!(doc.len(), 3);
        assert!(doc.lines().iter().all(|l| *l == "\n"));
    }

    #[test]
    fn test_empty_input() {
        let doc = Document::new("");
        assert!(doc.is_empty());
        assert_eq!(doc.line(0), None);
    }

    #[test]
    fn test_lone_carriage_return_ends_line() {
        let doc = Document::new("a\rb\n");
        assert_eq!(doc.lines(), &["a\r", "b\n"]);
    }

    #[test]
    fn test_carriage_returns_only() {
        let doc = Document::new("a\r\rb");
        assert_eq!(doc.lines(), &["a\r", "\r", "b"]);
    }

    #[test]
    fn test_mixed_terminators() {
        let doc = Document::new("a\r\nb\nc\rd");
        assert_eq!(doc.lines(), &["a\r\n", "b\n", "c\r", "d"]);
    }

    #[test]
    fn test_crlf_stays_on_line() {
        let doc = Document::new("- a\r\n- b\r\n");
        assert_eq!(doc.lines(), &["- a\r\n", "- b\r\n"]);
    }
}

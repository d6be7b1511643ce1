//! Block types produced by the block parser.

use smallvec::SmallVec;

/// Line slices collected for a multi-line block.
///
/// Most lists and paragraphs are short enough to stay inline.
pub type BlockLines<'a> = SmallVec<[&'a str; 8]>;

/// Flat list flavor, selected by the line marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `- item`, rendered as `<ul>`.
    Unordered,
    /// `* item`, rendered as `<ol>`.
    Ordered,
}

impl ListKind {
    /// Line prefix that starts an item of this kind.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Unordered => "- ",
            Self::Ordered => "* ",
        }
    }

    /// HTML tag name for the list wrapper.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// A run of lines recognized as one structural unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// `#` to `######` heading.
    Heading {
        /// Heading level (1-6).
        level: u8,
        /// Raw inline content after the marker.
        content: &'a str,
    },

    /// Consecutive list items sharing one marker.
    List {
        /// Which marker started the run.
        kind: ListKind,
        /// Item text after the marker, trimmed.
        items: BlockLines<'a>,
    },

    /// Consecutive non-blank lines.
    Paragraph {
        /// Each line, trimmed.
        lines: BlockLines<'a>,
    },

    /// A line that produces no output.
    Blank,
}

impl Block<'_> {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "heading",
            Self::List {
                kind: ListKind::Unordered,
                ..
            } => "unordered list",
            Self::List {
                kind: ListKind::Ordered,
                ..
            } => "ordered list",
            Self::Paragraph { .. } => "paragraph",
            Self::Blank => "blank",
        }
    }
}

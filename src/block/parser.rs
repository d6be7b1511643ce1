//! Block parser implementation.

use super::event::{Block, BlockLines, ListKind};

/// Maximum ATX heading level.
const MAX_HEADING_LEVEL: usize = 6;

/// Block parser state.
///
/// Walks a slice of lines with a cursor that advances by however many
/// lines each recognized block consumed. Blank lines are skipped, so the
/// iterator only yields blocks that produce output.
///
/// # Example
/// ```
/// use markhash::{Block, BlockParser};
///
/// let lines = ["# Title\n", "\n", "body\n"];
/// let blocks: Vec<_> = BlockParser::new(&lines).collect();
/// assert_eq!(blocks.len(), 2);
/// assert!(matches!(blocks[0], Block::Heading { level: 1, .. }));
/// ```
pub struct BlockParser<'a, S> {
    /// Input lines.
    lines: &'a [S],
    /// Index of the next unconsumed line.
    pos: usize,
}

impl<'a, S: AsRef<str>> BlockParser<'a, S> {
    /// Create a new block parser over `lines`.
    pub fn new(lines: &'a [S]) -> Self {
        Self { lines, pos: 0 }
    }

    /// Index of the next line to be classified.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Classify the block starting at line `pos`.
    ///
    /// Returns the block and the number of lines it consumed (always at
    /// least 1), or `None` once `pos` is past the last line. Checks run in
    /// a fixed order and the first match wins: heading, unordered list,
    /// ordered list, paragraph, blank.
    pub fn classify(lines: &'a [S], pos: usize) -> Option<(Block<'a>, usize)> {
        let rest = lines.get(pos..)?;
        let first = rest.first()?;

        if let Some(heading) = try_heading(first.as_ref()) {
            return Some((heading, 1));
        }

        for kind in [ListKind::Unordered, ListKind::Ordered] {
            if let Some(list) = try_list(rest, kind) {
                return Some(list);
            }
        }

        if let Some(paragraph) = try_paragraph(rest) {
            return Some(paragraph);
        }

        Some((Block::Blank, 1))
    }
}

impl<'a, S: AsRef<str>> Iterator for BlockParser<'a, S> {
    type Item = Block<'a>;

    fn next(&mut self) -> Option<Block<'a>> {
        while let Some((block, consumed)) = Self::classify(self.lines, self.pos) {
            let start = self.pos;
            self.pos += consumed;

            if matches!(block, Block::Blank) {
                continue;
            }

            log::trace!("lines {start}..{}: {}", self.pos, block.name());
            return Some(block);
        }
        None
    }
}

/// Whitespace for trimming and blank detection.
///
/// Unicode whitespace plus the U+001C..U+001F separators.
#[inline]
fn is_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

#[inline]
fn trim_line(line: &str) -> &str {
    line.trim_matches(is_space)
}

/// Try to parse a heading from a single line.
///
/// The line is trimmed first; it must then start with 1-6 `#`, one
/// whitespace character, and non-empty content.
fn try_heading(line: &str) -> Option<Block<'_>> {
    let line = trim_line(line);

    let level = line.bytes().take_while(|&b| b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }

    let mut after = line[level..].chars();
    if !after.next().is_some_and(is_space) {
        return None;
    }

    // Content keeps any further leading whitespace
    let content = after.as_str();
    if content.is_empty() || content.contains('\n') {
        return None;
    }

    Some(Block::Heading {
        level: level as u8,
        content,
    })
}

/// Try to parse a list run starting at `lines[0]`.
///
/// The marker is matched against the raw line, so indented markers do
/// not start a list.
fn try_list<'a, S: AsRef<str>>(lines: &'a [S], kind: ListKind) -> Option<(Block<'a>, usize)> {
    let items: BlockLines<'a> = lines
        .iter()
        .map_while(|line| line.as_ref().strip_prefix(kind.marker()))
        .map(trim_line)
        .collect();

    if items.is_empty() {
        return None;
    }

    let consumed = items.len();
    Some((Block::List { kind, items }, consumed))
}

/// Try to parse a paragraph starting at `lines[0]`.
///
/// Swallows every following line up to the first blank one, whatever
/// that line looks like.
fn try_paragraph<'a, S: AsRef<str>>(lines: &'a [S]) -> Option<(Block<'a>, usize)> {
    let para: BlockLines<'a> = lines
        .iter()
        .map(|line| trim_line(line.as_ref()))
        .take_while(|line| !line.is_empty())
        .collect();

    if para.is_empty() {
        return None;
    }

    let consumed = para.len();
    Some((Block::Paragraph { lines: para }, consumed))
}

//! Delimited span scanning.
//!
//! Finds `open ... close` spans the way a lazy `open(.*?)close` pattern
//! would: leftmost opener first, nearest closer on the same line, no
//! overlap between matches.

use memchr::memmem;

/// Replace every `open ... close` span in `text`.
///
/// `rewrite` receives the text between the delimiters and appends the
/// replacement to the output. Text outside matched spans is copied
/// unchanged. An opener whose line holds no closer is left as literal
/// text and scanning resumes one byte later.
///
/// Both delimiters must be non-empty ASCII, which keeps every match
/// boundary on a char boundary.
pub fn replace_spans<F>(text: &str, open: &str, close: &str, mut rewrite: F) -> String
where
    F: FnMut(&str, &mut String),
{
    debug_assert!(!open.is_empty() && open.is_ascii());
    debug_assert!(!close.is_empty() && close.is_ascii());

    let bytes = text.as_bytes();
    let open_finder = memmem::Finder::new(open);
    let close_finder = memmem::Finder::new(close);

    let mut out = String::with_capacity(text.len());
    // End of the text already copied to `out`
    let mut copied = 0;
    let mut search = 0;

    while let Some(found) = open_finder.find(&bytes[search..]) {
        let start = search + found;
        let inner_start = start + open.len();

        match find_closer(bytes, inner_start, &close_finder) {
            Some(inner_end) => {
                out.push_str(&text[copied..start]);
                rewrite(&text[inner_start..inner_end], &mut out);
                copied = inner_end + close.len();
                search = copied;
            }
            None => search = start + 1,
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// Find the first closer at or after `from`, without crossing a newline.
#[inline]
fn find_closer(bytes: &[u8], from: usize, finder: &memmem::Finder<'_>) -> Option<usize> {
    let line_end = memchr::memchr(b'\n', &bytes[from..]).map_or(bytes.len(), |n| from + n);
    finder.find(&bytes[from..line_end]).map(|n| from + n)
}

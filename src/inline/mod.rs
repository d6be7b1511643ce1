//! Inline transformer.
//!
//! Inline markup is rewritten by four whole-string passes, always in
//! the same order. Each pass sees the output of the previous one:
//! 1. `**X**` becomes `<b>X</b>`
//! 2. `__X__` becomes `<em>X</em>`
//! 3. `[[X]]` becomes the lowercase hex MD5 digest of `X`
//! 4. `((X))` becomes `X` without any `c` or `C`
//!
//! Matching is lazy and line-local. There is no escape syntax, and text
//! that fails to match is left as it is.

mod digest;
mod scan;

pub use digest::{md5_hex, strip_c};
pub use scan::replace_spans;

/// One substitution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineRule {
    /// `**X**` to `<b>X</b>`.
    Bold,
    /// `__X__` to `<em>X</em>`.
    Emphasis,
    /// `[[X]]` to the MD5 digest of `X`.
    Digest,
    /// `((X))` to `X` with `c`/`C` removed.
    StripC,
}

/// Passes in application order.
pub const PIPELINE: [InlineRule; 4] = [
    InlineRule::Bold,
    InlineRule::Emphasis,
    InlineRule::Digest,
    InlineRule::StripC,
];

impl InlineRule {
    /// Opening delimiter.
    pub fn opener(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Emphasis => "__",
            Self::Digest => "[[",
            Self::StripC => "((",
        }
    }

    /// Closing delimiter.
    pub fn closer(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Emphasis => "__",
            Self::Digest => "]]",
            Self::StripC => "))",
        }
    }

    /// Run this pass over `text`, replacing every matching span.
    pub fn apply(self, text: &str) -> String {
        replace_spans(text, self.opener(), self.closer(), |inner, out| match self {
            Self::Bold => wrap(out, "b", inner),
            Self::Emphasis => wrap(out, "em", inner),
            Self::Digest => out.push_str(&md5_hex(inner)),
            Self::StripC => out.push_str(&strip_c(inner)),
        })
    }
}

/// Apply every inline pass to `text`, in order.
///
/// # Example
/// ```
/// use markhash::inline::transform;
///
/// assert_eq!(transform("**bold** and __em__"), "<b>bold</b> and <em>em</em>");
/// assert_eq!(transform("((Cocoa))"), "ooa");
/// ```
pub fn transform(text: &str) -> String {
    let mut out = text.to_owned();
    for rule in PIPELINE {
        out = rule.apply(&out);
    }
    out
}

#[inline]
fn wrap(out: &mut String, tag: &str, inner: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(inner);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

//! Content transforms for the `[[...]]` and `((...))` spans.

use md5::{Digest, Md5};

/// Lowercase hex MD5 digest of the UTF-8 bytes of `text`.
pub fn md5_hex(text: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// `text` with every `c` and `C` removed.
pub fn strip_c(text: &str) -> String {
    text.chars().filter(|&ch| ch != 'c' && ch != 'C').collect()
}

use markhash::{to_html, to_html_fragments, transform};
use proptest::prelude::*;

proptest! {
    #[test]
    fn plain_text_is_unchanged(text in "[a-zA-Z0-9 ,.!?;:'-]{0,80}") {
        prop_assert_eq!(transform(&text), text);
    }

    #[test]
    fn blank_lines_produce_no_fragments(lines in prop::collection::vec("[ \t]{0,4}\n", 0..20)) {
        prop_assert!(to_html_fragments(&lines).is_empty());
    }

    #[test]
    fn strip_span_leaves_no_c(inner in "[a-zA-Z ]{0,40}") {
        let out = transform(&format!("(({inner}))"));
        prop_assert!(!out.contains(['c', 'C']));
        prop_assert_eq!(out.len(), inner.len() - inner.matches(['c', 'C']).count());
    }

    #[test]
    fn digest_span_is_32_hex_chars(inner in "[a-zA-Z0-9 ]{0,40}") {
        let out = transform(&format!("[[{inner}]]"));
        prop_assert_eq!(out.len(), 32);
        prop_assert!(out.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    #[test]
    fn bold_wraps_plain_content(inner in "[a-zA-Z0-9 ]{0,40}") {
        prop_assert_eq!(transform(&format!("**{inner}**")), format!("<b>{inner}</b>"));
    }

    #[test]
    fn output_ends_with_newline(input in "[-*#a-z \n]{1,200}") {
        let html = to_html(&input);
        prop_assert!(html.is_empty() || html.ends_with('\n'));
    }

    #[test]
    fn never_panics(input in "\\PC{0,200}") {
        let _ = to_html(&input);
    }
}

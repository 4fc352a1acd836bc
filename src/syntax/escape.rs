// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Entity escaping and its inverse.
//!
//! Highlighted output only ever contains `<` and `>` as part of style markers,
//! so stripping every tag and un-escaping recovers the original source.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static MARKER_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Escapes `&`, `<` and `>`. `&` goes first so entities are never doubled.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Reverses [`escape_html`]. `&amp;` goes last for the same reason.
pub fn unescape_html(text: &str) -> String {
    text.replace("&lt;", "<").replace("&gt;", ">").replace("&amp;", "&")
}

/// Removes every tag from highlighted output.
pub fn strip_markers(marked: &str) -> String {
    MARKER_TAG.replace_all(marked, "").into_owned()
}

/// Recovers the source text from highlighted output.
pub fn to_plain_text(marked: &str) -> String {
    unescape_html(&strip_markers(marked))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<div>"), "&lt;div&gt;");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_unescape_is_inverse() {
        for s in ["&lt;", "a && b", "<<>>", "x &amp; y", "plain"] {
            assert_eq!(unescape_html(&escape_html(s)), s);
        }
    }

    #[test]
    fn test_strip_markers() {
        let marked = r#"<span class="tok-kw">const</span> x = &lt;b&gt;"#;
        assert_eq!(strip_markers(marked), "const x = &lt;b&gt;");
        assert_eq!(to_plain_text(marked), "const x = <b>");
    }
}

//! Text helpers shared by the analyzer and the renderers.

use std::borrow::Cow;

/// Fold text for matching: drop diacritics, lowercase, collapse whitespace.
///
/// `"  Café   Straße"` becomes `"cafe straße"`, so ASCII queries find accented
/// pages. Without the `unicode-normalization` feature only case and
/// whitespace are folded.
pub fn normalize(value: &str) -> String {
    strip_marks(value)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decompose to NFD and drop every combining mark.
#[cfg(feature = "unicode-normalization")]
fn strip_marks(value: &str) -> Cow<'_, str> {
    use unicode_normalization::char::is_combining_mark;
    use unicode_normalization::UnicodeNormalization;

    if value.is_ascii() {
        return Cow::Borrowed(value);
    }
    Cow::Owned(value.nfd().filter(|&c| !is_combining_mark(c)).collect())
}

#[cfg(not(feature = "unicode-normalization"))]
fn strip_marks(value: &str) -> Cow<'_, str> {
    Cow::Borrowed(value)
}

/// Escape text for inclusion in HTML element content or a quoted attribute.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

//! The markup the annotator and reflow formatter emit, and how to remove it.

use std::borrow::Cow;
use std::sync::LazyLock;

use lingo_core::WordformRecord;
use regex::Regex;

pub const LINE_BREAK: &str = "<br>";
pub const PARAGRAPH_OPEN: &str = "<p>";
pub const BLANK_PARAGRAPH_OPEN: &str = "<p class=\"blank\">";
pub const PARAGRAPH_CLOSE: &str = "</p>";
pub const LINK_CLOSE: &str = "</a>";

/// A single tag: `<` followed by a letter or `/`. A bare `<` in prose is not a tag.
pub static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^<>]*>").expect("tag pattern is valid"));

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
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
    Cow::Owned(out)
}

/// Append a wordform link showing `display` verbatim.
pub fn push_link(out: &mut String, class: &str, record: &WordformRecord, display: &str) {
    out.push_str("<a class=\"");
    out.push_str(&escape_attr(class));
    out.push_str("\" data-wordform=\"");
    out.push_str(&escape_attr(&record.surface_form));
    out.push_str("\" data-lemma=\"");
    out.push_str(&escape_attr(&record.lemma));
    out.push_str("\" data-translations=\"");
    out.push_str(&escape_attr(&record.translations.join("; ")));
    out.push('"');
    if let Some(word) = &record.translated_word {
        out.push_str(" data-translation=\"");
        out.push_str(&escape_attr(word));
        out.push('"');
    }
    out.push('>');
    out.push_str(display);
    out.push_str(LINK_CLOSE);
}

/// Remove every tag, leaving the displayed text.
pub fn strip_markup(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

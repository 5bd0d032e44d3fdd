//! Paragraph splitting and greedy line wrapping of annotated text.
//!
//! Wordform links written by the annotator are atomic: a line break never
//! lands inside one, and the link counts as wide as its visible text. Any
//! other tag, including an `<a>` that was already in the input, is a
//! zero-width token and the words around it wrap normally. Whitespace never
//! starts a new line, so the text stays intact and only `<br>`, `<p>` and
//! `</p>` are added.

use std::sync::LazyLock;

use regex::Regex;

use crate::markup::{
    BLANK_PARAGRAPH_OPEN, LINE_BREAK, PARAGRAPH_CLOSE, PARAGRAPH_OPEN, TAG,
};

pub const PARAGRAPH_DELIMITER: &str = "\n\n";

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?P<link><a class="[^"]*" data-wordform="[^"]*"[^<>]*>[^<]*</a>)"#,
        r"|(?P<tag></?[A-Za-z][^<>]*>)",
        r"|(?P<space>\s+)",
        r"|(?P<word>[^\s<]+|<)",
    ))
    .expect("token pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// Atomic markup with the width of its visible text
    Markup(&'a str, usize),
    Space(&'a str),
    Word(&'a str),
}

fn tokenize(paragraph: &str) -> Vec<Token<'_>> {
    TOKEN
        .captures_iter(paragraph)
        .filter_map(|caps| {
            if let Some(link) = caps.name("link") {
                let visible = TAG.replace_all(link.as_str(), "");
                Some(Token::Markup(link.as_str(), visible.chars().count()))
            } else if let Some(tag) = caps.name("tag") {
                Some(Token::Markup(tag.as_str(), 0))
            } else if let Some(space) = caps.name("space") {
                Some(Token::Space(space.as_str()))
            } else {
                caps.name("word").map(|word| Token::Word(word.as_str()))
            }
        })
        .collect()
}

/// Greedy wrap: a visible token that would push a non-empty line past
/// `max_width` starts a new line.
fn wrap(paragraph: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut width = 0;

    for token in tokenize(paragraph) {
        let (text, token_width, breakable) = match token {
            Token::Markup(text, w) => (text, w, w > 0),
            Token::Space(text) => (text, text.chars().count(), false),
            Token::Word(text) => (text, text.chars().count(), true),
        };

        if breakable && width > 0 && width + token_width > max_width {
            lines.push(std::mem::take(&mut line));
            width = 0;
        }
        line.push_str(text);
        width += token_width;
    }

    lines.push(line);
    lines
}

/// Wrap annotated text into `<p>` paragraphs of lines joined by `<br>`.
///
/// Paragraphs are separated by a blank line. Whitespace-only paragraphs are
/// kept as `<p class="blank">`, empty ones are dropped.
pub fn reflow(annotated_text: &str, max_line_width: usize) -> String {
    let mut paragraphs = Vec::new();

    for paragraph in annotated_text.split(PARAGRAPH_DELIMITER) {
        if paragraph.is_empty() {
            continue;
        }
        if paragraph.trim().is_empty() {
            paragraphs.push(format!("{BLANK_PARAGRAPH_OPEN}{paragraph}{PARAGRAPH_CLOSE}"));
            continue;
        }
        let lines = wrap(paragraph, max_line_width);
        paragraphs.push(format!(
            "{PARAGRAPH_OPEN}{}{PARAGRAPH_CLOSE}",
            lines.join(LINE_BREAK)
        ));
    }

    paragraphs.join(PARAGRAPH_DELIMITER)
}

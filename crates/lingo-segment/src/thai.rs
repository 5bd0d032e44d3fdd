//! Specialized backend for Thai.
//!
//! The tokenizer only hands back strings, so offsets are recovered by
//! searching for each token from a cursor that only moves forward. Text the
//! tokenizer skipped becomes a non-wordlike gap span, and a token that cannot
//! be found costs exactly one character, so the scan always terminates.

use lingo_core::{ExternalTokenizer, Span, SpanBuilder, TokenizeError};

pub fn segment(text: &str, tokenizer: &dyn ExternalTokenizer) -> Result<Vec<Span>, TokenizeError> {
    let tokens = tokenizer.tokenize(text)?;
    tracing::trace!(tokenizer = tokenizer.name(), tokens = tokens.len(), "thai tokenization");
    Ok(align_tokens(text, &tokens))
}

/// Rebuild contiguous spans from a token list over `text`.
pub fn align_tokens<S: AsRef<str>>(text: &str, tokens: &[S]) -> Vec<Span> {
    let mut builder = SpanBuilder::new(text);

    for token in tokens {
        let token = token.as_ref();
        let cursor = builder.position();
        if cursor >= text.len() {
            break;
        }
        if token.is_empty() {
            continue;
        }

        match text[cursor..].find(token) {
            Some(offset) => {
                let start = cursor + offset;
                builder.push(start, false);
                builder.push(start + token.len(), contains_thai(token));
            }
            None => {
                let step = text[cursor..].chars().next().map_or(0, char::len_utf8);
                builder.push(cursor + step, false);
            }
        }
    }

    builder.finish()
}

/// Thai block, U+0E00..=U+0E7F
fn contains_thai(token: &str) -> bool {
    token.chars().any(|c| matches!(c, '\u{0E00}'..='\u{0E7F}'))
}

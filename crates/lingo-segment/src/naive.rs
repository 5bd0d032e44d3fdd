//! Last-resort segmentation by character class.
//!
//! Whitespace runs and runs of alphanumerics/underscore become single spans;
//! every other character stands alone. Scripts written without spaces (Thai,
//! Chinese, Japanese) come out as one span per sentence, which is why the
//! selector avoids this backend for them when anything better is available.

use lingo_core::{Span, SpanBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Space,
    Word,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Space
        } else if c.is_alphanumeric() || c == '_' {
            CharClass::Word
        } else {
            CharClass::Other
        }
    }
}

pub fn segment(text: &str) -> Vec<Span> {
    let mut builder = SpanBuilder::new(text);
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        let class = CharClass::of(c);
        let mut end = start + c.len_utf8();

        if class != CharClass::Other {
            while let Some(&(i, next)) = chars.peek() {
                if CharClass::of(next) != class {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
        }

        builder.push(end, class == CharClass::Word);
    }

    builder.finish()
}

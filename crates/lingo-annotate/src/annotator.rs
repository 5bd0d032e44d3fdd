use std::collections::BTreeSet;

use lingo_core::{AnnotationResult, Match};

use crate::markup;

/// Wraps accepted matches in wordform links.
#[derive(Debug, Clone)]
pub struct Annotator {
    link_class: String,
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new("word-link")
    }
}

impl Annotator {
    pub fn new(link_class: impl Into<String>) -> Self {
        Self {
            link_class: link_class.into(),
        }
    }

    /// Emit `text` with each match wrapped in a link.
    ///
    /// `matches` must use codepoint offsets into `text`, as produced by
    /// [`crate::find_matches`] on the same text. `text` is emitted as given,
    /// normalized or not. Matches that are out of order, overlapping or out
    /// of range are skipped.
    pub fn annotate(&self, text: &str, matches: &[Match<'_>]) -> AnnotationResult {
        let mut found_wordforms = BTreeSet::new();
        if matches.is_empty() {
            return AnnotationResult {
                annotated_text: text.to_string(),
                found_wordforms,
            };
        }

        // byte offset of every codepoint, plus the end
        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_len = offsets.len() - 1;

        let mut out = String::with_capacity(text.len() + matches.len() * 96);
        let mut cursor = 0;

        for m in matches {
            if m.start < cursor || m.start >= m.end || m.end > char_len {
                tracing::debug!(start = m.start, end = m.end, "skipping unusable match");
                continue;
            }
            out.push_str(&text[offsets[cursor]..offsets[m.start]]);
            let display = &text[offsets[m.start]..offsets[m.end]];
            markup::push_link(&mut out, &self.link_class, m.record, display);
            found_wordforms.insert(m.record.surface_form.clone());
            cursor = m.end;
        }
        out.push_str(&text[offsets[cursor]..]);

        AnnotationResult {
            annotated_text: out,
            found_wordforms,
        }
    }
}

//! Locates known wordforms in text.
//!
//! Comparison happens on the folded NFC form of the text (see
//! [`lingo_core::fold`]) while offsets are reported against the text as
//! given, so every match keeps the casing and accents the author typed. Longer surface forms claim text first; a later
//! candidate can only take positions nobody claimed.
//!
//! Word boundaries come from a plain alphanumeric test rather than a
//! segmentation backend. In scripts written without spaces (Thai, Chinese,
//! Japanese) a whole run of letters counts as one word, so a known word in
//! the middle of such a run is not matched.

use std::collections::BTreeMap;

use lingo_core::normalize::fold_char;
use lingo_core::{Match, WordformRecord, fold, normalize, normalize_with_origins};
use unicode_normalization::char::is_combining_mark;

/// Find every accepted occurrence of `records` in `text`, sorted by start.
///
/// Offsets are codepoint positions in `text` itself, even when `text` is not
/// in NFC, and `Match::text` is the slice found there. Ties between equally
/// long surface forms go to the record listed first.
pub fn find_matches<'a>(text: &str, records: &'a [WordformRecord]) -> Vec<Match<'a>> {
    if records.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let original: Vec<char> = text.chars().collect();
    let (text, origins) = normalize_with_origins(text);
    let chars: Vec<char> = text.chars().collect();
    let index = FoldedText::new(&chars);

    let mut candidates: Vec<Candidate<'a>> = records.iter().filter_map(Candidate::new).collect();
    // stable: equal lengths keep input order
    candidates.sort_by(|a, b| b.len.cmp(&a.len));

    let mut claimed = Claimed::default();
    let mut matches = Vec::new();

    for candidate in &candidates {
        let key = candidate.key.as_str();
        let mut from = 0;

        while let Some(offset) = index.folded[from..].find(key) {
            let folded_start = from + offset;
            let folded_end = folded_start + key.len();

            if let Some((start, end)) = index.char_range(folded_start, folded_end) {
                let (orig_start, orig_end) = (origins[start], origins[end]);
                if orig_start < orig_end
                    && is_boundary(&chars, start)
                    && is_boundary(&chars, end)
                    && claimed.claim(start, end)
                {
                    matches.push(Match {
                        start: orig_start,
                        end: orig_end,
                        text: original[orig_start..orig_end].iter().collect(),
                        record: candidate.record,
                    });
                }
            }

            from = folded_start
                + index.folded[folded_start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
        }
    }

    matches.sort_by_key(|m| m.start);
    tracing::debug!(
        records = records.len(),
        candidates = candidates.len(),
        matches = matches.len(),
        "wordform matching done"
    );
    matches
}

struct Candidate<'a> {
    record: &'a WordformRecord,
    key: String,
    /// Codepoints in the NFC surface form
    len: usize,
}

impl<'a> Candidate<'a> {
    fn new(record: &'a WordformRecord) -> Option<Self> {
        let surface = normalize(&record.surface_form);
        let key = fold(&surface);
        if key.is_empty() {
            return None;
        }
        Some(Self {
            record,
            key,
            len: surface.chars().count(),
        })
    }
}

/// Folded copy of the text with a table back to character positions.
struct FoldedText {
    folded: String,
    /// `starts[i]` is the folded byte offset where character `i` begins;
    /// `starts[n]` is the folded length.
    starts: Vec<usize>,
}

impl FoldedText {
    fn new(chars: &[char]) -> Self {
        let mut folded = String::with_capacity(chars.len());
        let mut starts = Vec::with_capacity(chars.len() + 1);
        for c in chars {
            starts.push(folded.len());
            fold_char(*c, &mut folded);
        }
        starts.push(folded.len());
        Self { folded, starts }
    }

    /// Character range for a folded byte range, if both ends fall on
    /// character boundaries. Characters that fold to nothing (stray
    /// diacritics) stick to the character before them.
    fn char_range(&self, folded_start: usize, folded_end: usize) -> Option<(usize, usize)> {
        let start = self.last_char_at(folded_start)?;
        let end = self.last_char_at(folded_end)?;
        Some((start, end))
    }

    fn last_char_at(&self, offset: usize) -> Option<usize> {
        let i = self.starts.partition_point(|&s| s <= offset).checked_sub(1)?;
        (self.starts[i] == offset).then_some(i)
    }
}

/// Accepted character ranges keyed by start
#[derive(Default)]
struct Claimed(BTreeMap<usize, usize>);

impl Claimed {
    /// Claim `[start, end)` unless it overlaps an earlier claim.
    fn claim(&mut self, start: usize, end: usize) -> bool {
        if let Some((_, &prev_end)) = self.0.range(..end).next_back() {
            if prev_end > start {
                return false;
            }
        }
        self.0.insert(start, end);
        true
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_combining_mark(c)
}

/// A boundary is any position not between two word characters.
fn is_boundary(chars: &[char], pos: usize) -> bool {
    if pos == 0 || pos >= chars.len() {
        return true;
    }
    !(is_word_char(chars[pos - 1]) && is_word_char(chars[pos]))
}

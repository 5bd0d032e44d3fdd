use std::borrow::Cow;

use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::{IsNormalized, UnicodeNormalization, is_nfc_quick};

/// Canonical composition (NFC). Input that is already composed is borrowed.
pub fn normalize(text: &str) -> Cow<'_, str> {
    match is_nfc_quick(text.chars()) {
        IsNormalized::Yes => Cow::Borrowed(text),
        _ => Cow::Owned(text.nfc().collect()),
    }
}

/// NFC text plus, for every character boundary of it, the matching
/// character boundary in `text`.
///
/// `origins[i]` is the position in `text` (in codepoints) where NFC
/// character `i` starts, and the last entry is the length of `text`. The
/// table never decreases. Where composition merged several characters into
/// one, the boundaries inside the merged run all map to the end of the run.
pub fn normalize_with_origins(text: &str) -> (Cow<'_, str>, Vec<usize>) {
    if let IsNormalized::Yes = is_nfc_quick(text.chars()) {
        let len = text.chars().count();
        return (Cow::Borrowed(text), (0..=len).collect());
    }

    let mut out = String::with_capacity(text.len());
    let mut origins = Vec::with_capacity(text.len() + 1);
    let mut run = Run::default();

    for (start, cluster) in clusters(text) {
        if run.text.is_empty() {
            run.start = start;
        } else if composes_across(&run.text, cluster) {
            // the boundary would change the result, keep one run
        } else {
            run.flush(&mut out, &mut origins);
            run.start = start;
        }
        run.text.push_str(cluster);
    }
    run.flush(&mut out, &mut origins);
    origins.push(text.chars().count());

    (Cow::Owned(out), origins)
}

/// Original characters not yet normalized
#[derive(Default)]
struct Run {
    text: String,
    start: usize,
}

impl Run {
    fn flush(&mut self, out: &mut String, origins: &mut Vec<usize>) {
        if self.text.is_empty() {
            return;
        }
        let len = self.text.chars().count();
        let composed: String = self.text.nfc().collect();
        if composed == self.text {
            origins.extend(self.start..self.start + len);
        } else {
            for i in 0..composed.chars().count() {
                origins.push(if i == 0 { self.start } else { self.start + len });
            }
        }
        out.push_str(&composed);
        self.text.clear();
    }
}

/// A starter with the non-starters that follow it, with the codepoint
/// position of the starter.
fn clusters(text: &str) -> Vec<(usize, &str)> {
    let mut clusters = Vec::new();
    let mut begin = 0;
    let mut begin_char = 0;
    for (pos, (byte, c)) in text.char_indices().enumerate() {
        if pos > 0 && canonical_combining_class(c) == 0 {
            clusters.push((begin_char, &text[begin..byte]));
            begin = byte;
            begin_char = pos;
        }
    }
    if begin < text.len() {
        clusters.push((begin_char, &text[begin..]));
    }
    clusters
}

fn composes_across(left: &str, right: &str) -> bool {
    let joined: String = left.chars().chain(right.chars()).nfc().collect();
    let separate: String = left.nfc().chain(right.nfc()).collect();
    joined != separate
}

/// Decode raw bytes, substituting U+FFFD for undecodable sequences, then normalize.
///
/// Garbled input never fails; the rest of the document still renders.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(bytes);
    normalize(&decoded).into_owned()
}

/// Case and accent insensitive comparison key.
///
/// Only for equality checks. The output length has no relation to the input
/// length, so never slice the original text with offsets taken from here.
pub fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        fold_char(c, &mut out);
    }
    out
}

/// Append the fold of a single character to `out`.
///
/// `fold(s)` is exactly the concatenation of `fold_char` over the characters of
/// `s`, which lets callers build per-character offset tables.
pub fn fold_char(c: char, out: &mut String) {
    for lower in case_fold(c) {
        out.extend(
            std::iter::once(lower)
                .nfd()
                .filter(|d| !is_folded_diacritic(*d)),
        );
    }
}

fn case_fold(c: char) -> impl Iterator<Item = char> {
    // final sigma compares equal to medial sigma
    let c = if c == 'ς' { 'σ' } else { c };
    c.to_lowercase()
}

/// Combining Diacritical Marks (U+0300..=U+036F).
///
/// Vowel signs and tone marks of other scripts are not in this block and are
/// kept, since dropping them changes the word.
pub fn is_folded_diacritic(c: char) -> bool {
    matches!(c, '\u{0300}'..='\u{036F}')
}

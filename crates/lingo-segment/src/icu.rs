//! Rule and dictionary based word breaking (UAX #29 plus ICU4X dictionaries
//! for scripts written without spaces).
//!
//! The language code is passed to ICU4X as the content locale, which selects
//! tailored rules where ICU4X has them. Codes that do not parse as a language
//! identifier get the root rules.

use lingo_core::Span;
#[cfg(feature = "icu")]
use lingo_core::SpanBuilder;

#[cfg(feature = "icu")]
use icu_locale_core::LanguageIdentifier;
#[cfg(feature = "icu")]
use icu_segmenter::options::{WordBreakInvariantOptions, WordBreakOptions};
#[cfg(feature = "icu")]
use icu_segmenter::{WordSegmenter, WordSegmenterBorrowed};

#[cfg(feature = "icu")]
pub fn segment(text: &str, locale: &str) -> Vec<Span> {
    tracing::trace!(locale, len = text.len(), "icu segmentation");
    let content_locale = content_locale(locale);
    let mut options = WordBreakOptions::default();
    options.content_locale = content_locale.as_ref();

    match WordSegmenter::try_new_auto(options) {
        Ok(segmenter) => split(text, segmenter.as_borrowed()),
        Err(e) => {
            tracing::debug!(locale, "locale-specific word breaking unavailable: {e}");
            split(
                text,
                WordSegmenter::new_auto(WordBreakInvariantOptions::default()),
            )
        }
    }
}

/// `th-TH` and `pt_BR` style codes; anything else is treated as unknown.
#[cfg(feature = "icu")]
fn content_locale(locale: &str) -> Option<LanguageIdentifier> {
    let code = locale.trim().replace('_', "-");
    if code.is_empty() {
        return None;
    }
    match code.parse::<LanguageIdentifier>() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::debug!(locale, "not a language identifier, using root word breaking");
            None
        }
    }
}

#[cfg(feature = "icu")]
fn split(text: &str, segmenter: WordSegmenterBorrowed<'_>) -> Vec<Span> {
    let mut builder = SpanBuilder::new(text);
    // each breakpoint closes the segment before it
    for (end, word_type) in segmenter.segment_str(text).iter_with_word_type() {
        builder.push(end, word_type.is_word_like());
    }
    builder.finish()
}

#[cfg(not(feature = "icu"))]
pub fn segment(text: &str, locale: &str) -> Vec<Span> {
    tracing::warn!(locale, "icu backend not compiled in, using naive segmentation");
    crate::naive::segment(text)
}

/// Smoke test run once at start-up
#[cfg(feature = "icu")]
pub fn probe() -> bool {
    let spans = segment("probe text", "en");
    spans.len() == 3 && spans[0].is_wordlike
}

#[cfg(not(feature = "icu"))]
pub fn probe() -> bool {
    false
}

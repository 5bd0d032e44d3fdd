use std::collections::HashSet;

use lingo_config::segmenter::SegmenterConfig;
use lingo_core::{BackendId, ExternalTokenizer, SegmentError, Span, decode_lossy, normalize};

use crate::availability::Availability;
use crate::command::CommandTokenizer;
use crate::selector::{choose_backend, resolve_default};
use crate::{icu, naive, thai};

/// Segmentation entry point.
///
/// Configuration and availability are fixed at construction; every call is
/// independent and needs no locking.
pub struct Segmenter {
    config: SegmenterConfig,
    availability: Availability,
    thai_tokenizer: Option<Box<dyn ExternalTokenizer>>,
}

impl Segmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        let thai_tokenizer = default_thai_tokenizer(&config);
        let availability = Availability {
            thai: thai_tokenizer.is_some(),
            ..Availability::probe()
        };

        Self {
            config,
            availability,
            thai_tokenizer,
        }
    }

    /// Replace the tokenizer behind the specialized backend
    pub fn with_tokenizer(mut self, tokenizer: impl ExternalTokenizer + 'static) -> Self {
        self.thai_tokenizer = Some(Box::new(tokenizer));
        self.availability.thai = true;
        self
    }

    /// Override the start-up probe. The specialized backend still needs a
    /// tokenizer to count as available.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = Availability {
            icu: availability.icu,
            thai: availability.thai && self.thai_tokenizer.is_some(),
        };
        self
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn choose(
        &self,
        language: &str,
        explicit: Option<BackendId>,
    ) -> Result<BackendId, SegmentError> {
        choose_backend(language, explicit, &self.config, self.availability)
    }

    /// Split `text` into spans covering its NFC form.
    ///
    /// Fails only when `explicit` names a backend that is not available.
    pub fn segment(
        &self,
        text: &str,
        language: &str,
        explicit: Option<BackendId>,
    ) -> Result<Vec<Span>, SegmentError> {
        let backend = self.choose(language, explicit)?;
        let text = normalize(text);
        Ok(self.run(&text, language, backend))
    }

    /// Like [`Segmenter::segment`] for raw bytes; invalid UTF-8 is replaced.
    pub fn segment_bytes(
        &self,
        bytes: &[u8],
        language: &str,
        explicit: Option<BackendId>,
    ) -> Result<Vec<Span>, SegmentError> {
        self.segment(&decode_lossy(bytes), language, explicit)
    }

    /// Distinct word-like spans, in order of first appearance
    pub fn word_tokens(
        &self,
        text: &str,
        language: &str,
        explicit: Option<BackendId>,
    ) -> Result<Vec<String>, SegmentError> {
        let mut seen = HashSet::new();
        Ok(self
            .segment(text, language, explicit)?
            .into_iter()
            .filter(|span| span.is_wordlike)
            .filter(|span| seen.insert(span.text.clone()))
            .map(|span| span.text)
            .collect())
    }

    /// Run a chosen backend over already normalized text.
    pub fn run(&self, text: &str, language: &str, backend: BackendId) -> Vec<Span> {
        match backend {
            BackendId::Icu => icu::segment(text, language),
            BackendId::Naive => naive::segment(text),
            BackendId::Thai => {
                let result = self
                    .thai_tokenizer
                    .as_deref()
                    .map(|tokenizer| thai::segment(text, tokenizer));
                match result {
                    Some(Ok(spans)) => spans,
                    Some(Err(e)) => {
                        tracing::warn!(language, "thai tokenizer failed, falling back: {e}");
                        self.run_without_thai(text, language)
                    }
                    None => self.run_without_thai(text, language),
                }
            }
        }
    }

    fn run_without_thai(&self, text: &str, language: &str) -> Vec<Span> {
        let availability = self.availability.without(BackendId::Thai);
        let backend = resolve_default(language, &self.config, availability);
        // never Thai again, so this recursion is one level deep
        self.run(text, language, backend)
    }
}

fn default_thai_tokenizer(config: &SegmenterConfig) -> Option<Box<dyn ExternalTokenizer>> {
    if let Some(command) = config.thai_command.as_deref() {
        if let Some(tokenizer) = CommandTokenizer::new(command) {
            tracing::info!("Using external Thai tokenizer: {}", tokenizer.name());
            return Some(Box::new(tokenizer));
        }
    }
    builtin_thai_tokenizer(config)
}

#[cfg(feature = "thai")]
fn builtin_thai_tokenizer(config: &SegmenterConfig) -> Option<Box<dyn ExternalTokenizer>> {
    let tokenizer = lingo_lang_thai::ThaiTokenizer::with_additional_dicts(
        &config.thai_dictionary_paths,
    );
    Some(Box::new(tokenizer))
}

#[cfg(not(feature = "thai"))]
fn builtin_thai_tokenizer(_config: &SegmenterConfig) -> Option<Box<dyn ExternalTokenizer>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingo_core::TokenizeError;
    use proptest::prelude::*;

    struct FailingTokenizer;

    impl ExternalTokenizer for FailingTokenizer {
        fn name(&self) -> &str {
            "failing"
        }

        fn tokenize(&self, _text: &str) -> Result<Vec<String>, TokenizeError> {
            Err(TokenizeError::Failed("boom".to_string()))
        }
    }

    struct SpaceTokenizer;

    impl ExternalTokenizer for SpaceTokenizer {
        fn name(&self) -> &str {
            "space"
        }

        fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
            Ok(text.split(' ').map(str::to_string).collect())
        }
    }

    fn segmenter() -> Segmenter {
        Segmenter::new(SegmenterConfig::default())
            .with_tokenizer(SpaceTokenizer)
            .with_availability(Availability::ALL)
    }

    fn assert_covers(spans: &[Span], text: &str) {
        let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, text);
        let mut expected_start = 0;
        for span in spans {
            assert_eq!(span.start, expected_start);
            assert_eq!(span.end - span.start, span.text.chars().count());
            expected_start = span.end;
        }
        assert_eq!(expected_start, text.chars().count());
    }

    #[test]
    fn segment_normalizes_first() {
        let spans = segmenter()
            .segment("cafe\u{0301} noir", "fr", Some(BackendId::Naive))
            .unwrap();
        assert_eq!(spans[0].text, "café");
        assert_eq!(spans[0].end, 4);
    }

    #[test]
    fn explicit_unavailable_backend_fails() {
        let segmenter = segmenter().with_availability(Availability::NAIVE_ONLY);
        let err = segmenter
            .segment("text", "en", Some(BackendId::Icu))
            .unwrap_err();
        assert!(matches!(err, SegmentError::BackendUnavailable { .. }));
    }

    #[test]
    fn tokenizer_failure_falls_back() {
        let segmenter = Segmenter::new(SegmenterConfig::default())
            .with_tokenizer(FailingTokenizer)
            .with_availability(Availability {
                icu: false,
                thai: true,
            });
        assert_eq!(segmenter.choose("th", None).unwrap(), BackendId::Thai);

        let spans = segmenter.segment("ผม ชอบ", "th", None).unwrap();
        assert_eq!(spans, naive::segment("ผม ชอบ"));
    }

    #[test]
    fn thai_without_tokenizer_is_unavailable() {
        let mut config = SegmenterConfig::default();
        config.thai_command = None;
        let mut segmenter = Segmenter::new(config);
        segmenter.thai_tokenizer = None;
        let segmenter = segmenter.with_availability(Availability::ALL);
        assert!(!segmenter.availability().thai);
    }

    #[cfg(feature = "thai")]
    #[test]
    fn builtin_thai_tokenizer_by_default() {
        let segmenter = Segmenter::new(SegmenterConfig::default());
        assert!(segmenter.availability().thai);
        let spans = segmenter
            .segment("ผมชอบแมว", "th", Some(BackendId::Thai))
            .unwrap();
        let words: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(words, vec!["ผม", "ชอบ", "แมว"]);
    }

    #[test]
    fn empty_text_yields_no_spans() {
        let segmenter = segmenter();
        for backend in BackendId::ALL {
            assert!(segmenter.run("", "en", backend).is_empty());
        }
    }

    #[test]
    fn segment_bytes_replaces_garbage() {
        let spans = segmenter()
            .segment_bytes(b"ok\xFFgo", "en", Some(BackendId::Naive))
            .unwrap();
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["ok", "\u{FFFD}", "go"]);
    }

    #[test]
    fn word_tokens_are_distinct() {
        let tokens = segmenter()
            .word_tokens("the cat and the hat", "en", Some(BackendId::Naive))
            .unwrap();
        assert_eq!(tokens, vec!["the", "cat", "and", "hat"]);
    }

    proptest! {
        #[test]
        fn every_backend_covers_input(text in "[a-zα-ωก-ฮ่้ \\.,!_0-9\u{0301}\u{4e00}-\u{4e10}]{0,40}") {
            let segmenter = segmenter();
            let normalized = normalize(&text).into_owned();
            for backend in BackendId::ALL {
                let spans = segmenter.run(&normalized, "und", backend);
                assert_covers(&spans, &normalized);
            }
        }

        #[cfg(feature = "thai")]
        #[test]
        fn builtin_thai_tokenizer_covers_input(text in "[ก-ฮะ-ฺเ-ๅ็-๎ a-z0-9\\.!\u{0301}]{0,40}") {
            let segmenter = Segmenter::new(SegmenterConfig::default())
                .with_tokenizer(lingo_lang_thai::ThaiTokenizer::with_defaults());
            let normalized = normalize(&text).into_owned();
            let spans = segmenter.run(&normalized, "th", BackendId::Thai);
            assert_covers(&spans, &normalized);
        }

        #[test]
        fn arbitrary_unicode_is_covered(text in "\\PC{0,30}") {
            let segmenter = segmenter();
            let normalized = normalize(&text).into_owned();
            for backend in BackendId::ALL {
                assert_covers(&segmenter.run(&normalized, "und", backend), &normalized);
            }
        }
    }
}

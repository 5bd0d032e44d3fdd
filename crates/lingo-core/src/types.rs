use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SegmentError;

/// Labeled slice of normalized text.
///
/// Offsets count codepoints, not bytes. A segmentation result covers the
/// whole input: spans are contiguous and never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub is_wordlike: bool,
}

/// Known surface form of a lemma, supplied by the vocabulary store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WordformRecord {
    pub surface_form: String,
    pub lemma: String,
    #[serde(default)]
    pub translations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_word: Option<String>,
}

impl WordformRecord {
    pub fn new(surface_form: impl Into<String>, lemma: impl Into<String>) -> Self {
        Self {
            surface_form: surface_form.into(),
            lemma: lemma.into(),
            translations: Vec::new(),
            translated_word: None,
        }
    }

    pub fn with_translations<I, S>(mut self, translations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.translations = translations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_translated_word(mut self, word: impl Into<String>) -> Self {
        self.translated_word = Some(word.into());
        self
    }
}

/// Accepted occurrence of a wordform.
///
/// `start`/`end` are codepoint offsets into the text that was searched, NFC
/// or not, and `text` is the substring exactly as it appears there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match<'a> {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub record: &'a WordformRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnnotationResult {
    pub annotated_text: String,
    /// Canonical surface forms with at least one accepted match
    pub found_wordforms: BTreeSet<String>,
}

/// Segmentation backend identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendId {
    /// Locale-aware rule/dictionary word breaking
    #[serde(alias = "dictionary")]
    Icu,
    /// Dictionary tokenizer for Thai text
    #[serde(alias = "pythainlp")]
    Thai,
    /// Whitespace and character-class splitting, always available
    #[serde(alias = "fallback")]
    Naive,
}

impl BackendId {
    pub const ALL: [BackendId; 3] = [BackendId::Icu, BackendId::Thai, BackendId::Naive];

    pub fn as_str(&self) -> &'static str {
        match self {
            BackendId::Icu => "icu",
            BackendId::Thai => "thai",
            BackendId::Naive => "naive",
        }
    }
}

impl fmt::Display for BackendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendId {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "icu" | "dictionary" => Ok(BackendId::Icu),
            "thai" | "pythainlp" => Ok(BackendId::Thai),
            "naive" | "fallback" => Ok(BackendId::Naive),
            _ => Err(SegmentError::UnknownBackend(s.to_string())),
        }
    }
}

/// Builds contiguous spans from byte positions while tracking codepoint offsets.
///
/// Backends push the byte end of each piece in order; the builder slices the
/// text and converts offsets, so coverage holds by construction.
pub struct SpanBuilder<'a> {
    text: &'a str,
    spans: Vec<Span>,
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> SpanBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            spans: Vec::new(),
            byte_pos: 0,
            char_pos: 0,
        }
    }

    /// Current byte position
    pub fn position(&self) -> usize {
        self.byte_pos
    }

    /// Close a span ending at `byte_end`. Empty or backwards pieces are ignored.
    pub fn push(&mut self, byte_end: usize, is_wordlike: bool) {
        let byte_end = byte_end.min(self.text.len());
        if byte_end <= self.byte_pos {
            return;
        }
        let Some(piece) = self.text.get(self.byte_pos..byte_end) else {
            return;
        };
        let len = piece.chars().count();
        self.spans.push(Span {
            start: self.char_pos,
            end: self.char_pos + len,
            text: piece.to_string(),
            is_wordlike,
        });
        self.byte_pos = byte_end;
        self.char_pos += len;
    }

    /// Any uncovered tail becomes one non-wordlike span.
    pub fn finish(mut self) -> Vec<Span> {
        let len = self.text.len();
        self.push(len, false);
        self.spans
    }
}

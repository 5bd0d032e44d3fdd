use std::path::Path;

use lingo_core::{ExternalTokenizer, TokenizeError};

use crate::dictionary::ThaiDictionary;
use crate::is_thai;
use crate::loader::ThaiDictionaryLoader;

/// Thai word tokenizer using longest dictionary matching.
///
/// Thai runs are split into dictionary words; characters that do not start a
/// dictionary word are grouped into one unknown token. Everything else is
/// split into whitespace runs, alphanumeric runs and single characters. The
/// tokens always concatenate back to the input.
pub struct ThaiTokenizer {
    dictionary: ThaiDictionary,
}

impl ThaiTokenizer {
    pub fn new(dictionary: ThaiDictionary) -> Self {
        Self { dictionary }
    }

    /// Tokenizer over the embedded word list
    pub fn with_defaults() -> Self {
        Self::with_additional_dicts(&[])
    }

    /// Embedded word list merged with additional word list files.
    /// Files that fail to load are skipped with a warning.
    pub fn with_additional_dicts(additional_paths: &[String]) -> Self {
        let mut dict = ThaiDictionaryLoader::load_embedded();

        for path in additional_paths {
            match ThaiDictionaryLoader::load_from_file(Path::new(path)) {
                Ok(additional) => {
                    tracing::info!("Merging additional Thai word list from: {}", path);
                    dict = ThaiDictionaryLoader::merge(dict, additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load Thai word list from {}: {}", path, e);
                }
            }
        }

        Self::new(dict)
    }

    pub fn tokenize_words(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let start = i;

            if is_thai(c) {
                if let Some(len) = self.word_at(&chars, i) {
                    i += len;
                } else {
                    i += 1;
                    while i < chars.len() && is_thai(chars[i]) && self.word_at(&chars, i).is_none()
                    {
                        i += 1;
                    }
                }
            } else if c.is_whitespace() {
                i = run_end(&chars, i, char::is_whitespace);
            } else if c.is_alphanumeric() {
                i = run_end(&chars, i, |c| c.is_alphanumeric() && !is_thai(c));
            } else {
                i += 1;
            }

            tokens.push(chars[start..i].iter().collect());
        }

        tokens
    }

    /// Longest dictionary word at `pos` that is not followed by a character
    /// which cannot begin a syllable.
    fn word_at(&self, chars: &[char], pos: usize) -> Option<usize> {
        if !can_start_word(chars[pos]) {
            return None;
        }
        self.dictionary
            .prefix_lengths(&chars[pos..])
            .into_iter()
            .find(|len| chars.get(pos + len).is_none_or(|next| can_start_word(*next)))
    }
}

impl ExternalTokenizer for ThaiTokenizer {
    fn name(&self) -> &str {
        "thai-dictionary"
    }

    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        Ok(self.tokenize_words(text))
    }
}

fn run_end(chars: &[char], start: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut end = start;
    while end < chars.len() && pred(chars[end]) {
        end += 1;
    }
    end
}

/// Dependent vowels, tone marks and other signs attach to the preceding
/// consonant and never begin a word.
fn can_start_word(c: char) -> bool {
    !matches!(
        c,
        '\u{0E30}'..='\u{0E3A}' | '\u{0E45}' | '\u{0E47}'..='\u{0E4E}'
    )
}

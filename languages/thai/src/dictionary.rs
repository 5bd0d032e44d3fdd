use std::collections::HashSet;

/// Thai word set used for maximal matching
#[derive(Debug, Clone, Default)]
pub struct ThaiDictionary {
    words: HashSet<String>,
    /// Longest word in codepoints
    max_len: usize,
}

impl ThaiDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a word list: one word per line, `#` starts a comment line.
    pub fn from_word_list(text: &str) -> Self {
        let mut dict = Self::new();
        for line in text.lines() {
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            dict.insert(word);
        }
        dict
    }

    pub fn insert(&mut self, word: &str) {
        let len = word.chars().count();
        if len == 0 {
            return;
        }
        self.max_len = self.max_len.max(len);
        self.words.insert(word.to_string());
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Lengths (in codepoints) of every dictionary word that prefixes `chars`,
    /// longest first.
    pub fn prefix_lengths(&self, chars: &[char]) -> Vec<usize> {
        let limit = self.max_len.min(chars.len());
        let mut candidate = String::new();
        let mut found = Vec::new();
        for (i, c) in chars[..limit].iter().enumerate() {
            candidate.push(*c);
            if self.words.contains(&candidate) {
                found.push(i + 1);
            }
        }
        found.reverse();
        found
    }

    /// Merge another dictionary into this one
    pub fn merge(mut self, other: ThaiDictionary) -> Self {
        self.max_len = self.max_len.max(other.max_len);
        self.words.extend(other.words);
        self
    }
}

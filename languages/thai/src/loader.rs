use std::path::Path;

use lingo_core::LoadError;

use crate::dictionary::ThaiDictionary;

pub struct ThaiDictionaryLoader;

impl ThaiDictionaryLoader {
    /// Load the word list compiled into the crate
    pub fn load_embedded() -> ThaiDictionary {
        let words = include_str!("../data/words.txt");
        let dict = ThaiDictionary::from_word_list(words);
        tracing::debug!("Loaded {} embedded Thai words", dict.len());
        dict
    }

    /// Load a word list from file path
    pub fn load_from_file(path: &Path) -> Result<ThaiDictionary, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        tracing::info!("Loading Thai word list from file: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let dict = ThaiDictionary::from_word_list(&text);
        if dict.is_empty() {
            return Err(LoadError::InvalidFormat(format!(
                "{} contains no words",
                path.display()
            )));
        }
        tracing::info!("Loaded {} Thai words from file", dict.len());
        Ok(dict)
    }

    /// Merge two dictionaries
    pub fn merge(base: ThaiDictionary, additional: ThaiDictionary) -> ThaiDictionary {
        base.merge(additional)
    }
}

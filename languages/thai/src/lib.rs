pub mod dictionary;
pub mod loader;
pub mod tokenizer;

pub use dictionary::ThaiDictionary;
pub use loader::ThaiDictionaryLoader;
pub use tokenizer::ThaiTokenizer;

/// Thai block, U+0E00..=U+0E7F
pub fn is_thai(c: char) -> bool {
    matches!(c, '\u{0E00}'..='\u{0E7F}')
}

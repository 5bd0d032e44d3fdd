use std::collections::BTreeMap;

use lingo_core::BackendId;
use serde::{Deserialize, Serialize};

fn default_specialized_languages() -> BTreeMap<String, BackendId> {
    BTreeMap::from([("th".to_string(), BackendId::Thai)])
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Used when no per-language entry applies
    pub default_backend: Option<BackendId>,
    /// Per-language defaults, keyed by primary language subtag
    pub languages: BTreeMap<String, BackendId>,
    /// Languages the naive backend cannot handle, with the backend they need
    #[serde(default = "default_specialized_languages")]
    pub specialized_languages: BTreeMap<String, BackendId>,
    /// Extra word lists merged into the embedded Thai dictionary
    pub thai_dictionary_paths: Vec<String>,
    /// External tokenizer program and arguments, replacing the built-in one
    pub thai_command: Option<Vec<String>>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            default_backend: None,
            languages: BTreeMap::new(),
            specialized_languages: default_specialized_languages(),
            thai_dictionary_paths: vec![],
            thai_command: None,
        }
    }
}

impl SegmenterConfig {
    pub fn backend_for(&self, language: &str) -> Option<BackendId> {
        self.languages.get(&language_key(language)).copied()
    }

    pub fn specialized_backend(&self, language: &str) -> Option<BackendId> {
        self.specialized_languages
            .get(&language_key(language))
            .copied()
    }

    /// Rewrite map keys into [`language_key`] form, so `EL-gr` in a file
    /// matches `el` at lookup.
    pub fn normalize_keys(&mut self) {
        for map in [&mut self.languages, &mut self.specialized_languages] {
            *map = std::mem::take(map)
                .into_iter()
                .map(|(k, v)| (language_key(&k), v))
                .collect();
        }
    }
}

/// Lower-cased primary subtag: `th-TH` and `TH` both become `th`.
pub fn language_key(code: &str) -> String {
    code.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

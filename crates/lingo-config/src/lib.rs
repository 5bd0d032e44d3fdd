use std::env;
use std::fs;
use std::path::Path;

use lingo_core::{BackendId, LoadError};
use serde::{Deserialize, Serialize};

use self::annotation::AnnotationConfig;
use self::segmenter::SegmenterConfig;

pub mod annotation;
pub mod segmenter;

pub use segmenter::language_key;

const ENV_PREFIX_LANGUAGE: &str = "LINGO_SEGMENTER_";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub segmenter: SegmenterConfig,
    pub annotation: AnnotationConfig,
}

impl Config {
    /// Read a JSON config file. Missing sections fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&data)?;
        config.segmenter.normalize_keys();
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        self.apply_vars(env::vars());
    }

    /// Apply `LINGO_*` overrides from key/value pairs. Bad values are skipped.
    pub fn apply_vars<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            match key.as_str() {
                "LINGO_SEGMENTER" => {
                    if let Some(backend) = parse_backend(&key, &value) {
                        self.segmenter.default_backend = Some(backend);
                    }
                }
                "LINGO_LINE_WIDTH" => match value.trim().parse::<usize>() {
                    Ok(width) if width > 0 => self.annotation.line_width = width,
                    _ => tracing::warn!("Ignoring {key}={value}: expected a positive integer"),
                },
                "LINGO_LINK_CLASS" => self.annotation.link_class = value,
                "LINGO_THAI_DICT" => {
                    self.segmenter.thai_dictionary_paths = env::split_paths(&value)
                        .map(|p| p.display().to_string())
                        .filter(|p| !p.is_empty())
                        .collect();
                }
                "LINGO_THAI_CMD" => {
                    let command: Vec<String> =
                        value.split_whitespace().map(str::to_string).collect();
                    self.segmenter.thai_command = (!command.is_empty()).then_some(command);
                }
                _ => {
                    let Some(language) = key.strip_prefix(ENV_PREFIX_LANGUAGE) else {
                        continue;
                    };
                    if language.is_empty() {
                        continue;
                    }
                    if let Some(backend) = parse_backend(&key, &value) {
                        self.segmenter
                            .languages
                            .insert(language_key(language), backend);
                    }
                }
            }
        }
    }
}

fn parse_backend(key: &str, value: &str) -> Option<BackendId> {
    match value.parse() {
        Ok(backend) => Some(backend),
        Err(e) => {
            tracing::warn!("Ignoring {key}: {e}");
            None
        }
    }
}

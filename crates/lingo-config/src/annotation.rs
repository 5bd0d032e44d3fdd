use serde::{Deserialize, Serialize};

fn default_line_width() -> usize {
    80
}

fn default_link_class() -> String {
    "word-link".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AnnotationConfig {
    /// Reflow width in codepoints of plain text
    #[serde(default = "default_line_width")]
    pub line_width: usize,
    /// CSS class put on every wordform link
    #[serde(default = "default_link_class")]
    pub link_class: String,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            link_class: default_link_class(),
        }
    }
}

/// A word tokenizer living outside the segmentation engine.
///
/// Implementations return tokens only, not offsets. The caller re-derives
/// offsets, so a tokenizer may drop or rewrite characters without breaking
/// span coverage.
pub trait ExternalTokenizer: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Split `text` into tokens
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    #[error("tokenizer failed: {0}")]
    Failed(String),

    #[error("tokenizer io error: {0}")]
    Io(#[from] std::io::Error),
}

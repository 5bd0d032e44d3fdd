pub mod error;
pub mod normalize;
pub mod tokenizer;
pub mod types;

pub use error::{LoadError, SegmentError};
pub use normalize::{decode_lossy, fold, normalize, normalize_with_origins};
pub use tokenizer::{ExternalTokenizer, TokenizeError};
pub use types::{AnnotationResult, BackendId, Match, Span, SpanBuilder, WordformRecord};

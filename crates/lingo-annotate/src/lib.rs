//! Vocabulary annotation: find known wordforms, link them, reflow the result.

pub mod annotator;
pub mod markup;
pub mod matcher;
pub mod reflow;

use lingo_config::annotation::AnnotationConfig;
use lingo_core::{AnnotationResult, WordformRecord, normalize};

pub use annotator::Annotator;
pub use markup::strip_markup;
pub use matcher::find_matches;
pub use reflow::reflow;

/// Normalize, match, annotate and reflow one document.
pub fn annotate_document(
    text: &str,
    records: &[WordformRecord],
    config: &AnnotationConfig,
) -> AnnotationResult {
    let text = normalize(text);
    let matches = find_matches(&text, records);
    let annotated = Annotator::new(config.link_class.as_str()).annotate(&text, &matches);

    tracing::debug!(
        matches = matches.len(),
        found = annotated.found_wordforms.len(),
        "document annotated"
    );

    AnnotationResult {
        annotated_text: reflow(&annotated.annotated_text, config.line_width),
        found_wordforms: annotated.found_wordforms,
    }
}

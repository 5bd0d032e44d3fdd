use std::io::{self, Write};

use anyhow::Context;
use lingo_core::Span;

use super::SegmentArgs;
use crate::input::read_text;
use crate::state::AppState;

pub fn run(state: &AppState, args: SegmentArgs) -> anyhow::Result<()> {
    let text = read_text(args.file.as_deref())?;
    let spans = state
        .segmenter
        .segment(&text, &args.lang, args.backend)
        .context("configuration error")?;
    tracing::info!(lang = %args.lang, spans = spans.len(), "segmented input");

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &spans)?;
        writeln!(out)?;
    } else {
        for span in &spans {
            writeln!(out, "{}", format_span(span))?;
        }
    }
    Ok(())
}

/// `start\tend\tword|other\ttext`, with tabs and newlines in the text escaped
pub fn format_span(span: &Span) -> String {
    let kind = if span.is_wordlike { "word" } else { "other" };
    let mut line = format!("{}\t{}\t{kind}\t", span.start, span.end);
    for c in span.text.chars() {
        match c {
            '\t' => line.push_str("\\t"),
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            '\\' => line.push_str("\\\\"),
            _ => line.push(c),
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_spans() {
        let word = Span {
            start: 0,
            end: 4,
            text: "γεια".to_string(),
            is_wordlike: true,
        };
        assert_eq!(format_span(&word), "0\t4\tword\tγεια");

        let gap = Span {
            start: 4,
            end: 6,
            text: "\n\t".to_string(),
            is_wordlike: false,
        };
        assert_eq!(format_span(&gap), "4\t6\tother\t\\n\\t");
    }
}

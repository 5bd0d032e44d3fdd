use std::io::{self, Write};

use lingo_annotate::{annotate_document, strip_markup};

use super::AnnotateArgs;
use crate::input::read_text;
use crate::profile::load_wordforms;
use crate::state::AppState;

pub fn run(state: &AppState, args: AnnotateArgs) -> anyhow::Result<()> {
    let records = load_wordforms(&args.wordforms)?;
    let text = read_text(args.file.as_deref())?;

    let mut config = state.config.annotation.clone();
    if let Some(width) = args.width {
        anyhow::ensure!(width > 0, "--width must be positive");
        config.line_width = width;
    }

    if state.config.segmenter.specialized_backend(&args.lang).is_some() {
        tracing::warn!(
            lang = %args.lang,
            "words inside unspaced runs of text are not matched for this language"
        );
    }

    let result = annotate_document(&text, &records, &config);
    tracing::info!(
        lang = %args.lang,
        found = result.found_wordforms.len(),
        "annotated input"
    );

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &result)?;
        writeln!(out)?;
    } else if args.plain {
        writeln!(out, "{}", strip_markup(&result.annotated_text))?;
    } else {
        writeln!(out, "{}", result.annotated_text)?;
    }
    Ok(())
}

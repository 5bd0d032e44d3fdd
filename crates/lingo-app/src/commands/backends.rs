use std::collections::BTreeMap;
use std::io::{self, Write};

use lingo_core::BackendId;
use serde_json::json;

use super::BackendsArgs;
use crate::state::AppState;

pub fn run(state: &AppState, args: BackendsArgs) -> anyhow::Result<()> {
    let availability = state.segmenter.availability();

    let mut chosen = BTreeMap::new();
    for lang in &args.langs {
        // without an override resolution cannot fail
        chosen.insert(lang.as_str(), state.segmenter.choose(lang, None)?);
    }

    let mut out = io::stdout().lock();
    if args.json {
        let report = json!({ "availability": availability, "languages": chosen });
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    for backend in BackendId::ALL {
        let status = if availability.is_available(backend) {
            "available"
        } else {
            "unavailable"
        };
        writeln!(out, "{backend}\t{status}")?;
    }
    for (lang, backend) in chosen {
        writeln!(out, "{lang}\t{backend}")?;
    }
    Ok(())
}

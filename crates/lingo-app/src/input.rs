use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use lingo_core::decode_lossy;

/// Read FILE or stdin. Invalid UTF-8 is replaced, never rejected.
pub fn read_text(path: Option<&Path>) -> anyhow::Result<String> {
    let bytes = match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    Ok(decode_lossy(&bytes))
}

use std::path::PathBuf;

use clap::Args;
use lingo_core::BackendId;

pub mod annotate;
pub mod backends;
pub mod segment;

#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Language code, e.g. `el` or `th-TH`
    #[arg(long)]
    pub lang: String,

    /// Force a backend: icu, thai or naive
    #[arg(long)]
    pub backend: Option<BackendId>,

    /// Print spans as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Input file; stdin when omitted
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct AnnotateArgs {
    #[arg(long)]
    pub lang: String,

    /// JSON array of wordform records
    #[arg(long)]
    pub wordforms: PathBuf,

    /// Maximum line width in characters
    #[arg(long)]
    pub width: Option<usize>,

    /// Print `{annotated_text, found_wordforms}` as JSON
    #[arg(long, conflicts_with = "plain")]
    pub json: bool,

    /// Print the reflowed text with all markup removed
    #[arg(long)]
    pub plain: bool,

    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct BackendsArgs {
    /// Languages to resolve a backend for
    #[arg(long = "lang")]
    pub langs: Vec<String>,

    #[arg(long)]
    pub json: bool,
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod input;
pub mod profile;
pub mod state;

use self::commands::{AnnotateArgs, BackendsArgs, SegmentArgs};
use self::state::AppState;

#[derive(Parser)]
#[command(name = "lingo", version, about = "Word segmentation and vocabulary annotation")]
struct Cli {
    /// JSON config file; environment variables override it
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split text into word and non-word spans
    Segment(SegmentArgs),
    /// Link known wordforms and reflow into paragraphs
    Annotate(AnnotateArgs),
    /// Show backend availability and per-language choices
    Backends(BackendsArgs),
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = profile::load_config(cli.config.as_deref())?;
    let state = AppState::new(config);

    match cli.command {
        Command::Segment(args) => commands::segment::run(&state, args),
        Command::Annotate(args) => commands::annotate::run(&state, args),
        Command::Backends(args) => commands::backends::run(&state, args),
    }
}

fn init_tracing(log_json: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = log_json
        || std::env::var("LINGO_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

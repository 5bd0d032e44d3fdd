use lingo_config::Config;
use lingo_segment::Segmenter;

/// Everything a command needs, built once at start-up
pub struct AppState {
    pub config: Config,
    pub segmenter: Segmenter,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let segmenter = Segmenter::new(config.segmenter.clone());
        Self { config, segmenter }
    }
}

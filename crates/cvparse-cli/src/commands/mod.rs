//! CLI subcommands.

pub mod batch;
pub mod process;

use std::sync::Arc;

use cvparse_core::{CvConfig, EntityRecognizer, HeuristicResumeParser, RuleBasedRecognizer};
use tracing::info;

/// Load configuration from the optional `-c` path, defaulting
/// otherwise.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CvConfig> {
    match config_path {
        Some(path) => Ok(CvConfig::from_file(std::path::Path::new(path))?),
        None => Ok(CvConfig::default()),
    }
}

/// Build the parser used by both commands: extraction config plus the
/// recognizer, constructed once here and reused for every document.
pub fn build_parser(config: &CvConfig) -> HeuristicResumeParser {
    let recognizer: Arc<dyn EntityRecognizer> = Arc::new(RuleBasedRecognizer::new());
    info!("using {} entity recognizer", recognizer.name());

    HeuristicResumeParser::new()
        .with_config(config.extraction.clone())
        .with_recognizer(recognizer)
}

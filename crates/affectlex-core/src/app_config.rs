use std::path::PathBuf;

/// Process-level settings for the binary. Per-call scoring options live in
/// [`crate::ScoreConfig`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub lexicon_path: PathBuf,
    /// Extra GB->US spellings merged over the built-in table.
    pub locale_path: Option<PathBuf>,
}

//! Shared vocabulary for the affect/intensity lexicon scorer.
//!
//! Holds the lexicon categories and their model intercepts, the immutable
//! per-call [`ScoreConfig`], lexicon and spelling-table loading, and the
//! environment-driven application config used by the binary.

pub mod app_config;
pub mod category;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod locale;
pub mod options;

pub use app_config::AppConfig;
pub use category::Category;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use lexicon::{load_lexicon, Lexicon, LexiconSummary};
pub use locale::SpellingTable;
pub use options::{Encoding, Locale, LogLevel, OutputMode, ScoreConfig, SortBy};

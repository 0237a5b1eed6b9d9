//! Lexicon-based affect and intensity scoring.
//!
//! Normalizes and tokenizes a short text, adds the requested word n-grams,
//! matches the resulting token pool against both lexicon categories, and
//! reduces the matches through a linear model with fixed intercepts. Output
//! is shaped per [`affectlex_core::OutputMode`].

pub mod aggregate;
pub mod format;
pub mod matcher;
pub mod ngrams;
pub mod output;
pub mod pool;
pub mod scorer;
pub mod tokenize;
pub mod types;

pub use aggregate::{aggregate, round_to};
pub use format::format_matches;
pub use matcher::{match_all, match_category};
pub use ngrams::ngrams;
pub use pool::TokenPool;
pub use scorer::Scorer;
pub use tokenize::{normalize, Tokenizer, WordTokenizer};
pub use types::{FormattedMatch, MatchRecord, PerCategory, ScoreOutput};

//! Affect/intensity scoring of short texts against a weighted lexicon.

use std::sync::Arc;

use affectlex_core::{Lexicon, ScoreConfig, SpellingTable};
use serde_json::Value;

use crate::matcher::match_all;
use crate::output::compose;
use crate::pool::TokenPool;
use crate::tokenize::{normalize, Tokenizer, WordTokenizer};
use crate::types::ScoreOutput;

/// Scores texts against one shared, read-only lexicon.
///
/// A `Scorer` holds no per-call state, so one instance can serve any number
/// of threads at once.
#[derive(Debug, Clone)]
pub struct Scorer<T = WordTokenizer> {
    lexicon: Arc<Lexicon>,
    spellings: Arc<SpellingTable>,
    tokenizer: T,
}

impl Scorer<WordTokenizer> {
    /// A scorer with the default tokenizer and the built-in spelling table.
    #[must_use]
    pub fn new(lexicon: impl Into<Arc<Lexicon>>) -> Self {
        Self::with_tokenizer(lexicon, WordTokenizer)
    }
}

impl<T: Tokenizer> Scorer<T> {
    #[must_use]
    pub fn with_tokenizer(lexicon: impl Into<Arc<Lexicon>>, tokenizer: T) -> Self {
        Self {
            lexicon: lexicon.into(),
            spellings: Arc::new(SpellingTable::builtin()),
            tokenizer,
        }
    }

    /// Replace the GB->US spelling table used for `Locale::Gb` input.
    #[must_use]
    pub fn with_spellings(mut self, spellings: impl Into<Arc<SpellingTable>>) -> Self {
        self.spellings = spellings.into();
        self
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score `text` and shape the result per `config.output()`.
    ///
    /// Returns `None` when the text is empty after trimming or yields no
    /// tokens, logged at `error` unless `logs` is `None`. Every other problem
    /// (n-gram orders longer than the input, nothing matched) still produces a
    /// full result; skipped orders are logged at `warn` from `Warnings` up.
    #[must_use]
    pub fn score(&self, text: &str, config: &ScoreConfig) -> Option<ScoreOutput> {
        let logs = config.logs();

        let normalized = normalize(text, config.locale(), &self.spellings);
        if normalized.is_empty() {
            if logs.errors() {
                tracing::error!("input is empty after normalization; nothing to score");
            }
            return None;
        }

        let tokens = self.tokenizer.tokenize(&normalized);
        let Some(pool) = TokenPool::build(&tokens, config.n_grams(), config.wc_grams()) else {
            if logs.errors() {
                tracing::error!(chars = normalized.len(), "input produced no tokens; nothing to score");
            }
            return None;
        };

        if logs.warnings() {
            for &order in pool.skipped_orders() {
                tracing::warn!(
                    order,
                    tokens = tokens.len(),
                    "input shorter than n-gram order; order skipped"
                );
            }
        }

        let records = match_all(&self.lexicon, &pool, config);

        if logs.all() {
            tracing::debug!(
                tokens = tokens.len(),
                wordcount = pool.wordcount(),
                distinct_terms = pool.len(),
                affect_matches = records.affect.len(),
                intensity_matches = records.intensity.len(),
                "text scored"
            );
        }

        Some(compose(&records, pool.wordcount(), config))
    }

    /// Score a loosely-typed input.
    ///
    /// Strings are scored as-is; numbers and booleans through their display
    /// form. `null`, arrays and objects are not text and yield `None`.
    #[must_use]
    pub fn score_value(&self, input: &Value, config: &ScoreConfig) -> Option<ScoreOutput> {
        let text = match input {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                if config.logs().errors() {
                    tracing::error!(input = %other, "input is not text; nothing to score");
                }
                return None;
            }
        };
        self.score(&text, config)
    }
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;

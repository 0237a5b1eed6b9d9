//! Intersects the token pool with each lexicon category.

use affectlex_core::{Category, Lexicon, ScoreConfig};

use crate::pool::TokenPool;
use crate::types::{MatchRecord, PerCategory};

/// Match records for one category, in lexicon term order.
///
/// A term matches when it occurs in `pool` and its weight lies inside the
/// inclusive `[min, max]` range of `config`. Whichever of the pool and the
/// category is smaller drives the scan; both paths emit the same records in
/// the same order.
#[must_use]
pub fn match_category(
    lexicon: &Lexicon,
    category: Category,
    pool: &TokenPool,
    config: &ScoreConfig,
) -> Vec<MatchRecord> {
    let terms = lexicon.terms(category);

    if pool.len() < terms.len() {
        let mut records: Vec<MatchRecord> = pool
            .iter()
            .filter_map(|(term, count)| {
                let weight = *terms.get(term)?;
                config.accepts_weight(weight).then(|| MatchRecord {
                    term: term.to_string(),
                    count,
                    weight,
                })
            })
            .collect();
        records.sort_unstable_by(|a, b| a.term.cmp(&b.term));
        records
    } else {
        terms
            .iter()
            .filter(|(_, weight)| config.accepts_weight(**weight))
            .filter_map(|(term, &weight)| {
                pool.count(term).map(|count| MatchRecord {
                    term: term.clone(),
                    count,
                    weight,
                })
            })
            .collect()
    }
}

/// Match records for every category.
#[must_use]
pub fn match_all(
    lexicon: &Lexicon,
    pool: &TokenPool,
    config: &ScoreConfig,
) -> PerCategory<Vec<MatchRecord>> {
    PerCategory::from_fn(|category| match_category(lexicon, category, pool, config))
}

//! Ranked, diagnostic view of a category's match records.

use affectlex_core::{Encoding, SortBy};

use crate::aggregate::{contribution, round_to};
use crate::types::{FormattedMatch, MatchRecord};

/// Format `records` as `[term, count, weight, contribution]` rows sorted by
/// `sort_by`, descending.
///
/// The sort is stable, so ties keep the matcher's emission order, which is
/// lexicographic by term and not the order terms appear in the lexicon file.
/// Weight and contribution are rounded to `places`; ordering uses the
/// unrounded values.
#[must_use]
pub fn format_matches(
    records: &[MatchRecord],
    encoding: Encoding,
    wordcount: usize,
    sort_by: SortBy,
    places: u32,
) -> Vec<FormattedMatch> {
    let mut rows: Vec<(f64, &MatchRecord)> = records
        .iter()
        .map(|r| (contribution(r, encoding, wordcount), r))
        .collect();

    match sort_by {
        SortBy::Freq => rows.sort_by(|(_, a), (_, b)| b.count.cmp(&a.count)),
        SortBy::Lex => rows.sort_by(|(a, _), (b, _)| b.total_cmp(a)),
        SortBy::Weight => rows.sort_by(|(_, a), (_, b)| b.weight.total_cmp(&a.weight)),
    }

    rows.into_iter()
        .map(|(lex, r)| FormattedMatch {
            term: r.term.clone(),
            count: r.count,
            weight: round_to(r.weight, places),
            contribution: round_to(lex, places),
        })
        .collect()
}

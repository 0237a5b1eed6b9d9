//! Assembles the result shape selected by [`OutputMode`].

use affectlex_core::{OutputMode, ScoreConfig};

use crate::aggregate::aggregate;
use crate::format::format_matches;
use crate::types::{MatchRecord, PerCategory, ScoreOutput};

/// Shape the matched records of one call into a [`ScoreOutput`].
///
/// Only the parts the mode needs are computed: `Lex` never formats matches
/// and `Matches` never aggregates.
#[must_use]
pub fn compose(
    records: &PerCategory<Vec<MatchRecord>>,
    wordcount: usize,
    config: &ScoreConfig,
) -> ScoreOutput {
    let values = || {
        records.map(|category, recs| {
            aggregate(
                category,
                recs,
                config.encoding(),
                wordcount,
                config.places(),
            )
        })
    };
    let matches = || {
        records.map(|_, recs| {
            format_matches(
                recs,
                config.encoding(),
                wordcount,
                config.sort_by(),
                config.places(),
            )
        })
    };

    match config.output() {
        OutputMode::Matches => ScoreOutput::Matches(matches()),
        OutputMode::Full => ScoreOutput::Full {
            matches: matches(),
            values: values(),
        },
        OutputMode::Lex => ScoreOutput::Values(values()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> PerCategory<Vec<MatchRecord>> {
        PerCategory {
            affect: vec![MatchRecord {
                term: "great".to_string(),
                count: 2,
                weight: 0.5,
            }],
            intensity: Vec::new(),
        }
    }

    #[test]
    fn lex_mode_returns_values_only() {
        let out = compose(&records(), 4, &ScoreConfig::default());
        let ScoreOutput::Values(values) = out else {
            panic!("expected values, got {out:?}");
        };
        assert!((values.affect - 5.537_104_721).abs() < 1e-12);
        assert!((values.intensity - 2.399_762_631).abs() < 1e-12);
    }

    #[test]
    fn matches_mode_returns_rows_only() {
        let config = ScoreConfig::default().with_output(OutputMode::Matches);
        let out = compose(&records(), 4, &config);
        let ScoreOutput::Matches(matches) = out else {
            panic!("expected matches, got {out:?}");
        };
        assert_eq!(matches.affect.len(), 1);
        assert!(matches.intensity.is_empty());
    }

    #[test]
    fn full_mode_equals_the_two_partial_modes() {
        let base = ScoreConfig::default();
        let full = compose(&records(), 4, &base.clone().with_output(OutputMode::Full));
        let lex = compose(&records(), 4, &base.clone().with_output(OutputMode::Lex));
        let matches = compose(&records(), 4, &base.with_output(OutputMode::Matches));

        assert_eq!(full.values(), lex.values());
        assert_eq!(full.matches(), matches.matches());
    }
}

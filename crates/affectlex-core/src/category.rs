//! Lexicon categories and the intercepts of the linear model behind them.

use serde::{Deserialize, Serialize};

/// One scored dimension of the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Valence: 1 (very negative) to 9 (very positive), 5 is neutral.
    Affect,
    /// Arousal: 1 (neutral/objective) to 9 (very high).
    Intensity,
}

impl Category {
    /// Every category, in output order.
    pub const ALL: [Category; 2] = [Category::Affect, Category::Intensity];

    /// The regression intercept added to the aggregated weights.
    ///
    /// These constants come from the published model and must not change.
    #[must_use]
    pub const fn intercept(self) -> f64 {
        match self {
            Category::Affect => 5.037_104_721,
            Category::Intensity => 2.399_762_631,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Affect => "AFFECT",
            Category::Intensity => "INTENSITY",
        }
    }

    /// Parse a category name as it appears in lexicon files.
    ///
    /// Matching is case-insensitive; surrounding whitespace is ignored.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intercepts_match_model_constants() {
        assert!((Category::Affect.intercept() - 5.037_104_721).abs() < f64::EPSILON);
        assert!((Category::Intensity.intercept() - 2.399_762_631).abs() < f64::EPSILON);
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Category::from_name("affect"), Some(Category::Affect));
        assert_eq!(Category::from_name(" INTENSITY "), Some(Category::Intensity));
        assert_eq!(Category::from_name("valence"), None);
    }

    #[test]
    fn serializes_as_uppercase_name() {
        let json = serde_json::to_string(&Category::Intensity).unwrap();
        assert_eq!(json, "\"INTENSITY\"");
    }
}

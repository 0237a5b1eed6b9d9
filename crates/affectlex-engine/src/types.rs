use affectlex_core::Category;
use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

/// One value per lexicon category. Both are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PerCategory<T> {
    #[serde(rename = "AFFECT")]
    pub affect: T,
    #[serde(rename = "INTENSITY")]
    pub intensity: T,
}

impl<T> PerCategory<T> {
    /// Build by evaluating `f` once per category, in [`Category::ALL`] order.
    pub fn from_fn<F: FnMut(Category) -> T>(mut f: F) -> Self {
        let affect = f(Category::Affect);
        let intensity = f(Category::Intensity);
        Self { affect, intensity }
    }

    #[must_use]
    pub fn get(&self, category: Category) -> &T {
        match category {
            Category::Affect => &self.affect,
            Category::Intensity => &self.intensity,
        }
    }

    pub fn map<U, F: FnMut(Category, &T) -> U>(&self, mut f: F) -> PerCategory<U> {
        PerCategory::from_fn(|c| f(c, self.get(c)))
    }
}

/// A lexicon term found in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub term: String,
    /// Occurrences of the term in the token pool.
    pub count: usize,
    pub weight: f64,
}

/// A match record with the value it adds to the category score.
///
/// Serializes as `[term, count, weight, contribution]`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedMatch {
    pub term: String,
    pub count: usize,
    pub weight: f64,
    pub contribution: f64,
}

impl Serialize for FormattedMatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(4)?;
        tuple.serialize_element(&self.term)?;
        tuple.serialize_element(&self.count)?;
        tuple.serialize_element(&self.weight)?;
        tuple.serialize_element(&self.contribution)?;
        tuple.end()
    }
}

/// Shaped result of a scoring call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScoreOutput {
    /// `{"AFFECT": .., "INTENSITY": ..}`
    Values(PerCategory<f64>),
    /// `{"AFFECT": [[term, count, weight, contribution], ..], "INTENSITY": [..]}`
    Matches(PerCategory<Vec<FormattedMatch>>),
    /// `{"matches": .., "values": ..}`
    Full {
        matches: PerCategory<Vec<FormattedMatch>>,
        values: PerCategory<f64>,
    },
}

impl ScoreOutput {
    /// Category scores, if this output carries them.
    #[must_use]
    pub fn values(&self) -> Option<&PerCategory<f64>> {
        match self {
            ScoreOutput::Values(values) | ScoreOutput::Full { values, .. } => Some(values),
            ScoreOutput::Matches(_) => None,
        }
    }

    /// Formatted matches, if this output carries them.
    #[must_use]
    pub fn matches(&self) -> Option<&PerCategory<Vec<FormattedMatch>>> {
        match self {
            ScoreOutput::Matches(matches) | ScoreOutput::Full { matches, .. } => Some(matches),
            ScoreOutput::Values(_) => None,
        }
    }
}

//! The weighted term lexicon: `category -> (term -> weight)`.
//!
//! A [`Lexicon`] is built once at startup and never mutated afterwards, so a
//! single instance can be shared by any number of concurrent scoring calls.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::Serialize;

use crate::{Category, ConfigError};

/// Raw on-disk shape: category name to term/weight map.
pub type RawLexicon = BTreeMap<String, BTreeMap<String, f64>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    affect: BTreeMap<String, f64>,
    intensity: BTreeMap<String, f64>,
}

impl Lexicon {
    /// Parse a lexicon from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FileParse` on malformed JSON and
    /// `ConfigError::Validation` if the content fails validation.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawLexicon =
            serde_json::from_str(content).map_err(|e| ConfigError::FileParse {
                kind: "lexicon",
                path: "<inline>".to_string(),
                reason: e.to_string(),
            })?;
        Self::from_raw(raw)
    }

    /// Parse a lexicon from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FileParse` on malformed YAML and
    /// `ConfigError::Validation` if the content fails validation.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawLexicon =
            serde_yaml::from_str(content).map_err(|e| ConfigError::FileParse {
                kind: "lexicon",
                path: "<inline>".to_string(),
                reason: e.to_string(),
            })?;
        Self::from_raw(raw)
    }

    /// Build a lexicon from an in-memory category map.
    ///
    /// Terms are lower-cased and trimmed. Both categories must be present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` for unknown or missing categories,
    /// empty terms, terms that collide after normalization, and non-finite
    /// weights.
    pub fn from_raw(raw: RawLexicon) -> Result<Self, ConfigError> {
        let mut affect = None;
        let mut intensity = None;

        for (name, terms) in raw {
            let category = Category::from_name(&name).ok_or_else(|| {
                ConfigError::Validation(format!("unknown lexicon category '{name}'"))
            })?;
            let slot = match category {
                Category::Affect => &mut affect,
                Category::Intensity => &mut intensity,
            };
            if slot.is_some() {
                return Err(ConfigError::Validation(format!(
                    "category '{category}' appears more than once"
                )));
            }
            *slot = Some(normalize_terms(category, terms)?);
        }

        let missing = |c: Category| ConfigError::Validation(format!("missing category '{c}'"));
        Ok(Self {
            affect: affect.ok_or_else(|| missing(Category::Affect))?,
            intensity: intensity.ok_or_else(|| missing(Category::Intensity))?,
        })
    }

    /// Terms and weights of one category, in lexicographic term order.
    #[must_use]
    pub fn terms(&self, category: Category) -> &BTreeMap<String, f64> {
        match category {
            Category::Affect => &self.affect,
            Category::Intensity => &self.intensity,
        }
    }

    #[must_use]
    pub fn weight(&self, category: Category, term: &str) -> Option<f64> {
        self.terms(category).get(term).copied()
    }

    #[must_use]
    pub fn summary(&self) -> Vec<LexiconSummary> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let terms = self.terms(category);
                let (min_weight, max_weight) = terms.values().fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(lo, hi), &w| (lo.min(w), hi.max(w)),
                );
                let max_order = terms
                    .keys()
                    .map(|t| t.split(' ').count())
                    .max()
                    .unwrap_or(0);
                LexiconSummary {
                    category,
                    terms: terms.len(),
                    min_weight: (!terms.is_empty()).then_some(min_weight),
                    max_weight: (!terms.is_empty()).then_some(max_weight),
                    max_order,
                }
            })
            .collect()
    }
}

/// Per-category statistics for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexiconSummary {
    pub category: Category,
    pub terms: usize,
    pub min_weight: Option<f64>,
    pub max_weight: Option<f64>,
    /// Word count of the longest phrase in the category.
    pub max_order: usize,
}

fn normalize_terms(
    category: Category,
    terms: BTreeMap<String, f64>,
) -> Result<BTreeMap<String, f64>, ConfigError> {
    let mut seen = HashSet::new();
    let mut out = BTreeMap::new();

    for (term, weight) in terms {
        // Collapse inner whitespace so phrases line up with space-joined n-grams.
        let normalized = term
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if normalized.is_empty() {
            return Err(ConfigError::Validation(format!(
                "category '{category}' contains an empty term"
            )));
        }
        if !weight.is_finite() {
            return Err(ConfigError::Validation(format!(
                "term '{term}' in '{category}' has non-finite weight {weight}"
            )));
        }
        if !seen.insert(normalized.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate term '{normalized}' in '{category}'"
            )));
        }
        out.insert(normalized, weight);
    }

    Ok(out)
}

/// Load and validate a lexicon file. `.yaml`/`.yml` files are read as YAML,
/// everything else as JSON.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_lexicon(path: &Path) -> Result<Lexicon, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        kind: "lexicon",
        path: path.display().to_string(),
        source: e,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let parsed = if is_yaml {
        Lexicon::from_yaml_str(&content)
    } else {
        Lexicon::from_json_str(&content)
    };

    let lexicon = parsed.map_err(|e| match e {
        ConfigError::FileParse { kind, reason, .. } => ConfigError::FileParse {
            kind,
            path: path.display().to_string(),
            reason,
        },
        other => other,
    })?;

    tracing::debug!(
        path = %path.display(),
        affect_terms = lexicon.affect.len(),
        intensity_terms = lexicon.intensity.len(),
        "lexicon loaded"
    );

    Ok(lexicon)
}

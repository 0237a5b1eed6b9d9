//! GB -> US spelling translation applied to normalized input before
//! tokenization when the caller selects the GB locale.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use crate::ConfigError;

const BUILTIN_TABLE: &str = include_str!("../data/gb_us.yaml");

/// Word-level British to American spelling map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellingTable {
    gb_to_us: HashMap<String, String>,
}

impl SpellingTable {
    /// The table shipped with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_yaml_str(BUILTIN_TABLE).unwrap_or_else(|e| {
            tracing::error!(error = %e, "bundled spelling table is invalid; GB input will not be translated");
            Self::default()
        })
    }

    /// Parse a YAML `gb: us` map. Entries are lower-cased and trimmed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::FileParse` on malformed YAML and
    /// `ConfigError::Validation` for entries that are not single words.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: HashMap<String, String> =
            serde_yaml::from_str(content).map_err(|e| ConfigError::FileParse {
                kind: "locale",
                path: "<inline>".to_string(),
                reason: e.to_string(),
            })?;

        let mut gb_to_us = HashMap::with_capacity(raw.len());
        for (gb, us) in raw {
            let gb = gb.trim().to_lowercase();
            let us = us.trim().to_lowercase();
            if !is_single_word(&gb) || !is_single_word(&us) {
                return Err(ConfigError::Validation(format!(
                    "spelling entry '{gb}' -> '{us}' must map one word to one word"
                )));
            }
            gb_to_us.insert(gb, us);
        }

        Ok(Self { gb_to_us })
    }

    /// Load the built-in table and merge the entries of `path` over it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn builtin_with_overrides(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
            kind: "locale",
            path: path.display().to_string(),
            source: e,
        })?;
        let extra = Self::from_yaml_str(&content).map_err(|e| match e {
            ConfigError::FileParse { kind, reason, .. } => ConfigError::FileParse {
                kind,
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })?;

        let mut table = Self::builtin();
        table.gb_to_us.extend(extra.gb_to_us);
        Ok(table)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.gb_to_us.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gb_to_us.is_empty()
    }

    /// Rewrite every British spelling in `text` to its American form.
    ///
    /// Words are maximal runs of alphabetic characters; everything else is
    /// copied through untouched. Expects already lower-cased text.
    #[must_use]
    pub fn to_us<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.gb_to_us.is_empty() {
            return Cow::Borrowed(text);
        }

        let mut out: Option<String> = None;
        let mut last = 0;
        let mut word_start: Option<usize> = None;

        let flush = |start: usize, end: usize, last: &mut usize, out: &mut Option<String>| {
            if let Some(us) = self.gb_to_us.get(&text[start..end]) {
                let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
                buf.push_str(&text[*last..start]);
                buf.push_str(us);
                *last = end;
            }
        };

        for (idx, ch) in text.char_indices() {
            match (ch.is_alphabetic(), word_start) {
                (true, None) => word_start = Some(idx),
                (false, Some(start)) => {
                    flush(start, idx, &mut last, &mut out);
                    word_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = word_start {
            flush(start, text.len(), &mut last, &mut out);
        }

        match out {
            Some(mut buf) => {
                buf.push_str(&text[last..]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(text),
        }
    }
}

fn is_single_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

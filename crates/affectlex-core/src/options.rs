//! Immutable per-call scoring options.
//!
//! [`ScoreConfig`] is validated once when it is built and only read by the
//! engine. Callers holding a loosely-typed option bag (JSON from a web form,
//! a CLI `--options` flag) go through [`ScoreConfig::from_options`], which
//! coerces what it can and falls back to defaults with a warning otherwise.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a category's match records are reduced to one number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Each distinct matched term adds its weight once.
    #[default]
    Binary,
    /// Each matched term adds `(count / wordcount) * weight`.
    Frequency,
}

impl Encoding {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" => Some(Self::Binary),
            "frequency" | "freq" => Some(Self::Frequency),
            _ => None,
        }
    }
}

/// Shape of the value returned by a scoring call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Category scores only.
    #[default]
    Lex,
    /// Formatted match records only.
    Matches,
    /// Both, under `matches` and `values`.
    Full,
}

impl OutputMode {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lex" => Some(Self::Lex),
            "matches" => Some(Self::Matches),
            "full" => Some(Self::Full),
            _ => None,
        }
    }

    /// Parse a mode, falling back to [`OutputMode::Lex`] for anything
    /// unrecognized. The second element carries the warning in that case.
    #[must_use]
    pub fn parse_or_default(s: &str) -> (Self, Option<String>) {
        match Self::parse(s) {
            Some(mode) => (mode, None),
            None => (
                Self::Lex,
                Some(format!("unknown output mode '{s}', using 'lex'")),
            ),
        }
    }
}

/// Ordering applied to formatted match records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Descending occurrence count.
    #[default]
    Freq,
    /// Descending lexical contribution.
    Lex,
    /// Descending raw weight.
    Weight,
}

impl SortBy {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "freq" | "frequency" => Some(Self::Freq),
            "lex" => Some(Self::Lex),
            "weight" => Some(Self::Weight),
            _ => None,
        }
    }
}

/// Spelling dialect of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Locale {
    #[default]
    Us,
    Gb,
}

impl Locale {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "US" => Some(Self::Us),
            "GB" | "UK" => Some(Self::Gb),
            _ => None,
        }
    }
}

/// Verbosity gate for the engine's non-fatal diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    None,
    /// Unscorable input.
    Errors,
    /// Adds skipped n-gram orders and coerced options.
    Warnings,
    /// Adds a debug summary per scored text.
    #[default]
    All,
}

impl LogLevel {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "0" => Some(Self::None),
            "errors" | "1" => Some(Self::Errors),
            "warnings" | "2" => Some(Self::Warnings),
            "all" | "3" => Some(Self::All),
            _ => None,
        }
    }

    #[must_use]
    pub fn errors(self) -> bool {
        self >= Self::Errors
    }

    #[must_use]
    pub fn warnings(self) -> bool {
        self >= Self::Warnings
    }

    #[must_use]
    pub fn all(self) -> bool {
        self == Self::All
    }
}

pub const DEFAULT_N_GRAMS: [usize; 2] = [2, 3];
pub const DEFAULT_PLACES: u32 = 9;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreConfig {
    encoding: Encoding,
    min: f64,
    max: f64,
    n_grams: BTreeSet<usize>,
    output: OutputMode,
    places: u32,
    sort_by: SortBy,
    wc_grams: bool,
    locale: Locale,
    logs: LogLevel,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::Binary,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            n_grams: DEFAULT_N_GRAMS.into_iter().collect(),
            output: OutputMode::Lex,
            places: DEFAULT_PLACES,
            sort_by: SortBy::Freq,
            wc_grams: false,
            locale: Locale::Us,
            logs: LogLevel::All,
        }
    }
}

impl ScoreConfig {
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Inclusive lower weight bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Inclusive upper weight bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Requested n-gram orders, ascending.
    #[must_use]
    pub fn n_grams(&self) -> &BTreeSet<usize> {
        &self.n_grams
    }

    #[must_use]
    pub fn output(&self) -> OutputMode {
        self.output
    }

    #[must_use]
    pub fn places(&self) -> u32 {
        self.places
    }

    #[must_use]
    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    /// Whether n-gram tokens count toward the frequency denominator.
    #[must_use]
    pub fn wc_grams(&self) -> bool {
        self.wc_grams
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn logs(&self) -> LogLevel {
        self.logs
    }

    /// Whether `weight` lies inside the inclusive `[min, max]` range.
    #[must_use]
    pub fn accepts_weight(&self, weight: f64) -> bool {
        self.min <= weight && weight <= self.max
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the lower bound. NaN is ignored and leaves the bound unchanged.
    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        if !min.is_nan() {
            self.min = min;
        }
        self
    }

    /// Set the upper bound. NaN is ignored and leaves the bound unchanged.
    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        if !max.is_nan() {
            self.max = max;
        }
        self
    }

    /// Replace the n-gram orders. Zero is not a valid order and is dropped.
    #[must_use]
    pub fn with_n_grams<I: IntoIterator<Item = usize>>(mut self, orders: I) -> Self {
        self.n_grams = orders.into_iter().filter(|&n| n > 0).collect();
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn with_places(mut self, places: u32) -> Self {
        self.places = places;
        self
    }

    #[must_use]
    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    #[must_use]
    pub fn with_wc_grams(mut self, wc_grams: bool) -> Self {
        self.wc_grams = wc_grams;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_logs(mut self, logs: LogLevel) -> Self {
        self.logs = logs;
        self
    }

    /// Build a config from a loosely-typed option bag.
    ///
    /// Accepts both `camelCase` (`nGrams`, `sortBy`, `wcGrams`) and
    /// `snake_case` keys. Values of the wrong type are coerced where that is
    /// unambiguous (numeric strings, `"true"`, a single order for `nGrams`);
    /// otherwise the option keeps its default. Every fallback is reported in
    /// the returned warnings and, unless `logs` silences it, through
    /// `tracing::warn!`.
    #[must_use]
    pub fn from_options(options: &Value) -> (Self, Vec<String>) {
        let mut cfg = Self::default();
        let mut warnings = Vec::new();

        let map = match options {
            Value::Null => return (cfg, warnings),
            Value::Object(map) => map,
            other => {
                warnings.push(format!(
                    "options must be an object, got {}; using defaults",
                    type_name(other)
                ));
                emit(cfg.logs, &warnings);
                return (cfg, warnings);
            }
        };

        for (key, value) in map {
            if value.is_null() {
                continue;
            }
            match key.as_str() {
                "encoding" => {
                    if let Some(e) = coerce_enum(key, value, Encoding::parse, &mut warnings) {
                        cfg.encoding = e;
                    }
                }
                "min" => {
                    if let Some(v) = coerce_f64(key, value, &mut warnings) {
                        cfg.min = v;
                    }
                }
                "max" => {
                    if let Some(v) = coerce_f64(key, value, &mut warnings) {
                        cfg.max = v;
                    }
                }
                "nGrams" | "ngrams" | "n_grams" => {
                    if let Some(orders) = coerce_n_grams(key, value, &mut warnings) {
                        cfg.n_grams = orders;
                    }
                }
                "output" => match value.as_str() {
                    Some(s) => {
                        let (mode, warning) = OutputMode::parse_or_default(s);
                        cfg.output = mode;
                        warnings.extend(warning);
                    }
                    None => warnings.push(format!(
                        "option '{key}' must be a string, got {}; using default",
                        type_name(value)
                    )),
                },
                "places" => {
                    if let Some(p) = coerce_places(key, value, &mut warnings) {
                        cfg.places = p;
                    }
                }
                "sortBy" | "sort_by" => {
                    if let Some(s) = coerce_enum(key, value, SortBy::parse, &mut warnings) {
                        cfg.sort_by = s;
                    }
                }
                "wcGrams" | "wc_grams" => {
                    if let Some(b) = coerce_bool(key, value, &mut warnings) {
                        cfg.wc_grams = b;
                    }
                }
                "locale" => {
                    if let Some(l) = coerce_enum(key, value, Locale::parse, &mut warnings) {
                        cfg.locale = l;
                    }
                }
                "logs" => {
                    let parsed = match value {
                        Value::Number(n) => n.as_u64().and_then(|n| LogLevel::parse(&n.to_string())),
                        Value::String(s) => LogLevel::parse(s),
                        _ => None,
                    };
                    match parsed {
                        Some(level) => cfg.logs = level,
                        None => warnings.push(format!(
                            "option 'logs' has invalid value {value}; using default"
                        )),
                    }
                }
                other => warnings.push(format!("unknown option '{other}' ignored")),
            }
        }

        if cfg.min > cfg.max {
            warnings.push(format!(
                "min ({}) is greater than max ({}); nothing will match",
                cfg.min, cfg.max
            ));
        }

        emit(cfg.logs, &warnings);
        (cfg, warnings)
    }
}

fn emit(logs: LogLevel, warnings: &[String]) {
    if logs.warnings() {
        for warning in warnings {
            tracing::warn!(%warning, "score option coerced");
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn coerce_enum<T>(
    key: &str,
    value: &Value,
    parse: fn(&str) -> Option<T>,
    warnings: &mut Vec<String>,
) -> Option<T> {
    let parsed = value.as_str().and_then(parse);
    if parsed.is_none() {
        warnings.push(format!(
            "option '{key}' has invalid value {value}; using default"
        ));
    }
    parsed
}

fn coerce_f64(key: &str, value: &Value, warnings: &mut Vec<String>) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| !v.is_nan());

    if parsed.is_none() {
        warnings.push(format!(
            "option '{key}' is not numeric ({value}); using default"
        ));
    }
    parsed
}

fn coerce_bool(key: &str, value: &Value, warnings: &mut Vec<String>) -> Option<bool> {
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        Value::Number(n) => match n.as_u64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        _ => None,
    };

    if parsed.is_none() {
        warnings.push(format!(
            "option '{key}' is not a boolean ({value}); using default"
        ));
    }
    parsed
}

/// A non-negative whole number, from an integer, an integral float, or a string.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_number(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= f64::from(u32::MAX))
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

fn coerce_places(key: &str, value: &Value, warnings: &mut Vec<String>) -> Option<u32> {
    let parsed = whole_number(value).and_then(|n| u32::try_from(n).ok());
    if parsed.is_none() {
        warnings.push(format!(
            "option '{key}' must be a non-negative integer ({value}); using default"
        ));
    }
    parsed
}

fn coerce_n_grams(
    key: &str,
    value: &Value,
    warnings: &mut Vec<String>,
) -> Option<BTreeSet<usize>> {
    let order = |v: &Value| {
        whole_number(v)
            .and_then(|n| usize::try_from(n).ok())
            .filter(|&n| n > 0)
    };

    match value {
        Value::Bool(true) => Some(DEFAULT_N_GRAMS.into_iter().collect()),
        Value::Bool(false) => Some(BTreeSet::new()),
        Value::Array(items) => {
            let mut orders = BTreeSet::new();
            for item in items {
                match order(item) {
                    Some(n) => {
                        orders.insert(n);
                    }
                    None => warnings.push(format!(
                        "option '{key}' entry {item} is not a positive integer; dropped"
                    )),
                }
            }
            Some(orders)
        }
        Value::String(s) if s.contains(',') => {
            let items: Vec<Value> = s
                .split(',')
                .map(|part| Value::String(part.trim().to_string()))
                .collect();
            coerce_n_grams(key, &Value::Array(items), warnings)
        }
        Value::Number(_) | Value::String(_) => match order(value) {
            Some(n) => Some(BTreeSet::from([n])),
            None => {
                warnings.push(format!(
                    "option '{key}' is not a positive integer ({value}); using default"
                ));
                None
            }
        },
        _ => {
            warnings.push(format!(
                "option '{key}' must be a list of orders or a boolean, got {}; using default",
                type_name(value)
            ));
            None
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;

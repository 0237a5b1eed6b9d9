//! `score` command handler.
//!
//! Flags are folded into the same loose option bag that `--options` accepts
//! and validated once through [`ScoreConfig::from_options`], so the CLI and
//! library callers share one set of coercion rules.

use std::io::{BufRead, Write};
use std::path::Path;

use affectlex_core::{Lexicon, ScoreConfig, SpellingTable};
use affectlex_engine::Scorer;
use clap::Args;
use serde_json::{Map, Value};

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Text to score. Omit when using --stdin.
    pub text: Option<String>,

    /// Score every non-empty stdin line, printing one JSON document per line
    #[arg(long, conflicts_with = "text")]
    pub stdin: bool,

    /// Loose JSON option bag, e.g. '{"encoding":"frequency","nGrams":[2]}'
    #[arg(long)]
    pub options: Option<String>,

    /// Aggregation: binary or frequency
    #[arg(long)]
    pub encoding: Option<String>,

    /// Inclusive lower weight bound
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<f64>,

    /// Inclusive upper weight bound
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<f64>,

    /// Comma-separated n-gram orders, e.g. 2,3
    #[arg(long, conflicts_with = "no_ngrams")]
    pub ngrams: Option<String>,

    /// Match unigrams only
    #[arg(long)]
    pub no_ngrams: bool,

    /// Output shape: lex, matches or full
    #[arg(long)]
    pub output: Option<String>,

    /// Decimal places for every number in the output
    #[arg(long)]
    pub places: Option<u32>,

    /// Match ordering: freq, lex or weight
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Count n-grams toward the frequency denominator
    #[arg(long)]
    pub wc_grams: bool,

    /// Input spelling: us or gb
    #[arg(long)]
    pub locale: Option<String>,

    /// Pretty-print JSON
    #[arg(long)]
    pub pretty: bool,
}

/// Load the lexicon at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or validated.
pub(crate) fn load_lexicon(path: &Path) -> anyhow::Result<Lexicon> {
    affectlex_core::load_lexicon(path)
        .map_err(|e| anyhow::anyhow!("cannot score without a lexicon: {e}"))
}

/// Build a scorer from the lexicon at `lexicon_path`, merging the optional
/// spelling overrides over the built-in GB->US table.
///
/// # Errors
///
/// Returns an error if either file cannot be loaded.
pub(crate) fn build_scorer(
    lexicon_path: &Path,
    locale_path: Option<&Path>,
) -> anyhow::Result<Scorer> {
    let lexicon = load_lexicon(lexicon_path)?;
    let scorer = Scorer::new(lexicon);
    match locale_path {
        Some(path) => {
            let table = SpellingTable::builtin_with_overrides(path)
                .map_err(|e| anyhow::anyhow!("failed to load spelling table: {e}"))?;
            Ok(scorer.with_spellings(table))
        }
        None => Ok(scorer),
    }
}

/// Merge `--options` with the explicit flags (flags win) into one option bag.
///
/// # Errors
///
/// Returns an error if `--options` is not valid JSON or not a JSON object.
pub(crate) fn option_bag(args: &ScoreArgs) -> anyhow::Result<Value> {
    let mut bag = match args.options.as_deref() {
        Some(raw) => match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => map,
            other => anyhow::bail!("--options must be a JSON object, got {other}"),
        },
        None => Map::new(),
    };

    let mut set = |key: &str, value: Value| {
        bag.insert(key.to_string(), value);
    };

    if let Some(encoding) = &args.encoding {
        set("encoding", Value::from(encoding.as_str()));
    }
    if let Some(min) = args.min {
        set("min", Value::from(min));
    }
    if let Some(max) = args.max {
        set("max", Value::from(max));
    }
    if let Some(orders) = &args.ngrams {
        set("nGrams", Value::from(orders.as_str()));
    }
    if args.no_ngrams {
        set("nGrams", Value::Bool(false));
    }
    if let Some(output) = &args.output {
        set("output", Value::from(output.as_str()));
    }
    if let Some(places) = args.places {
        set("places", Value::from(places));
    }
    if let Some(sort_by) = &args.sort_by {
        set("sortBy", Value::from(sort_by.as_str()));
    }
    if args.wc_grams {
        set("wcGrams", Value::Bool(true));
    }
    if let Some(locale) = &args.locale {
        set("locale", Value::from(locale.as_str()));
    }

    Ok(Value::Object(bag))
}

/// Score the text (or stdin lines) in `args` and print JSON to stdout.
///
/// Unscorable input prints `null` rather than failing.
///
/// # Errors
///
/// Returns an error for malformed `--options`, a missing text argument, or
/// I/O failures on stdin/stdout.
pub(crate) fn run_score(scorer: &Scorer, args: &ScoreArgs) -> anyhow::Result<()> {
    let (config, warnings) = ScoreConfig::from_options(&option_bag(args)?);
    if !warnings.is_empty() {
        tracing::debug!(count = warnings.len(), "score options were coerced");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.stdin {
        let stdin = std::io::stdin();
        let mut scored = 0usize;
        for line in stdin.lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            writeln!(out, "{}", render(scorer, &line, &config, args.pretty)?)?;
            scored += 1;
        }
        tracing::info!(lines = scored, "stdin scoring complete");
        return Ok(());
    }

    let Some(text) = args.text.as_deref() else {
        anyhow::bail!("no text given; pass TEXT or --stdin");
    };
    writeln!(out, "{}", render(scorer, text, &config, args.pretty)?)?;
    Ok(())
}

fn render(scorer: &Scorer, text: &str, config: &ScoreConfig, pretty: bool) -> anyhow::Result<String> {
    let result = scorer.score(text, config);
    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(json)
}

#[cfg(test)]
#[path = "score_test.rs"]
mod tests;

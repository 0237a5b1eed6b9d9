//! Text normalization and word tokenization.

use std::borrow::Cow;
use std::sync::LazyLock;

use affectlex_core::{Locale, SpellingTable};
use regex::Regex;

/// Splits normalized text into an ordered sequence of word tokens.
///
/// Implementations must be pure: the same input always yields the same
/// tokens. N-grams are built from this same sequence, so a tokenizer also
/// defines what a multi-word span is.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

// Links are matched whole so they can be dropped; emoticons keep their punctuation.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
          (?:[\p{L}][\p{L}\p{N}+.\-]*://|www\.)\S+
        | [\p{L}\p{N}._%+\-]+@[\p{L}\p{N}\-]+(?:\.[\p{L}\p{N}\-]+)+
        | [@\#][\p{L}\p{N}_]+
        | <3
        | [:;][\-o']?[\)\]\(\[dp/\\|]
        | [\p{L}\p{N}]+(?:['\-][\p{L}\p{N}]+)*
        ",
    )
    .expect("valid token regex")
});

/// Default tokenizer for English social-media style text.
///
/// Produces words (letters/digits with inner apostrophes or hyphens),
/// `@mentions`, `#hashtags` and simple emoticons. URLs, email addresses,
/// punctuation and whitespace never become tokens. A colon inside a word
/// (`note:perfect`) is a separator, not the start of an emoticon.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        while let Some(m) = TOKEN_RE.find_at(text, pos) {
            let token = m.as_str();
            if !on_token_boundary(text, m.start(), m.end(), token) {
                // Resume one character in so the rest of the word still tokenizes.
                pos = m.start() + token.chars().next().map_or(1, char::len_utf8);
                continue;
            }
            pos = m.end();
            if !is_link(token) {
                tokens.push(token.to_string());
            }
        }
        tokens
    }
}

/// Tags must start a token. Emoticons must not run into a following word or path.
fn on_token_boundary(text: &str, start: usize, end: usize, token: &str) -> bool {
    if token.starts_with(['@', '#']) {
        return !text[..start]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric);
    }
    if token.starts_with([':', ';', '<']) {
        return !text[end..]
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '/' || c == '\\');
    }
    true
}

fn is_link(token: &str) -> bool {
    token.contains("://")
        || token.starts_with("www.")
        || (token.contains('@') && !token.starts_with('@'))
}

/// Lower-case and trim `text`, fold typographic apostrophes, and rewrite GB
/// spellings to US when `locale` asks for it.
#[must_use]
pub fn normalize(text: &str, locale: Locale, spellings: &SpellingTable) -> String {
    let lowered = text.trim().to_lowercase().replace(['\u{2019}', '\u{2018}'], "'");
    match locale {
        Locale::Us => lowered,
        Locale::Gb => match spellings.to_us(&lowered) {
            Cow::Borrowed(_) => lowered,
            Cow::Owned(translated) => translated,
        },
    }
}

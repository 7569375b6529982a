//! Word tokenizer and English stemmer

use regex::Regex;
use savanna_domain::traits::{Stemmer, Tokenizer};
use once_cell::sync::Lazy;

/// Anything that is not a letter, digit or underscore separates words
static WORD_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\p{L}\p{N}_]+").expect("word separator pattern is valid")
});

/// Splits text on punctuation and whitespace, lowercasing every token
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        WORD_SEPARATOR
            .split(&text.to_lowercase())
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Snowball English stemmer
pub struct EnglishStemmer {
    inner: rust_stemmers::Stemmer,
}

impl EnglishStemmer {
    /// Create a new English stemmer
    pub fn new() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(rust_stemmers::Algorithm::English),
        }
    }
}

impl Default for EnglishStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EnglishStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("EnglishStemmer")
    }
}

impl Stemmer for EnglishStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}

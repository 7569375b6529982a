//! Trait definitions for the text collaborators
//!
//! The analyzer only relies on the contract "same input, same output".
//! Implementations live in the analyzer crate.

/// Splits text into lowercase word tokens
pub trait Tokenizer {
    /// Tokenize a string; empty or whitespace-only input yields no tokens
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Reduces a token to its stem
pub trait Stemmer {
    /// Stem a single lowercase token
    fn stem(&self, token: &str) -> String;

    /// Stem every token in order
    fn stem_all(&self, tokens: &[String]) -> Vec<String> {
        tokens.iter().map(|token| self.stem(token)).collect()
    }
}

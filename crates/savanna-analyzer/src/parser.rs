//! Indicator extraction and passage parsing

use crate::classifier::KeywordClassifier;
use crate::lexicon::{INDICATOR_VOCABULARY, TEMPORAL_VOCABULARY};
use crate::tokenizer::WordTokenizer;
use crate::types::{ParsedText, TemporalContext};
use savanna_domain::traits::Tokenizer;
use std::collections::HashSet;

/// Pulls ecological vocabulary out of free text
#[derive(Debug, Clone)]
pub struct TextParser<T = WordTokenizer> {
    tokenizer: T,
    vocabulary: HashSet<&'static str>,
    temporal_words: HashSet<&'static str>,
    classifier: KeywordClassifier,
}

impl TextParser<WordTokenizer> {
    /// Parser over the built-in vocabularies with the default tokenizer
    pub fn new() -> Self {
        Self::with_tokenizer(WordTokenizer)
    }
}

impl Default for TextParser<WordTokenizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tokenizer> TextParser<T> {
    /// Parser using a caller-supplied tokenizer
    pub fn with_tokenizer(tokenizer: T) -> Self {
        Self {
            tokenizer,
            vocabulary: INDICATOR_VOCABULARY.iter().copied().collect(),
            temporal_words: TEMPORAL_VOCABULARY.iter().copied().collect(),
            classifier: KeywordClassifier::new(),
        }
    }

    /// Ecological vocabulary in `text`, deduplicated in first-occurrence order
    pub fn extract_indicators(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .filter(|token| self.vocabulary.contains(token.as_str()))
            .filter(|token| seen.insert(token.clone()))
            .collect()
    }

    /// Historical if any temporal marker word appears
    pub fn temporal_context(&self, text: &str) -> TemporalContext {
        let historical = self
            .tokenizer
            .tokenize(text)
            .iter()
            .any(|token| self.temporal_words.contains(token.as_str()));

        if historical {
            TemporalContext::Historical
        } else {
            TemporalContext::Modern
        }
    }

    /// Indicators, keyword classification and temporal framing of a passage
    pub fn parse(&self, text: &str) -> ParsedText {
        let indicators = self.extract_indicators(text);
        let ecosystem_type = self.classifier.classify(&indicators).ecosystem_type;

        ParsedText {
            indicators,
            ecosystem_type,
            temporal_context: self.temporal_context(text),
        }
    }
}

//! Historical-versus-modern comparison

use crate::config::DEFAULT_COMPARISON_THRESHOLD;
use crate::error::AnalyzerError;
use crate::tokenizer::{EnglishStemmer, WordTokenizer};
use savanna_domain::traits::{Stemmer, Tokenizer};
use savanna_domain::{ComparisonResult, EcosystemResult};
use std::collections::HashSet;
use tracing::{debug, info};

/// Checks how much of each historical description recurs in modern text
///
/// Matching is per stemmed term: a description's terms are split on
/// whitespace and stemmed, and each one that appears among the stemmed
/// modern tokens counts once. A result whose ratio is strictly above the
/// threshold is a match; anything else is a discrepancy.
#[derive(Debug)]
pub struct ModernDataComparator<T = WordTokenizer, S = EnglishStemmer> {
    tokenizer: T,
    stemmer: S,
    threshold: f64,
}

impl ModernDataComparator {
    /// Comparator with the default tokenizer, stemmer and 0.3 threshold
    pub fn new() -> Self {
        Self::with_parts(WordTokenizer, EnglishStemmer::new(), DEFAULT_COMPARISON_THRESHOLD)
    }
}

impl Default for ModernDataComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tokenizer, S: Stemmer> ModernDataComparator<T, S> {
    /// Comparator from explicit collaborators and threshold
    pub fn with_parts(tokenizer: T, stemmer: S, threshold: f64) -> Self {
        Self {
            tokenizer,
            stemmer,
            threshold,
        }
    }

    /// Same comparator with a different match threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Compare historical results against a UTF-8 modern text buffer
    pub fn compare(
        &self,
        historical: &[EcosystemResult],
        modern_data: &[u8],
    ) -> Result<ComparisonResult, AnalyzerError> {
        let modern_text = std::str::from_utf8(modern_data)?;
        let modern_stems: HashSet<String> = self
            .stemmer
            .stem_all(&self.tokenizer.tokenize(modern_text))
            .into_iter()
            .collect();

        debug!("Modern sample has {} distinct stems", modern_stems.len());

        let mut matches = Vec::new();
        let mut discrepancies = Vec::new();

        for result in historical {
            let confidence = self.match_ratio(&result.description, &modern_stems);
            if confidence > self.threshold {
                matches.push(result.with_confidence(confidence));
            } else {
                discrepancies.push(format!(
                    "Discrepancy found for {}: {}",
                    result.ecosystem_type, result.description
                ));
            }
        }

        let confidence = if matches.is_empty() {
            0.0
        } else {
            matches.iter().map(|m| m.confidence).sum::<f64>() / matches.len() as f64
        };

        info!(
            "Comparison complete: {} matches, {} discrepancies",
            matches.len(),
            discrepancies.len()
        );

        Ok(ComparisonResult {
            matches,
            confidence,
            discrepancies,
        })
    }

    fn match_ratio(&self, description: &str, modern_stems: &HashSet<String>) -> f64 {
        let lowered = description.to_lowercase();
        let terms: Vec<&str> = lowered.split_whitespace().collect();
        let matched = terms
            .iter()
            .filter(|term| modern_stems.contains(&self.stemmer.stem(term)))
            .count();
        matched as f64 / terms.len().max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use savanna_domain::{ClassifierStrategy, EcosystemType};

    fn historical(description: &str) -> EcosystemResult {
        EcosystemResult {
            text_id: "h1".to_string(),
            ecosystem_type: EcosystemType::Savanna,
            confidence: 0.9,
            extracted_features: vec![],
            timestamp: 1850.0,
            description: description.to_string(),
            strategy: ClassifierStrategy::KeywordScoring,
        }
    }

    #[test]
    fn test_full_overlap_is_a_match() {
        let comparator = ModernDataComparator::new();
        let result = comparator
            .compare(&[historical("acacia zebra")], b"Zebras graze beneath the acacias.")
            .unwrap();
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].confidence, 1.0);
        assert_eq!(result.confidence, 1.0);
        assert!(!result.has_discrepancies());
    }

    #[test]
    fn test_low_overlap_is_a_discrepancy() {
        let comparator = ModernDataComparator::new();
        let result = comparator
            .compare(&[historical("acacia baobab zebra giraffe")], b"maize fields and a zebra")
            .unwrap();
        assert!(result.matches.is_empty());
        assert_eq!(result.confidence, 0.0);
        assert_eq!(
            result.discrepancies,
            vec!["Discrepancy found for savanna: acacia baobab zebra giraffe"]
        );
    }

    #[test]
    fn test_exactly_thirty_percent_is_a_discrepancy() {
        let comparator = ModernDataComparator::new();
        let description = "acacia baobab zebra giraffe lion leopard cheetah elephant rhino hippo";
        let result = comparator
            .compare(&[historical(description)], b"acacia baobab zebra")
            .unwrap();
        assert!(result.matches.is_empty());
        assert_eq!(result.discrepancies.len(), 1);
    }

    #[test]
    fn test_above_threshold_overwrites_confidence() {
        let comparator = ModernDataComparator::new();
        let result = comparator
            .compare(&[historical("acacia baobab zebra giraffe")], b"a baobab and a giraffe")
            .unwrap();
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].confidence, 0.5);
        assert_eq!(result.matches[0].text_id, "h1");
    }

    #[test]
    fn test_invalid_utf8_is_a_decoding_error() {
        let comparator = ModernDataComparator::new();
        let result = comparator.compare(&[historical("acacia")], &[0xff, 0xfe, 0x41]);
        assert!(matches!(result, Err(AnalyzerError::Decoding(_))));
    }

    #[test]
    fn test_empty_description_never_matches() {
        let comparator = ModernDataComparator::new();
        let result = comparator.compare(&[historical("")], b"acacia").unwrap();
        assert!(result.matches.is_empty());
        assert_eq!(result.discrepancies, vec!["Discrepancy found for savanna: "]);
    }

    #[test]
    fn test_custom_threshold() {
        let comparator = ModernDataComparator::new().with_threshold(0.6);
        let result = comparator
            .compare(&[historical("acacia baobab zebra giraffe")], b"a baobab and a giraffe")
            .unwrap();
        assert!(result.matches.is_empty());
    }
}

//! Keyword and fuzzy-match ecosystem classifier

use crate::lexicon::{ECOSYSTEM_KEYWORDS, FUZZY_MATCH_THRESHOLD, TIE_BREAK_ORDER};
use crate::types::Classification;
use savanna_domain::EcosystemType;
use strsim::jaro_winkler;

/// Scores indicators against per-ecosystem keyword tables
///
/// An indicator counts once toward every category where it contains a
/// keyword or is Jaro-Winkler similar to one above the fuzzy threshold.
/// The top score wins; ties go to the first category in
/// [`TIE_BREAK_ORDER`]. Pure: the tables are `'static` and never mutate.
#[derive(Debug, Clone, Copy)]
pub struct KeywordClassifier {
    table: &'static [(EcosystemType, &'static [&'static str])],
    fuzzy_threshold: f64,
}

impl KeywordClassifier {
    /// Classifier over the built-in keyword table
    pub fn new() -> Self {
        Self {
            table: ECOSYSTEM_KEYWORDS,
            fuzzy_threshold: FUZZY_MATCH_THRESHOLD,
        }
    }

    /// Classify a list of indicators
    pub fn classify<S: AsRef<str>>(&self, indicators: &[S]) -> Classification {
        let original: Vec<String> = indicators.iter().map(|i| i.as_ref().to_string()).collect();
        if original.is_empty() {
            return Classification::unknown(Vec::new());
        }

        let normalized: Vec<String> = original.iter().map(|i| i.to_lowercase()).collect();

        let scores: Vec<(EcosystemType, usize)> = self
            .table
            .iter()
            .map(|(ecosystem, keywords)| {
                let score = normalized
                    .iter()
                    .filter(|indicator| self.matches_any(indicator, keywords))
                    .count();
                (*ecosystem, score)
            })
            .collect();

        let max_score = scores.iter().map(|(_, score)| *score).max().unwrap_or(0);
        if max_score == 0 {
            return Classification::unknown(original);
        }

        let tied: Vec<EcosystemType> = scores
            .iter()
            .filter(|(_, score)| *score == max_score)
            .map(|(ecosystem, _)| *ecosystem)
            .collect();

        let winner = TIE_BREAK_ORDER
            .iter()
            .copied()
            .find(|preferred| tied.contains(preferred))
            .unwrap_or(tied[0]);

        Classification {
            ecosystem_type: winner,
            confidence: max_score as f64 / original.len() as f64,
            indicators: original,
        }
    }

    /// Confidence clamped to [0, 1], zero for unknown results
    pub fn score_confidence(&self, classification: &Classification) -> f64 {
        if classification.ecosystem_type.is_unknown() {
            return 0.0;
        }
        classification.confidence.clamp(0.0, 1.0)
    }

    fn matches_any(&self, indicator: &str, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| {
            indicator.contains(keyword) || jaro_winkler(indicator, keyword) > self.fuzzy_threshold
        })
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_indicators_are_unknown() {
        let classifier = KeywordClassifier::new();
        let result = classifier.classify::<&str>(&[]);
        assert_eq!(result.ecosystem_type, EcosystemType::Unknown);
        assert_eq!(result.confidence, 0.0);
        assert!(result.indicators.is_empty());
    }

    #[test]
    fn test_savanna_indicators() {
        let classifier = KeywordClassifier::new();
        let result = classifier.classify(&["acacia", "baobab", "zebra"]);
        assert_eq!(result.ecosystem_type, EcosystemType::Savanna);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_forest_indicators() {
        let classifier = KeywordClassifier::new();
        let result = classifier.classify(&["dense", "canopy"]);
        assert_eq!(result.ecosystem_type, EcosystemType::Forest);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_unmatched_indicators_keep_input() {
        let classifier = KeywordClassifier::new();
        let result = classifier.classify(&["xylophone", "quartz"]);
        assert_eq!(result.ecosystem_type, EcosystemType::Unknown);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.indicators, vec!["xylophone", "quartz"]);
    }

    #[test]
    fn test_savanna_wins_tie_with_forest() {
        // "trees" is a keyword of both savanna and forest
        let classifier = KeywordClassifier::new();
        let result = classifier.classify(&["trees"]);
        assert_eq!(result.ecosystem_type, EcosystemType::Savanna);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_indicators_are_case_insensitive_but_returned_verbatim() {
        let classifier = KeywordClassifier::new();
        let result = classifier.classify(&["CANOPY", "Dense"]);
        assert_eq!(result.ecosystem_type, EcosystemType::Forest);
        assert_eq!(result.indicators, vec!["CANOPY", "Dense"]);
    }

    #[test]
    fn test_substring_match() {
        // "thornbushes" contains "thorn", "bush" and "thornbush"; counted once
        let classifier = KeywordClassifier::new();
        let result = classifier.classify(&["thornbushes"]);
        assert_eq!(result.ecosystem_type, EcosystemType::ThornScrub);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_duplicates_count_toward_confidence() {
        let classifier = KeywordClassifier::new();
        let result = classifier.classify(&["canopy", "canopy", "xylophone"]);
        assert_eq!(result.ecosystem_type, EcosystemType::Forest);
        assert!((result.confidence - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.indicators.len(), 3);
    }

    #[test]
    fn test_score_confidence() {
        let classifier = KeywordClassifier::new();
        let unknown = Classification::unknown(vec!["quartz".to_string()]);
        assert_eq!(classifier.score_confidence(&unknown), 0.0);

        let inflated = Classification {
            ecosystem_type: EcosystemType::Forest,
            confidence: 1.4,
            indicators: vec![],
        };
        assert_eq!(classifier.score_confidence(&inflated), 1.0);
    }
}

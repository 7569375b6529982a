//! Classification result module

use crate::EcosystemType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which classifier produced a result
///
/// The two strategies use different signals and different keyword tables,
/// so their outputs are not interchangeable. Every result records the one
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierStrategy {
    /// Deterministic keyword and fuzzy-match scoring over extracted indicators
    #[default]
    KeywordScoring,

    /// Naive Bayes model trained on a fixed labelled corpus, run on raw tokens
    TrainedModel,
}

impl ClassifierStrategy {
    /// Get the strategy name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierStrategy::KeywordScoring => "keyword_scoring",
            ClassifierStrategy::TrainedModel => "trained_model",
        }
    }

    /// Parse a strategy, accepting the short CLI spellings
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "keyword" | "keyword_scoring" => Some(ClassifierStrategy::KeywordScoring),
            "trained" | "bayes" | "trained_model" => Some(ClassifierStrategy::TrainedModel),
            _ => None,
        }
    }
}

impl fmt::Display for ClassifierStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a single historical text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemResult {
    /// ID of the classified text
    pub text_id: String,

    /// Winning category
    pub ecosystem_type: EcosystemType,

    /// Score in [0.0, 1.0], not a calibrated probability
    ///
    /// Keyword scoring yields a matched-indicator ratio. The trained model
    /// yields the normalized naive Bayes posterior of the winning category.
    pub confidence: f64,

    /// Indicators (keyword path) or matched category names (trained path)
    pub extracted_features: Vec<String>,

    /// Timestamp copied from the source text
    pub timestamp: f64,

    /// Descriptive text checked against modern data by the comparator
    #[serde(default)]
    pub description: String,

    /// Classifier that produced this result
    #[serde(default)]
    pub strategy: ClassifierStrategy,
}

impl EcosystemResult {
    /// Copy of this result with the confidence replaced
    pub fn with_confidence(&self, confidence: f64) -> Self {
        Self {
            confidence,
            ..self.clone()
        }
    }
}

//! Intermediate and report types produced by the analyzer

use savanna_domain::{ClassifierStrategy, ComparisonResult, EcosystemResult, EcosystemType, TemporalAnalysis};
use serde::{Deserialize, Serialize};

/// Output of the keyword classifier for one indicator list
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// Winning category, `Unknown` when nothing matched
    pub ecosystem_type: EcosystemType,

    /// Winning score over indicator count
    pub confidence: f64,

    /// Indicators exactly as passed in, duplicates included
    pub indicators: Vec<String>,
}

impl Classification {
    /// The result for an empty or unmatched indicator list
    pub fn unknown(indicators: Vec<String>) -> Self {
        Self {
            ecosystem_type: EcosystemType::Unknown,
            confidence: 0.0,
            indicators,
        }
    }
}

/// Whether a passage describes the past or the present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalContext {
    /// At least one temporal marker word appears
    Historical,
    /// No temporal marker words
    Modern,
}

/// Structured view of a single passage
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedText {
    /// Ecological vocabulary found in the passage, first-occurrence order
    pub indicators: Vec<String>,

    /// Keyword classification of the indicators
    pub ecosystem_type: EcosystemType,

    /// Historical or modern framing of the passage
    pub temporal_context: TemporalContext,
}

/// Everything one analysis run produces
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Classifier used for every result below
    pub strategy: ClassifierStrategy,

    /// Per-text results, input order, after the confidence filter
    pub results: Vec<EcosystemResult>,

    /// Trend aggregation, when enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temporal: Option<TemporalAnalysis>,

    /// Modern-data comparison, when enabled and modern data was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonResult>,

    /// Conservation recommendation over the filtered results
    pub recommendation: String,
}

//! Comparison module - historical results checked against modern text

use crate::EcosystemResult;
use serde::{Deserialize, Serialize};

/// Outcome of comparing historical classifications with a modern sample
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Results whose description recurs in the modern text; confidence is the match ratio
    pub matches: Vec<EcosystemResult>,

    /// Mean confidence of `matches`, 0.0 when there are none
    pub confidence: f64,

    /// One human-readable line per result that failed to recur
    pub discrepancies: Vec<String>,
}

impl ComparisonResult {
    /// Whether any historical result failed to recur
    pub fn has_discrepancies(&self) -> bool {
        !self.discrepancies.is_empty()
    }
}

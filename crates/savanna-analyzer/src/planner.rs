//! Conservation recommendations

use savanna_domain::{EcosystemResult, EcosystemType};

/// Fallback when there is nothing to recommend from
pub const NO_DATA_RECOMMENDATION: &str = "No analysis data available for recommendation.";

/// Turns a set of classifications into a one-paragraph recommendation
#[derive(Debug, Clone, Copy, Default)]
pub struct ConservationPlanner;

impl ConservationPlanner {
    /// Create a planner
    pub fn new() -> Self {
        Self
    }

    /// Recommendation text for the given results
    pub fn generate_recommendation(&self, analysis: &[EcosystemResult]) -> String {
        let types: Vec<EcosystemType> = analysis.iter().map(|r| r.ecosystem_type).collect();

        let Some(&first) = types.first() else {
            return NO_DATA_RECOMMENDATION.to_string();
        };

        if types.iter().all(|t| *t == first) {
            return format!(
                "Conservation focus should be on maintaining {} ecosystem integrity. \
                 Historical data confirms this landscape type's natural occurrence.",
                first
            );
        }

        let dominant = dominant_type(&types).unwrap_or(first);
        format!(
            "Mixed ecosystem detected. Primary focus should be on preserving the {} ecosystem \
             while considering historical landscape transitions between different ecosystem types.",
            dominant
        )
    }
}

/// Most frequent type; among equally frequent types the one seen first in input order wins
pub fn dominant_type(types: &[EcosystemType]) -> Option<EcosystemType> {
    let mut counts: Vec<(EcosystemType, usize)> = Vec::new();
    for ecosystem in types {
        match counts.iter_mut().find(|(t, _)| t == ecosystem) {
            Some((_, count)) => *count += 1,
            None => counts.push((*ecosystem, 1)),
        }
    }

    let max = counts.iter().map(|(_, count)| *count).max()?;
    counts
        .into_iter()
        .find(|(_, count)| *count == max)
        .map(|(ecosystem, _)| ecosystem)
}

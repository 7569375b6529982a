//! Multinomial naive Bayes text classifier
//!
//! Documents are added as pre-processed token lists, then `train()` fixes
//! the model. Querying before training is a configuration error rather
//! than an empty answer.

use crate::error::AnalyzerError;
use savanna_domain::EcosystemType;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Posterior for one label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelScore {
    /// Candidate label
    pub label: EcosystemType,
    /// Normalized posterior in [0, 1]
    pub value: f64,
}

#[derive(Debug, Clone)]
struct LabelStats {
    label: EcosystemType,
    documents: usize,
    token_counts: HashMap<String, usize>,
    total_tokens: usize,
}

#[derive(Debug, Clone)]
struct TrainedModel {
    labels: Vec<LabelStats>,
    vocabulary: HashSet<String>,
    total_documents: usize,
}

/// Naive Bayes classifier with Laplace smoothing
#[derive(Debug, Clone, Default)]
pub struct NaiveBayes {
    documents: Vec<(Vec<String>, EcosystemType)>,
    model: Option<TrainedModel>,
}

impl NaiveBayes {
    /// Empty, untrained classifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a labelled document; invalidates any previous training
    pub fn add_document(&mut self, tokens: Vec<String>, label: EcosystemType) {
        self.documents.push((tokens, label));
        self.model = None;
    }

    /// Whether `train()` has run since the last document was added
    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }

    /// Fit label priors and per-label token counts
    pub fn train(&mut self) {
        let mut labels: Vec<LabelStats> = Vec::new();
        let mut vocabulary = HashSet::new();

        for (tokens, label) in &self.documents {
            let index = match labels.iter().position(|stats| stats.label == *label) {
                Some(index) => index,
                None => {
                    labels.push(LabelStats {
                        label: *label,
                        documents: 0,
                        token_counts: HashMap::new(),
                        total_tokens: 0,
                    });
                    labels.len() - 1
                }
            };

            let stats = &mut labels[index];
            stats.documents += 1;
            for token in tokens {
                *stats.token_counts.entry(token.clone()).or_insert(0) += 1;
                stats.total_tokens += 1;
                vocabulary.insert(token.clone());
            }
        }

        debug!(
            "Trained naive Bayes on {} documents, {} labels, {} distinct tokens",
            self.documents.len(),
            labels.len(),
            vocabulary.len()
        );

        self.model = Some(TrainedModel {
            labels,
            vocabulary,
            total_documents: self.documents.len(),
        });
    }

    /// Number of tokens the trained model has seen before
    pub fn known_tokens(&self, tokens: &[String]) -> Result<usize, AnalyzerError> {
        let model = self.model.as_ref().ok_or(AnalyzerError::NotTrained)?;
        Ok(tokens.iter().filter(|t| model.vocabulary.contains(*t)).count())
    }

    /// Posterior for every label, highest first; ties keep training order
    pub fn classifications(&self, tokens: &[String]) -> Result<Vec<LabelScore>, AnalyzerError> {
        let model = self.model.as_ref().ok_or(AnalyzerError::NotTrained)?;
        if model.labels.is_empty() {
            return Ok(Vec::new());
        }

        let vocabulary_size = model.vocabulary.len() as f64;
        let log_scores: Vec<(EcosystemType, f64)> = model
            .labels
            .iter()
            .map(|stats| {
                let prior = (stats.documents as f64 / model.total_documents as f64).ln();
                let denominator = stats.total_tokens as f64 + vocabulary_size;
                let likelihood: f64 = tokens
                    .iter()
                    .filter(|token| model.vocabulary.contains(*token))
                    .map(|token| {
                        let count = stats.token_counts.get(token).copied().unwrap_or(0) as f64;
                        ((count + 1.0) / denominator).ln()
                    })
                    .sum();
                (stats.label, prior + likelihood)
            })
            .collect();

        // log-sum-exp keeps long passages from underflowing
        let max_log = log_scores
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);
        let total: f64 = log_scores.iter().map(|(_, s)| (s - max_log).exp()).sum();

        let mut scores: Vec<LabelScore> = log_scores
            .into_iter()
            .map(|(label, score)| LabelScore {
                label,
                value: (score - max_log).exp() / total,
            })
            .collect();
        scores.sort_by(|a, b| b.value.total_cmp(&a.value));
        Ok(scores)
    }

    /// Most probable label
    pub fn classify(&self, tokens: &[String]) -> Result<Option<LabelScore>, AnalyzerError> {
        Ok(self.classifications(tokens)?.into_iter().next())
    }
}

//! Configuration for the analyzer

use crate::error::AnalyzerError;
use savanna_domain::ClassifierStrategy;
use serde::{Deserialize, Serialize};

/// Default share of description terms that must recur in modern text
pub const DEFAULT_COMPARISON_THRESHOLD: f64 = 0.3;

/// How the temporal aggregator groups results into timeline entries
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum TimelineGrouping {
    /// Join an entry only if it already lists the exact same timestamp
    ExactTimestamp,
    /// Join the entry whose bucket `floor(ts / width)` matches, recording every timestamp
    Bucketed {
        /// Bucket width in timestamp units
        width: f64,
    },
}

impl Default for TimelineGrouping {
    fn default() -> Self {
        TimelineGrouping::ExactTimestamp
    }
}

/// Configuration for an analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Compute trend aggregation in addition to per-text classification
    pub include_temporal_analysis: bool,

    /// Caller-side filter on result confidence; classification itself ignores it
    pub confidence_threshold: f64,

    /// Run the modern-data comparator when modern text is supplied
    pub include_comparative_analysis: bool,

    /// Classifier used for every text in the run
    pub strategy: ClassifierStrategy,

    /// Match ratio a historical result must exceed to count as recurring
    pub comparison_threshold: f64,

    /// Timeline grouping rule for the temporal aggregator
    pub timeline_grouping: TimelineGrouping,
}

impl AnalysisConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if !(0.0..=1.0).contains(&self.confidence_threshold) {
            return Err(AnalyzerError::Config(format!(
                "confidence_threshold {} out of range [0.0, 1.0]",
                self.confidence_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.comparison_threshold) {
            return Err(AnalyzerError::Config(format!(
                "comparison_threshold {} out of range [0.0, 1.0]",
                self.comparison_threshold
            )));
        }
        if let TimelineGrouping::Bucketed { width } = self.timeline_grouping {
            if !(width.is_finite() && width > 0.0) {
                return Err(AnalyzerError::Config(format!(
                    "bucket width must be a positive number, got {}",
                    width
                )));
            }
        }
        Ok(())
    }

    /// Use a different classifier strategy
    pub fn with_strategy(mut self, strategy: ClassifierStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, AnalyzerError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, AnalyzerError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            include_temporal_analysis: true,
            confidence_threshold: 0.0,
            include_comparative_analysis: false,
            strategy: ClassifierStrategy::KeywordScoring,
            comparison_threshold: DEFAULT_COMPARISON_THRESHOLD,
            timeline_grouping: TimelineGrouping::ExactTimestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalysisConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.comparison_threshold, 0.3);
        assert_eq!(config.timeline_grouping, TimelineGrouping::ExactTimestamp);
    }

    #[test]
    fn test_invalid_confidence_threshold() {
        let mut config = AnalysisConfig::default();
        config.confidence_threshold = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_bucket_width() {
        let mut config = AnalysisConfig::default();
        config.timeline_grouping = TimelineGrouping::Bucketed { width: 0.0 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AnalysisConfig::from_toml(
            r#"
            strategy = "trained_model"
            confidence_threshold = 0.4
            "#,
        )
        .unwrap();
        assert_eq!(config.strategy, ClassifierStrategy::TrainedModel);
        assert_eq!(config.confidence_threshold, 0.4);
        assert!(config.include_temporal_analysis);
    }

    #[test]
    fn test_bucketed_grouping_from_toml() {
        let config = AnalysisConfig::from_toml(
            r#"
            [timeline_grouping]
            mode = "bucketed"
            width = 10.0
            "#,
        )
        .unwrap();
        assert_eq!(config.timeline_grouping, TimelineGrouping::Bucketed { width: 10.0 });
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        let result = AnalysisConfig::from_toml("comparison_threshold = -0.1");
        assert!(matches!(result, Err(AnalyzerError::Config(_))));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AnalysisConfig::default().with_strategy(ClassifierStrategy::TrainedModel);
        let toml_str = config.to_toml().unwrap();
        let parsed = AnalysisConfig::from_toml(&toml_str).unwrap();

        assert_eq!(parsed.strategy, ClassifierStrategy::TrainedModel);
        assert_eq!(parsed.include_temporal_analysis, config.include_temporal_analysis);
        assert_eq!(parsed.comparison_threshold, config.comparison_threshold);
    }
}

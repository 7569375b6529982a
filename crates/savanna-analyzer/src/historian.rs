//! Analysis entry point: per-text classification and batch aggregation

use crate::bayes::NaiveBayes;
use crate::classifier::KeywordClassifier;
use crate::comparator::ModernDataComparator;
use crate::config::AnalysisConfig;
use crate::error::AnalyzerError;
use crate::lexicon::{FEATURE_KEYWORDS, STOP_WORDS, TRAINING_CORPUS};
use crate::parser::TextParser;
use crate::planner::ConservationPlanner;
use crate::timeline;
use crate::tokenizer::{EnglishStemmer, WordTokenizer};
use crate::types::AnalysisReport;
use savanna_domain::traits::{Stemmer, Tokenizer};
use savanna_domain::{
    ClassifierStrategy, ComparisonResult, EcosystemResult, EcosystemType, HistoricalText,
    TemporalAnalysis,
};
use tracing::{debug, info};

/// Classifies historical texts and aggregates the results
///
/// Construction trains the naive Bayes model on the fixed corpus, so every
/// `Historian` can serve both strategies. All methods take `&self`.
pub struct Historian {
    config: AnalysisConfig,
    tokenizer: WordTokenizer,
    stemmer: EnglishStemmer,
    parser: TextParser,
    classifier: KeywordClassifier,
    model: NaiveBayes,
    comparator: ModernDataComparator,
    planner: ConservationPlanner,
}

impl Historian {
    /// Create a historian, validating the config and training the model
    pub fn new(config: AnalysisConfig) -> Result<Self, AnalyzerError> {
        config.validate()?;

        let tokenizer = WordTokenizer;
        let stemmer = EnglishStemmer::new();

        let mut model = NaiveBayes::new();
        for (sentence, label) in TRAINING_CORPUS {
            model.add_document(model_tokens(&tokenizer, &stemmer, sentence), *label);
        }
        model.train();

        let comparator = ModernDataComparator::new().with_threshold(config.comparison_threshold);

        Ok(Self {
            config,
            tokenizer,
            stemmer,
            parser: TextParser::new(),
            classifier: KeywordClassifier::new(),
            model,
            comparator,
            planner: ConservationPlanner::new(),
        })
    }

    /// Active configuration
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Classify every text with the configured strategy, in input order
    pub fn analyze(&self, texts: &[HistoricalText]) -> Result<Vec<EcosystemResult>, AnalyzerError> {
        self.analyze_with(texts, self.config.strategy)
    }

    /// Classify every text with an explicit strategy, in input order
    pub fn analyze_with(
        &self,
        texts: &[HistoricalText],
        strategy: ClassifierStrategy,
    ) -> Result<Vec<EcosystemResult>, AnalyzerError> {
        info!("Analyzing {} texts with {} strategy", texts.len(), strategy);
        texts
            .iter()
            .map(|text| self.classify_text(text, strategy))
            .collect()
    }

    /// Classify a single text
    pub fn classify_text(
        &self,
        text: &HistoricalText,
        strategy: ClassifierStrategy,
    ) -> Result<EcosystemResult, AnalyzerError> {
        let result = match strategy {
            ClassifierStrategy::KeywordScoring => self.classify_by_keywords(text),
            ClassifierStrategy::TrainedModel => self.classify_by_model(text)?,
        };
        debug!(
            "Text '{}' classified as {} ({:.2})",
            result.text_id, result.ecosystem_type, result.confidence
        );
        Ok(result)
    }

    fn classify_by_keywords(&self, text: &HistoricalText) -> EcosystemResult {
        let indicators = self.parser.extract_indicators(&text.content);
        let classification = self.classifier.classify(&indicators);
        let confidence = self.classifier.score_confidence(&classification);

        EcosystemResult {
            text_id: text.id.clone(),
            ecosystem_type: classification.ecosystem_type,
            confidence,
            extracted_features: classification.indicators,
            timestamp: text.timestamp,
            description: text.content.clone(),
            strategy: ClassifierStrategy::KeywordScoring,
        }
    }

    fn classify_by_model(&self, text: &HistoricalText) -> Result<EcosystemResult, AnalyzerError> {
        let raw_tokens = self.tokenizer.tokenize(&text.content);
        let tokens = model_tokens(&self.tokenizer, &self.stemmer, &text.content);

        // Without a single known token the posterior is just the prior
        let (ecosystem_type, confidence) = if self.model.known_tokens(&tokens)? == 0 {
            (EcosystemType::Unknown, 0.0)
        } else {
            match self.model.classify(&tokens)? {
                Some(best) => (best.label, best.value.clamp(0.0, 1.0)),
                None => (EcosystemType::Unknown, 0.0),
            }
        };

        Ok(EcosystemResult {
            text_id: text.id.clone(),
            ecosystem_type,
            confidence,
            extracted_features: feature_categories(&raw_tokens),
            timestamp: text.timestamp,
            description: text.content.clone(),
            strategy: ClassifierStrategy::TrainedModel,
        })
    }

    /// Classify every text, then build per-ecosystem timelines and trends
    pub fn analyze_temporal(&self, texts: &[HistoricalText]) -> Result<TemporalAnalysis, AnalyzerError> {
        let results = self.analyze(texts)?;
        Ok(timeline::aggregate(&results, self.config.timeline_grouping))
    }

    /// Keep results whose confidence reaches the configured threshold
    pub fn filter_by_confidence(&self, results: Vec<EcosystemResult>) -> Vec<EcosystemResult> {
        let threshold = self.config.confidence_threshold;
        results
            .into_iter()
            .filter(|result| result.confidence >= threshold)
            .collect()
    }

    /// Compare results against a modern text buffer
    pub fn compare(
        &self,
        historical: &[EcosystemResult],
        modern_data: &[u8],
    ) -> Result<ComparisonResult, AnalyzerError> {
        self.comparator.compare(historical, modern_data)
    }

    /// Recommendation paragraph for a set of results
    pub fn recommend(&self, results: &[EcosystemResult]) -> String {
        self.planner.generate_recommendation(results)
    }

    /// Full run: classification, optional aggregation and comparison, recommendation
    pub fn report(
        &self,
        texts: &[HistoricalText],
        modern_data: Option<&[u8]>,
    ) -> Result<AnalysisReport, AnalyzerError> {
        let results = self.analyze(texts)?;

        let temporal = self
            .config
            .include_temporal_analysis
            .then(|| timeline::aggregate(&results, self.config.timeline_grouping));

        let results = self.filter_by_confidence(results);

        let comparison = match modern_data {
            Some(data) if self.config.include_comparative_analysis => {
                Some(self.compare(&results, data)?)
            }
            _ => None,
        };

        let recommendation = self.recommend(&results);

        Ok(AnalysisReport {
            strategy: self.config.strategy,
            results,
            temporal,
            comparison,
            recommendation,
        })
    }
}

/// Lowercase tokens with stop words dropped, then stemmed
fn model_tokens(tokenizer: &WordTokenizer, stemmer: &EnglishStemmer, text: &str) -> Vec<String> {
    tokenizer
        .tokenize(text)
        .into_iter()
        .filter(|token| !STOP_WORDS.contains(&token.as_str()))
        .map(|token| stemmer.stem(&token))
        .collect()
}

/// Category names whose feature keywords occur among the raw tokens
fn feature_categories(tokens: &[String]) -> Vec<String> {
    FEATURE_KEYWORDS
        .iter()
        .filter(|(_, keywords)| tokens.iter().any(|token| keywords.contains(&token.as_str())))
        .map(|(ecosystem, _)| ecosystem.to_string())
        .collect()
}

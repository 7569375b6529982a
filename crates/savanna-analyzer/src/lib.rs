//! Savanna Historian Analyzer
//!
//! Classifies passages of historical text into ecosystem categories and
//! aggregates the classifications over time.
//!
//! # Overview
//!
//! Each passage is reduced to ecological indicators and scored against
//! per-ecosystem keyword tables, or run through a naive Bayes model trained
//! on a small labelled corpus. Batches of results are grouped into
//! per-ecosystem timelines with trend labels, compared against a modern
//! text sample, and summarized as a conservation recommendation.
//!
//! # Architecture
//!
//! ```text
//! HistoricalText → TextParser → KeywordClassifier ┐
//!                → WordTokenizer → NaiveBayes ────┴→ EcosystemResult
//! EcosystemResult → timeline::aggregate → TemporalAnalysis
//!                 → ModernDataComparator → ComparisonResult
//!                 → ConservationPlanner → recommendation
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use savanna_analyzer::{AnalysisConfig, Historian};
//! use savanna_domain::HistoricalText;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let historian = Historian::new(AnalysisConfig::default())?;
//!
//! let texts = vec![
//!     HistoricalText::new("burton-1857", "Acacia and baobab dot the plain; zebra everywhere.", 1857.0),
//!     HistoricalText::new("survey-1960", "Dense forest trees close over the valley.", 1960.0),
//! ];
//!
//! let analysis = historian.analyze_temporal(&texts)?;
//! for trend in &analysis.trends {
//!     println!("{}: {:?}", trend.ecosystem_type, trend.trend);
//! }
//!
//! let results = historian.analyze(&texts)?;
//! println!("{}", historian.recommend(&results));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod config;
mod types;
mod lexicon;
mod tokenizer;
mod parser;
mod classifier;
mod bayes;
mod comparator;
mod planner;
mod historian;
pub mod timeline;


pub use error::AnalyzerError;
pub use config::{AnalysisConfig, TimelineGrouping, DEFAULT_COMPARISON_THRESHOLD};
pub use types::{AnalysisReport, Classification, ParsedText, TemporalContext};
pub use lexicon::{ECOSYSTEM_KEYWORDS, FUZZY_MATCH_THRESHOLD, INDICATOR_VOCABULARY, TIE_BREAK_ORDER};
pub use tokenizer::{EnglishStemmer, WordTokenizer};
pub use parser::TextParser;
pub use classifier::KeywordClassifier;
pub use bayes::{LabelScore, NaiveBayes};
pub use comparator::ModernDataComparator;
pub use planner::{dominant_type, ConservationPlanner, NO_DATA_RECOMMENDATION};
pub use historian::Historian;

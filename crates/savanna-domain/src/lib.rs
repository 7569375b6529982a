//! Savanna Historian Domain Layer
//!
//! This crate defines the value types shared by the analyzer and the CLI:
//! the historical passages that come in, the classifications that go out,
//! and the traits for the text collaborators (tokenizer and stemmer).
//!
//! ## Key Concepts
//!
//! - **HistoricalText**: A passage of descriptive text with a timestamp
//! - **EcosystemType**: Closed set of landscape categories
//! - **EcosystemResult**: One classification, tagged with the strategy that produced it
//! - **TemporalAnalysis**: Per-ecosystem timelines and trend labels
//! - **ComparisonResult**: Historical results checked against a modern text sample
//!
//! ## Architecture
//!
//! - Only `serde` as an external dependency, for interchange
//! - No scoring or aggregation logic lives here
//! - Trait definitions for the tokenizer and stemmer collaborators

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comparison;
pub mod ecosystem;
pub mod result;
pub mod temporal;
pub mod text;
pub mod traits;

// Re-exports for convenience
pub use comparison::ComparisonResult;
pub use ecosystem::EcosystemType;
pub use result::{ClassifierStrategy, EcosystemResult};
pub use temporal::{EcosystemTrend, TemporalAnalysis, TimelineEntry, Trend};
pub use text::HistoricalText;

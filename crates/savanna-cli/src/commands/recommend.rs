//! Recommend command implementation.

use crate::cli::RecommendArgs;
use crate::config::load_texts;
use crate::error::Result;
use crate::output::Formatter;
use savanna_analyzer::{AnalysisConfig, Historian};

/// Execute the recommend command and return the formatted recommendation.
pub fn execute_recommend(
    args: RecommendArgs,
    mut config: AnalysisConfig,
    formatter: &Formatter,
) -> Result<String> {
    if let Some(strategy) = args.strategy {
        config.strategy = strategy.into();
    }

    let texts = load_texts(&args.input)?;
    let historian = Historian::new(config)?;
    let results = historian.filter_by_confidence(historian.analyze(&texts)?);

    formatter.format_recommendation(&historian.recommend(&results))
}

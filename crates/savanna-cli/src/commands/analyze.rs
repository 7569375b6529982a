//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::load_texts;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use savanna_analyzer::{AnalysisConfig, Historian};
use std::fs;
use tracing::info;

/// Execute the analyze command and return the formatted report.
pub fn execute_analyze(
    args: AnalyzeArgs,
    mut config: AnalysisConfig,
    formatter: &Formatter,
) -> Result<String> {
    if let Some(threshold) = args.threshold {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(CliError::InvalidInput(
                "Threshold must be between 0.0 and 1.0".to_string(),
            ));
        }
        config.confidence_threshold = threshold;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy.into();
    }
    if args.no_temporal {
        config.include_temporal_analysis = false;
    }

    let modern = match &args.modern {
        Some(path) => {
            config.include_comparative_analysis = true;
            Some(fs::read(path)?)
        }
        None => None,
    };

    let texts = load_texts(&args.input)?;
    let historian = Historian::new(config)?;
    let report = historian.report(&texts, modern.as_deref())?;

    info!(
        "Analyzed {} texts, reporting {} results",
        texts.len(),
        report.results.len()
    );

    formatter.format_report(&report)
}

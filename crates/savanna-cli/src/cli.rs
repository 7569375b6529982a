//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use savanna_domain::ClassifierStrategy;
use std::path::PathBuf;

/// Savanna Historian - classify historical texts into ecosystem types.
#[derive(Debug, Parser)]
#[command(name = "savannahistorian")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Analysis configuration file (TOML)
    #[arg(short, long, global = true, env = "SAVANNA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify texts and report trends, comparison and a recommendation
    Analyze(AnalyzeArgs),

    /// Print a conservation recommendation for the texts
    Recommend(RecommendArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// JSON file containing an array of historical texts
    #[arg(short, long)]
    pub input: PathBuf,

    /// Modern descriptive text to compare against (enables comparison)
    #[arg(short, long)]
    pub modern: Option<PathBuf>,

    /// Classifier strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Skip trend aggregation
    #[arg(long)]
    pub no_temporal: bool,

    /// Minimum confidence for reported results (0.0-1.0)
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// Arguments for the recommend command.
#[derive(Debug, Parser)]
pub struct RecommendArgs {
    /// JSON file containing an array of historical texts
    #[arg(short, long)]
    pub input: PathBuf,

    /// Classifier strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,
}

/// Strategy argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum StrategyArg {
    /// Keyword and fuzzy-match scoring
    Keyword,
    /// Trained naive Bayes model
    Trained,
}

impl From<CliFormat> for crate::output::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::output::OutputFormat::Table,
            CliFormat::Json => crate::output::OutputFormat::Json,
        }
    }
}

impl From<StrategyArg> for ClassifierStrategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::Keyword => ClassifierStrategy::KeywordScoring,
            StrategyArg::Trained => ClassifierStrategy::TrainedModel,
        }
    }
}

//! Output formatting for the CLI.

use crate::error::Result;
use colored::*;
use savanna_analyzer::AnalysisReport;
use savanna_domain::{ComparisonResult, EcosystemResult, TemporalAnalysis};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a full analysis report.
    pub fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(report)?);
        }

        let mut sections = vec![
            self.heading(&format!("Classifications ({})", report.strategy)),
            self.format_results_table(&report.results),
        ];

        if let Some(temporal) = &report.temporal {
            sections.push(self.heading("Trends"));
            sections.push(self.format_temporal_table(temporal));
        }

        if let Some(comparison) = &report.comparison {
            sections.push(self.heading("Modern comparison"));
            sections.push(self.format_comparison(comparison));
        }

        sections.push(self.heading("Recommendation"));
        sections.push(report.recommendation.clone());

        Ok(sections.join("\n"))
    }

    /// Format a recommendation on its own.
    pub fn format_recommendation(&self, recommendation: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(
                &serde_json::json!({ "recommendation": recommendation }),
            )?),
            OutputFormat::Table => Ok(recommendation.to_string()),
        }
    }

    /// Format per-text results as a table.
    fn format_results_table(&self, results: &[EcosystemResult]) -> String {
        if results.is_empty() {
            return self.colorize("No results.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Text", "Ecosystem", "Confidence", "Timestamp", "Features"]);

        for result in results {
            builder.push_record([
                result.text_id.clone(),
                result.ecosystem_type.to_string(),
                format!("{:.2}", result.confidence),
                result.timestamp.to_string(),
                result.extracted_features.join(", "),
            ]);
        }

        self.render(builder)
    }

    /// Format trends as a table.
    fn format_temporal_table(&self, temporal: &TemporalAnalysis) -> String {
        if temporal.trends.is_empty() {
            return self.colorize("No trends.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Ecosystem", "Trend", "Entries", "Count"]);

        for trend in &temporal.trends {
            builder.push_record([
                trend.ecosystem_type.to_string(),
                trend.trend.as_str().to_string(),
                trend.timeline.len().to_string(),
                trend.total_count().to_string(),
            ]);
        }

        format!(
            "{}\nTotal analyses: {}",
            self.render(builder),
            temporal.total_analyses
        )
    }

    /// Format comparison matches and discrepancies.
    fn format_comparison(&self, comparison: &ComparisonResult) -> String {
        let mut lines = vec![format!(
            "{} match(es), mean confidence {:.2}",
            comparison.matches.len(),
            comparison.confidence
        )];
        for matched in &comparison.matches {
            lines.push(self.success(&format!(
                "{} ({}) recurs at {:.2}",
                matched.text_id, matched.ecosystem_type, matched.confidence
            )));
        }
        for discrepancy in &comparison.discrepancies {
            lines.push(self.warning(discrepancy));
        }
        lines.join("\n")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    fn heading(&self, text: &str) -> String {
        if self.color_enabled {
            format!("\n{}", text.bold())
        } else {
            format!("\n{}", text)
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

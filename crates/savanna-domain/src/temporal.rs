//! Temporal module - timelines and trend labels

use crate::EcosystemType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction of an ecosystem's occurrence count across its timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    /// Last entry has a higher count than the first
    Increasing,

    /// Last entry has a lower count than the first
    Decreasing,

    /// Equal counts, or fewer than two entries
    Stable,
}

impl Trend {
    /// Get the trend name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Decreasing => "decreasing",
            Trend::Stable => "stable",
        }
    }
}

/// A group of classifications sharing a timestamp
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Timestamps in insertion order
    pub timestamps: Vec<f64>,

    /// Number of results folded into this entry (always >= 1)
    pub count: usize,
}

impl TimelineEntry {
    /// New entry holding a single result
    pub fn new(timestamp: f64) -> Self {
        Self {
            timestamps: vec![timestamp],
            count: 1,
        }
    }

    /// Smallest timestamp in the entry
    pub fn min_timestamp(&self) -> f64 {
        self.timestamps
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }

    /// Whether the entry already lists this exact timestamp
    pub fn contains(&self, timestamp: f64) -> bool {
        self.timestamps.iter().any(|&ts| ts == timestamp)
    }
}

/// Timeline and trend for one ecosystem type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemTrend {
    /// Ecosystem the timeline belongs to
    pub ecosystem_type: EcosystemType,

    /// Direction across the sorted timeline
    pub trend: Trend,

    /// Entries sorted by minimum timestamp, ascending
    pub timeline: Vec<TimelineEntry>,
}

impl EcosystemTrend {
    /// Sum of counts across the timeline
    pub fn total_count(&self) -> usize {
        self.timeline.iter().map(|entry| entry.count).sum()
    }
}

/// Aggregate view over a batch of classifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalAnalysis {
    /// One trend per ecosystem type present, in first-seen order
    pub trends: Vec<EcosystemTrend>,

    /// Number of texts classified
    pub total_analyses: usize,

    /// Result count per ecosystem type
    pub ecosystem_distribution: BTreeMap<EcosystemType, usize>,
}

impl TemporalAnalysis {
    /// Look up the trend for an ecosystem type
    pub fn trend_for(&self, ecosystem: EcosystemType) -> Option<&EcosystemTrend> {
        self.trends.iter().find(|t| t.ecosystem_type == ecosystem)
    }
}

//! Temporal aggregation of classification results

use crate::config::TimelineGrouping;
use savanna_domain::{EcosystemResult, EcosystemTrend, EcosystemType, TemporalAnalysis, TimelineEntry, Trend};
use std::collections::BTreeMap;
use tracing::debug;

/// Build per-ecosystem timelines and trend labels from results in input order
///
/// With [`TimelineGrouping::ExactTimestamp`] a result joins an existing
/// entry only when that entry already lists the result's exact timestamp;
/// joining increments the count without recording the timestamp again.
/// Otherwise a fresh single-timestamp entry is opened.
pub fn aggregate(results: &[EcosystemResult], grouping: TimelineGrouping) -> TemporalAnalysis {
    let mut timelines: Vec<(EcosystemType, Vec<TimelineEntry>)> = Vec::new();

    for result in results {
        let position = timelines
            .iter()
            .position(|(ecosystem, _)| *ecosystem == result.ecosystem_type);
        let index = match position {
            Some(index) => index,
            None => {
                timelines.push((result.ecosystem_type, Vec::new()));
                timelines.len() - 1
            }
        };
        place(&mut timelines[index].1, result.timestamp, grouping);
    }

    let trends: Vec<EcosystemTrend> = timelines
        .into_iter()
        .map(|(ecosystem_type, mut timeline)| {
            timeline.sort_by(|a, b| a.min_timestamp().total_cmp(&b.min_timestamp()));
            EcosystemTrend {
                ecosystem_type,
                trend: trend_of(&timeline),
                timeline,
            }
        })
        .collect();

    let ecosystem_distribution: BTreeMap<EcosystemType, usize> = trends
        .iter()
        .map(|trend| (trend.ecosystem_type, trend.total_count()))
        .collect();

    debug!(
        "Aggregated {} results into {} ecosystem timelines",
        results.len(),
        trends.len()
    );

    TemporalAnalysis {
        trends,
        total_analyses: results.len(),
        ecosystem_distribution,
    }
}

fn place(entries: &mut Vec<TimelineEntry>, timestamp: f64, grouping: TimelineGrouping) {
    match grouping {
        TimelineGrouping::ExactTimestamp => {
            if let Some(entry) = entries.iter_mut().find(|entry| entry.contains(timestamp)) {
                entry.count += 1;
            } else {
                entries.push(TimelineEntry::new(timestamp));
            }
        }
        TimelineGrouping::Bucketed { width } => {
            let bucket = (timestamp / width).floor();
            if let Some(entry) = entries
                .iter_mut()
                .find(|entry| (entry.min_timestamp() / width).floor() == bucket)
            {
                entry.timestamps.push(timestamp);
                entry.count += 1;
            } else {
                entries.push(TimelineEntry::new(timestamp));
            }
        }
    }
}

/// Compare only the first and last entries of a sorted timeline
fn trend_of(timeline: &[TimelineEntry]) -> Trend {
    if timeline.len() < 2 {
        return Trend::Stable;
    }
    let first = timeline[0].count;
    let last = timeline[timeline.len() - 1].count;
    if first < last {
        Trend::Increasing
    } else if first > last {
        Trend::Decreasing
    } else {
        Trend::Stable
    }
}

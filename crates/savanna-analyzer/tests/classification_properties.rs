//! Property tests for classification, aggregation and comparison.

use proptest::prelude::*;

use savanna_analyzer::timeline::aggregate;
use savanna_analyzer::{
    AnalysisConfig, Historian, KeywordClassifier, ModernDataComparator, TimelineGrouping,
    ECOSYSTEM_KEYWORDS,
};
use savanna_domain::{ClassifierStrategy, EcosystemResult, EcosystemType, HistoricalText};

fn keyword_pool() -> Vec<String> {
    ECOSYSTEM_KEYWORDS
        .iter()
        .flat_map(|(_, keywords)| keywords.iter().map(|k| k.to_string()))
        .chain(["xylophone", "quartz", "harbour", "ledger"].iter().map(|s| s.to_string()))
        .collect()
}

// Indicators drawn from the keyword table plus a few unrelated words
fn indicator_lists() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(keyword_pool()), 0..12)
}

fn ecosystems() -> impl Strategy<Value = EcosystemType> {
    prop::sample::select(EcosystemType::ALL.to_vec())
}

fn make_result(ecosystem: EcosystemType, timestamp: f64) -> EcosystemResult {
    EcosystemResult {
        text_id: "prop".to_string(),
        ecosystem_type: ecosystem,
        confidence: 1.0,
        extracted_features: vec![],
        timestamp,
        description: String::new(),
        strategy: ClassifierStrategy::KeywordScoring,
    }
}

proptest! {
    #[test]
    fn confidence_is_bounded(indicators in indicator_lists()) {
        let classifier = KeywordClassifier::new();
        let result = classifier.classify(&indicators);
        prop_assert!((0.0..=1.0).contains(&result.confidence));
        prop_assert!((0.0..=1.0).contains(&classifier.score_confidence(&result)));
        if result.ecosystem_type.is_unknown() {
            prop_assert_eq!(result.confidence, 0.0);
        }
    }

    #[test]
    fn classify_is_idempotent(indicators in indicator_lists()) {
        let classifier = KeywordClassifier::new();
        prop_assert_eq!(classifier.classify(&indicators), classifier.classify(&indicators));
    }

    #[test]
    fn classify_returns_indicators_verbatim(indicators in indicator_lists()) {
        let classifier = KeywordClassifier::new();
        prop_assert_eq!(classifier.classify(&indicators).indicators, indicators);
    }

    #[test]
    fn distribution_sums_to_total(
        entries in prop::collection::vec((ecosystems(), 1800u16..1810u16), 0..40)
    ) {
        let results: Vec<EcosystemResult> = entries
            .iter()
            .map(|(ecosystem, year)| make_result(*ecosystem, f64::from(*year)))
            .collect();
        for grouping in [TimelineGrouping::ExactTimestamp, TimelineGrouping::Bucketed { width: 3.0 }] {
            let analysis = aggregate(&results, grouping);
            prop_assert_eq!(analysis.ecosystem_distribution.values().sum::<usize>(), analysis.total_analyses);
            prop_assert_eq!(analysis.total_analyses, results.len());

            let mut seen = std::collections::HashSet::new();
            for trend in &analysis.trends {
                prop_assert!(seen.insert(trend.ecosystem_type));
                prop_assert!(trend.timeline.iter().all(|entry| entry.count >= 1));
                prop_assert!(trend
                    .timeline
                    .windows(2)
                    .all(|w| w[0].min_timestamp() <= w[1].min_timestamp()));
            }
        }
    }

    #[test]
    fn comparator_partitions_on_threshold(matched in 0usize..10, unmatched in 1usize..10) {
        let description: Vec<String> = (0..matched)
            .map(|i| format!("alpha{}", i))
            .chain((0..unmatched).map(|i| format!("omega{}", i)))
            .collect();
        let modern: String = (0..matched).map(|i| format!("alpha{} ", i)).collect();

        let mut historical = make_result(EcosystemType::Savanna, 1850.0);
        historical.description = description.join(" ");

        let comparison = ModernDataComparator::new()
            .compare(&[historical], modern.as_bytes())
            .unwrap();
        let ratio = matched as f64 / (matched + unmatched) as f64;

        if ratio > 0.3 {
            prop_assert_eq!(comparison.matches.len(), 1);
            prop_assert!((comparison.confidence - ratio).abs() < 1e-9);
        } else {
            prop_assert_eq!(comparison.discrepancies.len(), 1);
            prop_assert_eq!(comparison.confidence, 0.0);
        }
    }

    #[test]
    fn results_preserve_input_order(contents in prop::collection::vec("[a-z ]{0,40}", 0..8)) {
        let historian = Historian::new(AnalysisConfig::default()).unwrap();
        let texts: Vec<HistoricalText> = contents
            .iter()
            .enumerate()
            .map(|(i, content)| HistoricalText::new(format!("t{}", i), content.clone(), i as f64))
            .collect();
        for strategy in [ClassifierStrategy::KeywordScoring, ClassifierStrategy::TrainedModel] {
            let results = historian.analyze_with(&texts, strategy).unwrap();
            let ids: Vec<String> = results.iter().map(|r| r.text_id.clone()).collect();
            let expected: Vec<String> = texts.iter().map(|t| t.id.clone()).collect();
            prop_assert_eq!(ids, expected);
            prop_assert!(results.iter().all(|r| (0.0..=1.0).contains(&r.confidence)));
        }
    }
}

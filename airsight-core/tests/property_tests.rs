//! Property tests for tiering and aggregation

use airsight_core::{
    AlertLevel, Classifier, Metric, MetricSet, Reading, Severity, SystemStatus, ThresholdTable,
    TierScheme, COMPOSITE_METRICS, DEVICE_METRICS,
};
use proptest::prelude::*;

fn device_metric() -> impl Strategy<Value = Metric> {
    prop::sample::select(DEVICE_METRICS.to_vec())
}

fn composite_metric() -> impl Strategy<Value = Metric> {
    prop::sample::select(COMPOSITE_METRICS.to_vec())
}

fn device_values() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (0.0..3000.0f64, 0.0..60.0f64, 0.0..2000.0f64, 0.0..4000.0f64)
}

proptest! {
    #[test]
    fn tier_rank_is_monotonic(metric in device_metric(), a in 0.0..5000.0f64, b in 0.0..5000.0f64) {
        let classifier = Classifier::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_rank = classifier.tier(lo, metric).unwrap().rank;
        let hi_rank = classifier.tier(hi, metric).unwrap().rank;
        prop_assert!(lo_rank <= hi_rank);
    }

    #[test]
    fn fine_and_guidance_agree_off_boundaries(metric in device_metric(), value in 0.0..5000.0f64) {
        let table = ThresholdTable::default();
        let boundaries = table.boundaries(metric).unwrap();
        prop_assume!(!boundaries.as_slice().contains(&value));

        let fine = TierScheme::fine().tier(value, metric).unwrap();
        let guidance = TierScheme::guidance().tier(value, metric).unwrap();
        prop_assert_eq!(fine.rank, guidance.rank);
    }

    #[test]
    fn composite_is_monotonic_per_metric(
        (dust, temp, tvoc, eco2) in device_values(),
        metric in composite_metric(),
        bump in 0.0..1000.0f64,
    ) {
        let classifier = Classifier::default();
        let base = Reading::device(0, dust, temp, tvoc, eco2);
        let raised = base.with(metric, base.value(metric).unwrap() + bump);

        let before = classifier.composite_index(&base).unwrap();
        let after = classifier.composite_index(&raised).unwrap();
        prop_assert!(before.score <= after.score);
        prop_assert!(before.tier.rank <= after.tier.rank);
    }

    #[test]
    fn composite_stays_in_range((dust, temp, tvoc, eco2) in device_values()) {
        let index = Classifier::default()
            .composite_index(&Reading::device(0, dust, temp, tvoc, eco2))
            .unwrap();
        prop_assert!((0.0..=100.0).contains(&index.score));
    }

    #[test]
    fn classifiers_are_idempotent((dust, temp, tvoc, eco2) in device_values()) {
        let classifier = Classifier::default();
        let reading = Reading::device(0, dust, temp, tvoc, eco2);

        prop_assert_eq!(classifier.composite_index(&reading), classifier.composite_index(&reading));
        prop_assert_eq!(classifier.diagnose(&reading), classifier.diagnose(&reading));
        prop_assert_eq!(
            classifier.overall_status(&reading.values),
            classifier.overall_status(&reading.values)
        );
    }

    #[test]
    fn verdict_is_worst_guidance_level((dust, temp, tvoc, eco2) in device_values()) {
        let classifier = Classifier::default();
        let averages = Reading::device(0, dust, temp, tvoc, eco2).values;
        let verdict = classifier.overall_status(&averages).unwrap();

        let worst = DEVICE_METRICS
            .iter()
            .map(|m| classifier.recommend(averages.get(*m).unwrap(), *m).unwrap().level.tier)
            .max()
            .unwrap();
        let expected = match worst {
            AlertLevel::Normal => SystemStatus::Optimal,
            AlertLevel::Moderate => SystemStatus::Moderate,
            AlertLevel::Warning => SystemStatus::Warning,
            AlertLevel::Critical => SystemStatus::Critical,
        };
        prop_assert_eq!(verdict.status, expected);
    }

    #[test]
    fn dropped_metric_blocks_optimal_without_raising(
        (dust, temp, tvoc, eco2) in device_values(),
        dropped in device_metric(),
    ) {
        let classifier = Classifier::default();
        let full = Reading::device(0, dust, temp, tvoc, eco2).values;
        let mut partial = full;
        partial.set(dropped, None);

        let full_status = classifier.overall_status(&full).unwrap().status;
        let partial_status = classifier.overall_status(&partial).unwrap().status;
        prop_assert!(partial_status != SystemStatus::Optimal);
        if partial_status != SystemStatus::Unknown {
            prop_assert!(partial_status <= full_status);
        }
    }

    #[test]
    fn summary_bounds_hold(values in prop::collection::vec(0.0..2000.0f64, 1..50)) {
        let readings: Vec<Reading> = values
            .iter()
            .enumerate()
            .map(|(i, v)| Reading::new(i as u64).with(Metric::Tvoc, *v))
            .collect();
        let summary = Classifier::default().summarize(&readings, Metric::Tvoc).unwrap();

        prop_assert!(summary.min <= summary.average + 1e-9);
        prop_assert!(summary.average <= summary.max + 1e-9);
        prop_assert_eq!(summary.samples, values.len());
    }
}

#[test]
fn empty_metric_set_is_unknown_not_optimal() {
    let verdict = Classifier::default().overall_status(&MetricSet::default()).unwrap();
    assert_eq!(verdict.status, SystemStatus::Unknown);
    assert_eq!(verdict.missing, DEVICE_METRICS.to_vec());
    assert_eq!(
        Classifier::default().tier(0.0, Metric::Dust).unwrap().tier,
        Severity::Safe
    );
}

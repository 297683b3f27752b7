//! Property tests for the labelled tally
//!
//! Ensures metrics and transforms satisfy mathematical invariants:
//! - Metrics bounded to [0, 1], never NaN on non-empty input
//! - Diagonal cells bounded by their row and column sums
//! - Transform identities (double transpose, single cumulative, symmetry)
//! - Text rendering parses back to the same counts

use confusion_tally::{Average, ConfidenceLevel, Tally};
use proptest::collection::vec;
use proptest::prelude::*;

// =============================================================================
// Strategy Helpers
// =============================================================================

const LABELS: [&str; 5] = ["neg", "neu", "pos", "1.a", "x"];

/// A label drawn from a small fixed vocabulary so cells collide
fn label() -> impl Strategy<Value = &'static str> {
    prop::sample::select(LABELS.to_vec())
}

/// List of (gold, predicted, count) records
fn records(
    len: std::ops::Range<usize>,
) -> impl Strategy<Value = Vec<(&'static str, &'static str, u32)>> {
    vec((label(), label(), 0u32..50), len)
}

fn build(records: &[(&str, &str, u32)]) -> Tally {
    let mut cm = Tally::new();
    for &(gold, predicted, count) in records {
        cm.record_count(gold, predicted, count);
    }
    cm
}

/// Tally with at least one counted instance
fn non_empty_tally() -> impl Strategy<Value = Tally> {
    (records(0..30), label(), label(), 1u32..50).prop_map(|(mut recs, g, p, n)| {
        recs.push((g, p, n));
        build(&recs)
    })
}

fn bounded(v: f64) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}

// =============================================================================
// Metric Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2_000))]

    #[test]
    fn prop_total_equals_recorded_counts(recs in records(0..40)) {
        let cm = build(&recs);
        let expected: i64 = recs.iter().map(|&(_, _, n)| i64::from(n)).sum();
        let diagonal: i64 =
            recs.iter().filter(|(g, p, _)| g == p).map(|&(_, _, n)| i64::from(n)).sum();

        prop_assert_eq!(cm.total(), expected);
        prop_assert_eq!(cm.correct(), diagonal);
        prop_assert_eq!(cm.predicted_series().count() as i64, expected);
    }

    #[test]
    fn prop_diagonal_bounded_by_sums(cm in non_empty_tally()) {
        for l in cm.gold_labels() {
            let tp = cm.cell(l, l);
            prop_assert!(tp <= cm.row_sum(l), "cell({l},{l}) = {tp} > row sum");
            prop_assert!(tp <= cm.col_sum(l), "cell({l},{l}) = {tp} > col sum");
        }
    }

    #[test]
    fn prop_row_sums_add_up_to_total(cm in non_empty_tally()) {
        let rows: i64 = cm.gold_labels().iter().map(|l| cm.row_sum(l)).sum();
        let cols: i64 = cm.predicted_labels().iter().map(|l| cm.col_sum(l)).sum();

        prop_assert_eq!(rows, cm.total());
        prop_assert_eq!(cols, cm.total());
    }

    #[test]
    fn prop_metrics_bounded(cm in non_empty_tally()) {
        prop_assert!(bounded(cm.accuracy()), "accuracy {}", cm.accuracy());
        for m in cm.label_metrics() {
            prop_assert!(bounded(m.precision), "precision({}) {}", m.label, m.precision);
            prop_assert!(bounded(m.recall), "recall({}) {}", m.label, m.recall);
            prop_assert!(bounded(m.f_measure), "f({}) {}", m.label, m.f_measure);
        }
        for avg in [Average::Macro, Average::Micro] {
            prop_assert!(bounded(cm.f_measure_avg(avg)), "F({:?}) {}", avg, cm.f_measure_avg(avg));
        }
    }

    #[test]
    fn prop_f_measure_between_min_and_max(cm in non_empty_tally(), beta in 0.1f64..5.0) {
        for l in cm.gold_labels() {
            let p = cm.precision(l);
            let r = cm.recall(l);
            let f = cm.f_measure_beta(l, beta);
            prop_assert!(f <= p.max(r) + 1e-12);
            prop_assert!(f >= p.min(r) - 1e-12 || p + r == 0.0);
        }
    }

    #[test]
    fn prop_kappa_at_most_one(cm in non_empty_tally()) {
        let k = cm.cohens_kappa();
        prop_assert!(k.is_finite(), "kappa {k}");
        prop_assert!(k <= 1.0 + 1e-12, "kappa {k}");
    }

    #[test]
    fn prop_interval_contains_estimate(cm in non_empty_tally()) {
        for level in [ConfidenceLevel::Ninety, ConfidenceLevel::NinetyFive] {
            let ci = cm.accuracy_interval(level);
            prop_assert!(ci.half_width >= 0.0);
            prop_assert!(ci.contains(ci.estimate));
        }
    }

    // -------------------------------------------------------------------------
    // Transform Properties
    // -------------------------------------------------------------------------

    #[test]
    fn prop_double_transpose_is_identity(recs in records(0..30)) {
        let cm = build(&recs);
        prop_assert_eq!(cm.transpose().transpose(), cm);
    }

    #[test]
    fn prop_cumulative_of_one_is_identity(recs in records(0..30)) {
        let cm = build(&recs);
        prop_assert_eq!(Tally::cumulative([&cm]), cm);
    }

    #[test]
    fn prop_cumulative_adds_cells(a in records(0..20), b in records(0..20)) {
        let (ta, tb) = (build(&a), build(&b));
        let sum = Tally::cumulative([&ta, &tb]);

        prop_assert_eq!(sum.total(), ta.total() + tb.total());
        for g in LABELS {
            for p in LABELS {
                prop_assert_eq!(sum.cell(g, p), ta.cell(g, p) + tb.cell(g, p));
            }
        }
    }

    #[test]
    fn prop_symmetric_is_symmetric(recs in records(0..30)) {
        let s = build(&recs).symmetric();
        for g in LABELS {
            for p in LABELS {
                prop_assert_eq!(s.cell(g, p), s.cell(p, g), "cell({}, {})", g, p);
            }
        }
    }

    #[test]
    fn prop_symmetric_keeps_diagonal(recs in records(0..30)) {
        let cm = build(&recs);
        let s = cm.symmetric();
        for l in LABELS {
            prop_assert_eq!(s.cell(l, l), cm.cell(l, l));
        }
    }

    // -------------------------------------------------------------------------
    // Text Properties
    // -------------------------------------------------------------------------

    #[test]
    fn prop_parse_render_roundtrip(recs in records(0..30)) {
        let cm = build(&recs);
        let back = Tally::parse(&cm.render()).unwrap();

        prop_assert_eq!(&back, &cm);
        prop_assert_eq!(back.total(), cm.total());
    }

    #[test]
    fn prop_renderers_no_panic(cm in non_empty_tally(), places in 1usize..=10) {
        let mut cm = cm;
        cm.set_decimal_places(places).unwrap();

        let _ = cm.render_probabilistic();
        let _ = cm.render_latex();
        let _ = cm.summary();
        let _ = cm.label_report();
        let _ = cm.class_distribution();
        let _ = cm.classification_report();
    }

    #[test]
    fn prop_parse_garbage_never_panics(text in "\\PC{0,80}") {
        let _ = Tally::parse(&text);
    }
}

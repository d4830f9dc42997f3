use super::*;
use crate::index::engine::IndexEngine;
use crate::support::{assert_close, table, transport_only_records};

#[test]
fn describe_matches_sample_statistics() {
    let d = describe(&[4.0, 1.0, 3.0, 2.0]);
    assert_eq!(d.count, 4);
    assert_close(d.mean, 2.5);
    assert_close(d.std, (5.0f64 / 3.0).sqrt());
    assert_close(d.min, 1.0);
    assert_close(d.p25, 1.75);
    assert_close(d.p50, 2.5);
    assert_close(d.p75, 3.25);
    assert_close(d.max, 4.0);
}

#[test]
fn describe_small_inputs() {
    let single = describe(&[7.0]);
    assert_eq!(single.count, 1);
    assert!(single.std.is_nan());
    assert_eq!(single.p75, 7.0);

    let empty = describe(&[]);
    assert_eq!(empty.count, 0);
    assert!(empty.mean.is_nan());
    assert!(empty.max.is_nan());
}

#[test]
fn percentile_interpolates() {
    assert_close(percentile(&[0.0, 10.0], 0.25), 2.5);
    assert_close(percentile(&[0.0, 10.0, 20.0], 0.5), 10.0);
    assert!(percentile(&[], 0.5).is_nan());
}

#[test]
fn summary_rows_carry_weights() {
    let engine = IndexEngine::default();
    let scored = engine.calculate(&table(&transport_only_records())).expect("scored");
    let summary = engine.summary_statistics(&scored);
    let columns: Vec<&str> = summary.rows.iter().map(|r| r.column.as_str()).collect();
    assert_eq!(
        columns,
        [
            "REAI",
            "transportation_score",
            "labor_market_score",
            "licensing_score",
            "policy_score"
        ]
    );
    let weights: Vec<f64> = summary.rows.iter().map(|r| r.weight).collect();
    assert_eq!(weights, vec![1.0, 0.30, 0.35, 0.20, 0.15]);

    let transport = summary.row("transportation_score").expect("row");
    assert_close(transport.stats.mean, 50.0);
    assert_close(transport.stats.std, 50.0);
    let licensing = summary.row("licensing_score").expect("row");
    assert_close(licensing.stats.std, 0.0);
    assert_close(summary.row("REAI").expect("row").stats.p50, 50.0);
}

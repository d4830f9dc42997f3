use super::*;
use crate::index::engine::IndexEngine;
use crate::support::{assert_close, mixed_records, table, transport_only_records};

#[test]
fn pearson_known_values() {
    assert_close(pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]), 1.0);
    assert_close(pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]), -1.0);
    assert!(pearson(&[1.0, 2.0], &[5.0, 5.0]).is_nan());
    assert!(pearson(&[1.0], &[1.0]).is_nan());
}

#[test]
fn findings_for_mixed_table() {
    let scored = IndexEngine::default()
        .calculate(&table(&mixed_records()))
        .expect("scored");
    let f = key_findings(&scored);
    assert_eq!(f.highest.as_ref().map(|r| r.region_name.as_str()), Some("Wake"));
    assert_eq!(f.lowest.as_ref().map(|r| r.region_name.as_str()), Some("Robeson"));
    assert_eq!(f.lowest.as_ref().map(|r| r.rank), Some(4));
    assert_close(f.min_reai, scored.reai[2]);
    assert_eq!(f.component_means.len(), 4);
    assert_eq!(f.component_means[0].component, "transportation");
    // higher unemployment and poverty both pull the composite down
    assert!(f.correlations.iter().all(|c| c.pearson_r < 0.0));
}

#[test]
fn first_region_wins_ties() {
    let mut records = transport_only_records();
    records[2] = records[0].clone();
    records[2].region_id = "r3".to_string();
    let scored = IndexEngine::default()
        .calculate(&table(&records))
        .expect("scored");
    let f = key_findings(&scored);
    assert_eq!(f.highest.map(|r| r.region_id), Some("r1".to_string()));
    assert_eq!(f.lowest.map(|r| r.region_id), Some("r2".to_string()));
}

#[test]
fn constant_indicator_correlation_undefined() {
    let scored = IndexEngine::default()
        .calculate(&table(&transport_only_records()))
        .expect("scored");
    let f = key_findings(&scored);
    assert!(f.correlations.iter().all(|c| c.pearson_r.is_nan()));
    assert_close(f.component_means[1].mean, 50.0);
}

use super::*;
use crate::index::engine::IndexEngine;
use crate::index::sensitivity::Scenario;
use crate::model::weights::ComponentWeights;
use crate::support::{mixed_records, table};
use std::fs;
use tempfile::tempdir;

fn scored() -> ScoredTable {
    IndexEngine::default()
        .calculate(&table(&mixed_records()))
        .expect("scored")
}

#[test]
fn scored_tsv_layout() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.tsv");
    write_scored_tsv(&path, &scored()).expect("write");
    let text = fs::read_to_string(&path).expect("read");
    let mut lines = text.lines();
    let header: Vec<&str> = lines.next().expect("header").split('\t').collect();
    assert_eq!(header[0], "region_id");
    assert_eq!(header[2], "state_fips");
    assert_eq!(header[3], "pct_no_vehicle");
    assert_eq!(
        &header[header.len() - 6..],
        [
            "transportation_score",
            "labor_market_score",
            "licensing_score",
            "policy_score",
            "REAI",
            "REAI_rank"
        ]
    );
    let robeson: Vec<&str> = lines.nth(2).expect("row").split('\t').collect();
    assert_eq!(robeson[1], "Robeson");
    assert_eq!(robeson[robeson.len() - 1], "4");
    assert_eq!(robeson[robeson.len() - 2], "13.750000");
}

#[test]
fn sensitivity_tsv_layout() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("sensitivity.tsv");
    let table = IndexEngine::default()
        .sensitivity_analysis(
            &scored(),
            &[Scenario {
                name: "policy_only".to_string(),
                weights: ComponentWeights::new(0.0, 0.0, 0.0, 1.0),
            }],
        )
        .expect("table");
    write_sensitivity_tsv(&path, &table).expect("write");
    let text = fs::read_to_string(&path).expect("read");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "region_id\tregion_name\tbase_REAI\tbase_rank\tpolicy_only_REAI\tpolicy_only_rank"
    );
    assert_eq!(lines.len(), 5);
    assert!(lines[1].ends_with("\t75.000000\t1"));
}

#[test]
fn summary_tsv_layout() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("summary.tsv");
    let engine = IndexEngine::default();
    write_summary_tsv(&path, &engine.summary_statistics(&scored())).expect("write");
    let text = fs::read_to_string(&path).expect("read");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "column\tweight\tcount\tmean\tstd\tmin\t25%\t50%\t75%\tmax"
    );
    assert!(lines[1].starts_with("REAI\t1.000000\t4\t"));
    assert!(lines[2].starts_with("transportation_score\t0.300000\t4\t"));
    assert_eq!(lines.len(), 6);
}

use super::*;
use crate::support::{assert_close, mixed_records, table, transport_only_records};

#[test]
fn transportation_favours_first_region() {
    let scores = transportation_score(&table(&transport_only_records())).expect("scores");
    assert_eq!(scores, vec![100.0, 50.0, 0.0]);
}

#[test]
fn constant_components_score_fifty() {
    let t = table(&transport_only_records());
    for score in labor_market_score(&t).expect("labor") {
        assert_close(score, 50.0);
    }
    assert_eq!(licensing_score(&t).expect("licensing"), vec![50.0; 3]);
    assert_eq!(policy_score(&t).expect("policy"), vec![50.0; 3]);
}

#[test]
fn labor_market_uses_sub_weights() {
    let scores = labor_market_score(&table(&mixed_records())).expect("scores");
    assert_close(scores[0], 100.0);
    assert_close(scores[2], 0.0);
    // unemployment 4.0, growth 2.5, poverty 14.0 within the mixed spread
    let unemployment = 100.0 - 0.8 / 3.9 * 100.0;
    let growth = 4.0 / 5.6 * 100.0;
    let poverty = 100.0 - 5.0 / 15.0 * 100.0;
    assert_close(scores[1], 0.40 * unemployment + 0.30 * growth + 0.30 * poverty);
}

#[test]
fn transportation_mixed_spread() {
    let scores = transportation_score(&table(&mixed_records())).expect("scores");
    assert_close(scores[0], (100.0 + (100.0 - 300.0 / 9.0) + 100.0) / 3.0);
    assert_close(scores[2], 0.0);
}

#[test]
fn policy_averages_two_inputs() {
    let scores = policy_score(&table(&mixed_records())).expect("scores");
    assert_close(scores[0], 75.0);
    assert_close(scores[2], 25.0);
    assert_close(scores[3], 50.0);
}

#[test]
fn licensing_reversed() {
    let mut records = mixed_records();
    records[0].licensing_burden_index = 40.0;
    records[1].licensing_burden_index = 80.0;
    let scores = licensing_score(&table(&records)).expect("scores");
    assert_eq!(scores[0], 100.0);
    assert_eq!(scores[1], 0.0);
    assert_eq!(scores[2], 37.5);
}

#[test]
fn missing_column_names_component() {
    let mut t = table(&mixed_records());
    t.remove_indicator(Indicator::AvgCommuteTime);
    let err = transportation_score(&t).unwrap_err();
    assert_eq!(
        err,
        IndexError::MissingColumn {
            component: Component::Transportation,
            column: Indicator::AvgCommuteTime,
        }
    );
    assert!(err.to_string().contains("avg_commute_time"));
    assert!(policy_score(&t).is_ok());
    assert!(ComponentScores::compute(&t).is_err());
}

#[test]
fn out_of_range_inputs_tolerated() {
    let mut records = mixed_records();
    records[0].pct_broadband = 140.0;
    records[1].unemployment_rate = -3.0;
    let scores = ComponentScores::compute(&table(&records)).expect("scores");
    for c in Component::ordered() {
        for v in scores.get(*c) {
            assert!((0.0..=100.0).contains(v), "{c}: {v}");
        }
    }
}

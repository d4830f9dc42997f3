use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn load_flags_missing_and_constant_columns() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("regions.csv");
    fs::write(
        &path,
        "region_id,region_name,licensing_burden_index,poverty_rate\nA,Alpha,65,10\nB,Beta,65,12\n",
    )
    .expect("write");

    let ctx = run_stage1(&path, &IdColumns::default()).expect("load");
    assert_eq!(ctx.table.len(), 2);
    assert_eq!(ctx.degenerate_indicators, vec![Indicator::LicensingBurdenIndex]);
    assert_eq!(ctx.missing_indicators.len(), 7);
    assert!(!ctx.missing_indicators.contains(&Indicator::PovertyRate));
    assert_eq!(ctx.input_path, path);
}

#[test]
fn bundled_sample_loads_completely() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/sample/nc_counties.csv");
    let ctx = run_stage1(&path, &IdColumns::default()).expect("load");
    assert_eq!(ctx.table.len(), 20);
    assert!(ctx.missing_indicators.is_empty());
    assert_eq!(
        ctx.degenerate_indicators,
        vec![Indicator::LicensingBurdenIndex, Indicator::BanTheBoxScore]
    );
    assert_eq!(ctx.table.region_names[0], "Wake");
}

#[test]
fn header_only_table_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("regions.csv");
    fs::write(&path, "region_id,region_name\n").expect("write");
    let err = run_stage1(&path, &IdColumns::default()).unwrap_err();
    assert!(matches!(err, Stage1Error::NoRegions));
}

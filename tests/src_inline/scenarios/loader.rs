use super::*;
use tempfile::tempdir;

#[test]
fn load_bundled_scenarios() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/scenarios");
    let set = load_scenarios_from_dir(&dir).expect("load scenarios");
    assert_eq!(set, ScenarioSet::default());
    let names: Vec<&str> = set.names().collect();
    assert_eq!(names, ["labor_focused", "transport_focused", "policy_focused"]);
    assert!(set.scenarios.iter().all(|s| s.weights.validate().is_ok()));
}

#[test]
fn files_merge_in_name_order() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("b.toml"),
        "[[scenario]]\nname = \"second\"\nweights = { transportation = 0.25, labor_market = 0.25, licensing = 0.25, policy = 0.25 }\n",
    )
    .expect("write");
    fs::write(
        dir.path().join("a.toml"),
        "[weights]\ntransportation = 0.4\nlabor_market = 0.3\nlicensing = 0.2\npolicy = 0.1\n\n[[scenario]]\nname = \"first\"\ndescription = \"d\"\nweights = { transportation = 0.1, labor_market = 0.2, licensing = 0.3, policy = 0.4 }\n",
    )
    .expect("write");
    fs::write(dir.path().join("notes.txt"), "ignored").expect("write");

    let set = load_scenarios_from_dir(dir.path()).expect("load");
    let names: Vec<&str> = set.names().collect();
    assert_eq!(names, ["first", "second"]);
    assert_eq!(set.base, ComponentWeights::new(0.4, 0.3, 0.2, 0.1));
    assert_eq!(set.scenarios[1].description, "");
}

#[test]
fn invalid_sums_load_but_are_flagged_later() {
    let dir = tempdir().expect("tempdir");
    fs::write(
        dir.path().join("bad.toml"),
        "[[scenario]]\nname = \"short\"\nweights = { transportation = 0.2, labor_market = 0.5, licensing = 0.15, policy = 0.1 }\n",
    )
    .expect("write");
    let set = load_scenarios_from_dir(dir.path()).expect("load");
    assert!(set.scenarios[0].weights.validate().is_err());
    assert_eq!(set.base, ComponentWeights::default());
}

#[test]
fn duplicate_names_rejected() {
    let dir = tempdir().expect("tempdir");
    let body = "[[scenario]]\nname = \"x\"\nweights = { transportation = 0.25, labor_market = 0.25, licensing = 0.25, policy = 0.25 }\n";
    fs::write(dir.path().join("a.toml"), body).expect("write");
    fs::write(dir.path().join("b.toml"), body).expect("write");
    let err = load_scenarios_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ScenarioLoadError::Duplicate(ref n) if n == "x"));
}

#[test]
fn two_base_tables_rejected() {
    let dir = tempdir().expect("tempdir");
    let body = "[weights]\ntransportation = 0.25\nlabor_market = 0.25\nlicensing = 0.25\npolicy = 0.25\n";
    fs::write(dir.path().join("a.toml"), body).expect("write");
    fs::write(dir.path().join("b.toml"), body).expect("write");
    let err = load_scenarios_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ScenarioLoadError::ConflictingBase(_)));
}

#[test]
fn empty_dir_rejected() {
    let dir = tempdir().expect("tempdir");
    let err = load_scenarios_from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ScenarioLoadError::Empty(_)));
}

#[test]
fn weights_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("weights.toml");
    fs::write(
        &path,
        "[weights]\ntransportation = 0.2\nlabor_market = 0.5\nlicensing = 0.15\npolicy = 0.15\n",
    )
    .expect("write");
    assert_eq!(
        load_weights_file(&path).expect("weights"),
        ComponentWeights::new(0.2, 0.5, 0.15, 0.15)
    );

    fs::write(&path, "[[scenario]]\nname = \"x\"\nweights = { transportation = 1.0, labor_market = 0.0, licensing = 0.0, policy = 0.0 }\n").expect("write");
    assert!(matches!(
        load_weights_file(&path),
        Err(ScenarioLoadError::MissingWeights(_))
    ));
}

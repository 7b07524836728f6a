//! Runtime bundle selection through `BundleRegistry`

use quickprop::{
    Bundle, BundleRegistry, CheckConfig, Verdict, check_registered, check_registered_with_config,
};

#[test]
fn test_default_registry_runs_properties() {
    let registry = BundleRegistry::with_defaults();

    let report = check_registered("b.then_some(()).is_some() == b", &registry, |b: &bool| {
        b.then_some(()).is_some() == *b
    });
    assert!(report.passed());

    let report = check_registered("chars(s) <= bytes(s)", &registry, |s: &String| {
        s.chars().count() <= s.len()
    });
    assert!(report.passed());
}

#[test]
fn test_registered_override_changes_outcome() {
    let mut registry = BundleRegistry::with_defaults();

    let report = check_registered("x < 100", &registry, |x: &i32| *x < 100);
    assert_eq!(report.verdict, Verdict::Failed);

    registry.register(Bundle::in_range(0_i32..100).unwrap());
    let report = check_registered("x < 100", &registry, |x: &i32| *x < 100);
    assert_eq!(report.verdict, Verdict::Passed);
}

#[test]
fn test_registered_container_bundle() {
    let mut registry = BundleRegistry::new();
    registry.register(Bundle::vec_of_max_len(Bundle::<char>::uppercase_ascii(), 8).unwrap());

    let report = check_registered("short uppercase words", &registry, |v: &Vec<char>| {
        v.len() < 8 && v.iter().all(|c| c.is_ascii_uppercase())
    });
    assert!(report.passed(), "{}", report);
}

#[test]
fn test_missing_bundle_is_reported() {
    let mut registry = BundleRegistry::with_defaults();
    assert!(registry.remove::<String>());

    let report = check_registered("strings", &registry, |_: &String| true);
    assert_eq!(report.verdict, Verdict::Errored);
    assert!(report.to_string().contains("No bundle registered"));
}

#[test]
fn test_registered_run_is_replayable_with_config() {
    let mut registry = BundleRegistry::with_defaults();
    registry.register_default::<f64>();

    let config = CheckConfig::default().with_trials(150).with_seed(2718);
    let property = |x: &f64| x.abs() < 10.0;
    let first = check_registered_with_config("|x| < 10", &registry, property, config.clone());
    let second = check_registered_with_config("|x| < 10", &registry, property, config);

    assert_eq!(first.verdict, Verdict::Failed);
    assert_eq!(first.seed, 2718);
    assert_eq!(first.minimized, second.minimized);
    assert_eq!(first.original, second.original);
}

#[allow(deprecated)]
use assert_cmd::{Command, cargo::cargo_bin};
use predicates::prelude::*;
use std::process;

fn quickprop() -> Command {
    Command::from_std(process::Command::new(cargo_bin!("quickprop")))
}

#[test]
fn test_list_shows_catalog() {
    let mut cmd = quickprop();
    cmd.arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("7 demonstration properties"))
        .stdout(predicate::str::contains("mul-identity"))
        .stdout(predicate::str::contains("broken-qsort"))
        .stdout(predicate::str::contains("reverse-strings"))
        .stdout(predicate::str::contains("fails on purpose"));
}

#[test]
fn test_run_passing_property() {
    let mut cmd = quickprop();
    cmd.arg("run").arg("mul-identity").arg("--seed").arg("42");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PASS"))
        .stdout(predicate::str::contains("\"x * 1 == 1 * x\" passed 20 tests."))
        .stdout(predicate::str::contains("1 passed, 0 failed, 0 errored (seed 42)"));
}

#[test]
fn test_run_reports_trial_count() {
    let mut cmd = quickprop();
    cmd.arg("run")
        .arg("add-commutative")
        .arg("--trials")
        .arg("55");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("passed 55 tests."));
}

#[test]
fn test_failure_continues_without_strict() {
    let mut cmd = quickprop();
    cmd.arg("run")
        .arg("less-than-100")
        .arg("mul-identity")
        .arg("--trials")
        .arg("200")
        .arg("--seed")
        .arg("7");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("FAIL"))
        .stdout(predicate::str::contains("\"x < 100\" doesn't hold:"))
        .stdout(predicate::str::contains("original:"))
        .stdout(predicate::str::contains("1 passed, 1 failed, 0 errored (seed 7)"));
}

#[test]
fn test_strict_fails_on_counterexample() {
    let mut cmd = quickprop();
    cmd.arg("run")
        .arg("broken-qsort")
        .arg("--seed")
        .arg("3")
        .arg("--strict");

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("doesn't hold"))
        .stderr(predicate::str::contains("1 of 1 properties did not pass (seed 3)"));
}

#[test]
fn test_strict_passes_when_everything_holds() {
    let mut cmd = quickprop();
    cmd.arg("run")
        .arg("qsort")
        .arg("concat-length")
        .arg("--strict");

    cmd.assert().success();
}

#[test]
fn test_zero_trials_rejected() {
    let mut cmd = quickprop();
    cmd.arg("run").arg("--trials").arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid run settings"))
        .stderr(predicate::str::contains("Invalid trial count: 0"));
}

#[test]
fn test_zero_max_len_rejected() {
    let mut cmd = quickprop();
    cmd.arg("run").arg("--max-len").arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid max sequence length: 0"));
}

#[test]
fn test_unknown_property() {
    let mut cmd = quickprop();
    cmd.arg("run").arg("bogosort");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown property 'bogosort'"));
}

#[test]
fn test_json_output() {
    let mut cmd = quickprop();
    cmd.arg("run")
        .arg("less-than-100")
        .arg("reverse-strings")
        .arg("--trials")
        .arg("200")
        .arg("--seed")
        .arg("11")
        .arg("--format")
        .arg("json");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["seed"], 11);

    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["name"], "less-than-100");
    assert_eq!(results[0]["report"]["verdict"], "failed");
    assert_eq!(results[1]["name"], "reverse-strings");
    assert_eq!(results[1]["report"]["verdict"], "passed");
    assert_eq!(results[1]["report"]["trials"], 200);

    let minimized: i64 = results[0]["report"]["minimized"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!((100..200).contains(&minimized));
}

#[test]
fn test_same_seed_same_report() {
    let run = || {
        let mut cmd = quickprop();
        cmd.arg("run")
            .arg("broken-qsort")
            .arg("--seed")
            .arg("99")
            .arg("--format")
            .arg("json");
        cmd.output().unwrap().stdout
    };

    assert_eq!(run(), run());
}

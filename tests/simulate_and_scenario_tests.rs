use assert_fs::prelude::*;
use predicates::prelude::*;

use timeline_forecasts::services::result_yaml::load_simulation_result;

#[test]
fn simulate_without_backend_uses_mock_data() {
    let temp = assert_fs::TempDir::new().unwrap();
    let output = temp.child("baseline.yaml");
    let output_arg = output.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("timeline-forecasts");
    cmd.env_remove("FORECAST_API_URL")
        .args(["simulate", "-o", &output_arg, "--seed", "11"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Source: mock"))
        .stdout(predicate::str::contains("Monte Carlo simulations"))
        .stdout(predicate::str::contains(format!(
            "Simulation result for FinTrack Mobile App written to {output_arg}"
        )));

    let result = load_simulation_result(output.path()).unwrap();
    assert_eq!(result.num_simulations, 1000);
    assert!(result.p90_weeks > result.p50_weeks);
}

#[test]
fn simulate_reads_request_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let request = temp.child("request.yaml");
    request
        .write_str(
            "project_name: Ledger Sync\nscope_size: large\ncomplexity: 4\ntech_stack: Rust\ndeadline_weeks: 20\nteam_senior: 3\n",
        )
        .unwrap();
    let output = temp.child("result.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("timeline-forecasts");
    cmd.env_remove("FORECAST_API_URL").args([
        "simulate",
        "-r",
        request.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Simulation result for Ledger Sync"));
}

#[test]
fn scenario_projects_from_baseline_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    let baseline = temp.child("baseline.yaml");
    let scenario = temp.child("scenario.yaml");

    let mut simulate = assert_cmd::cargo_bin_cmd!("timeline-forecasts");
    simulate
        .env_remove("FORECAST_API_URL")
        .args(["simulate", "-o", baseline.path().to_str().unwrap(), "--seed", "5"]);
    simulate.assert().success();

    let mut cmd = assert_cmd::cargo_bin_cmd!("timeline-forecasts");
    cmd.args([
        "scenario",
        "-b",
        baseline.path().to_str().unwrap(),
        "-o",
        scenario.path().to_str().unwrap(),
        "--senior",
        "1",
        "--seed",
        "5",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Scenario Comparison"))
        .stdout(predicate::str::contains("Scenario result written to"));

    let before = load_simulation_result(baseline.path()).unwrap();
    let after = load_simulation_result(scenario.path()).unwrap();
    assert!(after.p50_weeks < before.p50_weeks);
    assert!(after.p90_weeks >= after.p50_weeks + 2.0);
    assert_eq!(after.risks, before.risks);
}

#[test]
fn scenario_with_zero_deltas_keeps_baseline() {
    let temp = assert_fs::TempDir::new().unwrap();
    let baseline = temp.child("baseline.yaml");
    let scenario = temp.child("scenario.yaml");

    let mut simulate = assert_cmd::cargo_bin_cmd!("timeline-forecasts");
    simulate
        .env_remove("FORECAST_API_URL")
        .args(["simulate", "-o", baseline.path().to_str().unwrap()]);
    simulate.assert().success();

    let mut cmd = assert_cmd::cargo_bin_cmd!("timeline-forecasts");
    cmd.args([
        "scenario",
        "-b",
        baseline.path().to_str().unwrap(),
        "-o",
        scenario.path().to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("scenario equals baseline"));

    assert_eq!(
        load_simulation_result(baseline.path()).unwrap(),
        load_simulation_result(scenario.path()).unwrap()
    );
}

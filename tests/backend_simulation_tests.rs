use std::time::Duration;

use assert_fs::prelude::*;
use predicates::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::task;
use warp::Filter;
use warp::http::StatusCode;

use timeline_forecasts::domain::simulation_request::SimulationRequest;
use timeline_forecasts::domain::simulation_result::{RiskLevel, StressLabel};
use timeline_forecasts::services::backend_api::{BackendClient, ResultOrigin, simulate_or_mock};
use timeline_forecasts::services::result_yaml::load_simulation_result;

fn backend_response() -> serde_json::Value {
    serde_json::json!({
        "on_time_probability": 0.61,
        "expected_overrun_days": 4.5,
        "p50_weeks": 9.0,
        "p90_weeks": 12.5,
        "histogram": [
            { "bucket_center_weeks": 8.0, "count": 250 },
            { "bucket_center_weeks": 9.0, "count": 500 },
            { "bucket_center_weeks": 10.0, "count": 250 }
        ],
        "risk_scores": {
            "integration": 64,
            "team_imbalance": 20,
            "scope_creep": 35,
            "learning_curve": 10
        },
        "team_stress_index": 38,
        "p50_cost": 36000.0,
        "p90_cost": 50000.0,
        "currency": "USD",
        "role_allocation": { "fe": 0.35, "be": 0.5, "devops": 0.15 }
    })
}

#[tokio::test]
async fn simulate_posts_request_in_backend_naming() {
    let route = warp::path("simulate")
        .and(warp::post())
        .and(warp::body::json())
        .map(|body: serde_json::Value| {
            assert_eq!(body["stack"], "React Native");
            assert_eq!(body["integrations"], 3);
            assert_eq!(body["num_simulations"], 1000);
            warp::reply::json(&backend_response())
        });
    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let client = BackendClient::new(&format!("http://{addr}/"), Duration::from_secs(5)).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let (result, origin) = simulate_or_mock(Some(&client), &SimulationRequest::demo(), &mut rng)
        .await
        .unwrap();

    assert_eq!(origin, ResultOrigin::Backend);
    assert_eq!(result.on_time_probability, 61.0);
    assert_eq!(result.num_simulations, 1000);
    assert_eq!(result.risks.integration_risk.level, RiskLevel::High);
    assert_eq!(result.risks.integration_risk.uplift, "High integration risk (+2w impact)");
    assert_eq!(result.risks.scope_creep_risk.level, RiskLevel::Medium);
    assert_eq!(result.team_stress.label, StressLabel::Ok);
    assert_eq!(result.allocation.recommendation, "Recommended: 35% FE, 50% BE, 15% DevOps");
}

#[tokio::test]
async fn simulate_falls_back_to_mock_on_server_error() {
    let route = warp::path("simulate")
        .and(warp::post())
        .map(|| warp::reply::with_status("backend down", StatusCode::INTERNAL_SERVER_ERROR));
    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let client = BackendClient::new(&format!("http://{addr}"), Duration::from_secs(5)).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let (result, origin) = simulate_or_mock(Some(&client), &SimulationRequest::demo(), &mut rng)
        .await
        .unwrap();

    assert_eq!(origin, ResultOrigin::Mock);
    assert_eq!(result.num_simulations, 1000);
}

#[tokio::test]
async fn simulate_command_reports_backend_origin() {
    let route = warp::path("simulate")
        .and(warp::post())
        .map(|| warp::reply::json(&backend_response()));
    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    let config_file = assert_fs::NamedTempFile::new("forecast.yaml").unwrap();
    config_file
        .write_str(&format!("api_url: http://{addr}\nrequest_timeout_secs: 5\n"))
        .unwrap();
    let output_file = assert_fs::NamedTempFile::new("backend_result.yaml").unwrap();

    let config_arg = config_file.path().to_str().unwrap().to_string();
    let output_arg = output_file.path().to_str().unwrap().to_string();
    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("timeline-forecasts");
        cmd.env_remove("FORECAST_API_URL")
            .args(["simulate", "--config", &config_arg, "-o", &output_arg]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Source: backend"))
            .stdout(predicate::str::contains("On-time probability: 61.0%"));
    })
    .await
    .unwrap();

    let result = load_simulation_result(output_file.path()).unwrap();
    assert_eq!(result.p50_weeks, 9.0);
    assert_eq!(result.distribution.len(), 3);
}

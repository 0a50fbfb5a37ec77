use std::time::Duration;

use rand::Rng;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::duration_sample::DurationSample;
use crate::domain::simulation_request::{ScopeSize, SimulationRequest};
use crate::domain::simulation_result::{
    RiskBreakdown, RiskItem, RiskLevel, RoleAllocation, SimulationResult, TeamStress,
};
use crate::services::input_validation::InvalidInputError;
use crate::services::jitter::round_to;
use crate::services::mock_simulation::generate_mock_simulation_with_rng;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("no backend endpoint configured")]
    NotConfigured,
    #[error("failed to build http client: {0}")]
    Client(String),
    #[error("connection error: {0}")]
    Connection(String),
    #[error("backend responded with status {0}")]
    Status(StatusCode),
    #[error("failed to parse backend response: {0}")]
    Parse(String),
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

/// Trial count sent when a request leaves it at zero.
pub const DEFAULT_NUM_SIMULATIONS: u32 = 1000;

/// Request body in the backend's field naming.
#[derive(Debug, Clone, Serialize)]
pub struct BackendSimulationRequest {
    pub project_name: String,
    pub description: String,
    pub scope_size: ScopeSize,
    pub complexity: u8,
    pub stack: String,
    pub deadline_weeks: u32,
    pub team_junior: u32,
    pub team_mid: u32,
    pub team_senior: u32,
    pub integrations: u32,
    pub scope_volatility: u32,
    pub num_simulations: u32,
}

impl From<&SimulationRequest> for BackendSimulationRequest {
    fn from(request: &SimulationRequest) -> Self {
        Self {
            project_name: request.project_name.clone(),
            description: request.description.clone(),
            scope_size: request.scope_size,
            complexity: request.complexity,
            stack: request.tech_stack.clone(),
            deadline_weeks: request.deadline_weeks,
            team_junior: request.team_junior,
            team_mid: request.team_mid,
            team_senior: request.team_senior,
            integrations: request.integrations_count,
            scope_volatility: request.scope_volatility,
            num_simulations: if request.num_simulations == 0 {
                DEFAULT_NUM_SIMULATIONS
            } else {
                request.num_simulations
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistogramBucket {
    pub bucket_center_weeks: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendRiskScores {
    pub integration: f64,
    pub team_imbalance: f64,
    pub scope_creep: f64,
    pub learning_curve: f64,
}

/// Fractions in `[0, 1]`.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendRoleAllocation {
    pub fe: f64,
    pub be: f64,
    pub devops: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSimulationResponse {
    /// Fraction in `[0, 1]`.
    pub on_time_probability: f64,
    pub expected_overrun_days: f64,
    pub p50_weeks: f64,
    pub p90_weeks: f64,
    pub histogram: Vec<HistogramBucket>,
    pub risk_scores: BackendRiskScores,
    pub team_stress_index: f64,
    pub p50_cost: f64,
    pub p90_cost: f64,
    #[serde(default)]
    pub currency: String,
    pub role_allocation: BackendRoleAllocation,
}

/// Maps the backend payload onto the dashboard's result record.
pub fn transform_simulation_response(
    backend: &BackendSimulationResponse,
    num_simulations: u32,
) -> SimulationResult {
    let scores = &backend.risk_scores;
    let frontend_pct = round_to(backend.role_allocation.fe * 100.0, 0);
    let backend_pct = round_to(backend.role_allocation.be * 100.0, 0);
    let devops_pct = round_to(backend.role_allocation.devops * 100.0, 0);

    SimulationResult {
        on_time_probability: round_to(backend.on_time_probability * 100.0, 1),
        p50_weeks: backend.p50_weeks,
        p90_weeks: backend.p90_weeks,
        expected_overrun_days: backend.expected_overrun_days,
        p50_cost: backend.p50_cost,
        p90_cost: backend.p90_cost,
        num_simulations,
        distribution: backend
            .histogram
            .iter()
            .map(|bucket| DurationSample::new(bucket.bucket_center_weeks.round() as i32, bucket.count))
            .collect(),
        risks: RiskBreakdown {
            integration_risk: backend_risk(scores.integration, "integration", 0.5),
            team_imbalance_risk: backend_risk(scores.team_imbalance, "team imbalance", 0.4),
            scope_creep_risk: backend_risk(scores.scope_creep, "scope creep", 0.6),
            learning_curve_risk: backend_risk(scores.learning_curve, "learning curve", 0.5),
        },
        team_stress: TeamStress::from_backend_index(backend.team_stress_index),
        allocation: RoleAllocation {
            frontend_pct,
            backend_pct,
            devops_pct,
            recommendation: format!(
                "Recommended: {frontend_pct}% FE, {backend_pct}% BE, {devops_pct}% DevOps"
            ),
        },
    }
}

fn backend_risk(score: f64, kind: &str, delay_per_point: f64) -> RiskItem {
    let uplift = match RiskLevel::from_score(score) {
        RiskLevel::High => format!("High {kind} risk (+{}w impact)", (score * 0.03).round()),
        RiskLevel::Medium => format!("Medium {kind} risk (+{}w impact)", (score * 0.02).round()),
        RiskLevel::Low => format!("Low {kind} risk"),
    };
    RiskItem::scored(score, uplift, (score * delay_per_point).round())
}

pub struct BackendClient {
    api_url: String,
    client: Client,
}

impl BackendClient {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let api_url = api_url.trim_end_matches('/');
        if api_url.is_empty() {
            return Err(BackendError::NotConfigured);
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Client(e.to_string()))?;
        Ok(Self {
            api_url: api_url.to_string(),
            client,
        })
    }

    pub async fn simulate(&self, request: &SimulationRequest) -> Result<SimulationResult, BackendError> {
        let body = BackendSimulationRequest::from(request);
        let url = format!("{}/simulate", self.api_url);
        tracing::debug!(%url, "requesting backend simulation");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status));
        }

        let payload = response
            .json::<BackendSimulationResponse>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))?;
        Ok(transform_simulation_response(&payload, body.num_simulations))
    }
}

/// Where a simulation result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultOrigin {
    Backend,
    Mock,
}

/// Asks the backend when one is configured; otherwise, or when the call
/// fails, fabricates a mock result.
pub async fn simulate_or_mock<R: Rng + ?Sized>(
    client: Option<&BackendClient>,
    request: &SimulationRequest,
    rng: &mut R,
) -> Result<(SimulationResult, ResultOrigin), BackendError> {
    if let Some(client) = client {
        match client.simulate(request).await {
            Ok(result) => return Ok((result, ResultOrigin::Backend)),
            Err(e) => tracing::warn!(error = %e, "backend simulation failed, using mock data"),
        }
    } else {
        tracing::info!("no backend configured, using mock data");
    }
    let result = generate_mock_simulation_with_rng(rng)?;
    Ok((result, ResultOrigin::Mock))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::simulation_result::StressLabel;

    fn backend_payload() -> BackendSimulationResponse {
        serde_json::from_value(serde_json::json!({
            "on_time_probability": 0.4234,
            "expected_overrun_days": 12.5,
            "p50_weeks": 11.2,
            "p90_weeks": 15.8,
            "histogram": [
                { "bucket_center_weeks": 9.5, "count": 120 },
                { "bucket_center_weeks": 10.5, "count": 480 },
                { "bucket_center_weeks": 11.5, "count": 400 }
            ],
            "risk_scores": {
                "integration": 45,
                "team_imbalance": 12,
                "scope_creep": 70,
                "learning_curve": 30
            },
            "team_stress_index": 72,
            "p50_cost": 44800.0,
            "p90_cost": 63200.0,
            "currency": "USD",
            "role_allocation": { "fe": 0.4, "be": 0.45, "devops": 0.15 },
            "baseline_metrics": { "ignored": true }
        }))
        .unwrap()
    }

    #[test]
    fn transform_converts_fractions_to_percentages() {
        let result = transform_simulation_response(&backend_payload(), 1000);

        assert_eq!(result.on_time_probability, 42.3);
        assert_eq!(result.allocation.frontend_pct, 40.0);
        assert_eq!(result.allocation.backend_pct, 45.0);
        assert_eq!(result.allocation.devops_pct, 15.0);
        assert_eq!(result.allocation.recommendation, "Recommended: 40% FE, 45% BE, 15% DevOps");
        assert_eq!(result.num_simulations, 1000);
    }

    #[test]
    fn transform_rounds_bucket_centres_to_weeks() {
        let result = transform_simulation_response(&backend_payload(), 1000);
        let weeks: Vec<i32> = result.distribution.iter().map(|s| s.week).collect();
        assert_eq!(weeks, vec![10, 11, 12]);
        assert_eq!(result.distribution[1].frequency, 480);
    }

    #[test]
    fn transform_scores_risks_and_stress() {
        let result = transform_simulation_response(&backend_payload(), 1000);

        let integration = &result.risks.integration_risk;
        assert_eq!(integration.level, RiskLevel::Medium);
        assert_eq!(integration.uplift, "Medium integration risk (+1w impact)");
        assert_eq!(integration.delay_days, 23.0);

        let scope = &result.risks.scope_creep_risk;
        assert_eq!(scope.level, RiskLevel::High);
        assert_eq!(scope.uplift, "High scope creep risk (+2w impact)");
        assert_eq!(scope.delay_days, 42.0);

        let imbalance = &result.risks.team_imbalance_risk;
        assert_eq!(imbalance.level, RiskLevel::Low);
        assert_eq!(imbalance.uplift, "Low team imbalance risk");

        assert_eq!(result.risks.learning_curve_risk.level, RiskLevel::Medium);
        assert_eq!(result.team_stress.label, StressLabel::Critical);
    }

    #[test]
    fn backend_request_uses_backend_field_names() {
        let body = BackendSimulationRequest::from(&SimulationRequest::demo());
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["stack"], "React Native");
        assert_eq!(json["integrations"], 3);
        assert_eq!(json["scope_size"], "medium");
        assert!(json.get("tech_stack").is_none());
    }

    #[test]
    fn backend_request_replaces_zero_trial_count() {
        let mut request = SimulationRequest::demo();
        request.num_simulations = 0;
        assert_eq!(BackendSimulationRequest::from(&request).num_simulations, 1000);

        request.num_simulations = 250;
        assert_eq!(BackendSimulationRequest::from(&request).num_simulations, 250);
    }

    #[test]
    fn transform_labels_boundary_stress_index_as_higher_level() {
        let mut payload = backend_payload();
        payload.team_stress_index = 70.0;
        assert_eq!(
            transform_simulation_response(&payload, 1000).team_stress.label,
            StressLabel::Critical
        );

        payload.team_stress_index = 40.0;
        assert_eq!(
            transform_simulation_response(&payload, 1000).team_stress.label,
            StressLabel::Elevated
        );
    }

    #[test]
    fn client_requires_an_endpoint() {
        let error = BackendClient::new("", Duration::from_secs(1))
            .err()
            .expect("expected missing endpoint error");
        assert!(matches!(error, BackendError::NotConfigured));
    }
}

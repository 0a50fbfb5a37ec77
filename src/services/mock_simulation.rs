use rand::Rng;

use crate::domain::simulation_result::{
    RiskBreakdown, RiskItem, RoleAllocation, SimulationResult, TeamStress,
};
use crate::services::distribution_synthesizer::synthesize_with_rng;
use crate::services::input_validation::InvalidInputError;
use crate::services::jitter::jitter;

pub const MOCK_NUM_SIMULATIONS: u32 = 1000;

pub fn generate_mock_simulation() -> Result<SimulationResult, InvalidInputError> {
    let mut rng = rand::thread_rng();
    generate_mock_simulation_with_rng(&mut rng)
}

/// Plausible demo result used when no backend is reachable.
pub fn generate_mock_simulation_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<SimulationResult, InvalidInputError> {
    let on_time_probability = jitter(rng, 42.0, 16.0);
    let p50_weeks = jitter(rng, 14.0, 4.0);
    let p90_weeks = jitter(rng, 21.0, 5.0);
    let expected_overrun_days = jitter(rng, 18.0, 10.0);
    let p50_cost = jitter(rng, 48_000.0, 12_000.0);
    let p90_cost = jitter(rng, 72_000.0, 18_000.0);
    let distribution = synthesize_with_rng(p50_weeks, p90_weeks, rng)?;

    let risks = RiskBreakdown {
        integration_risk: mock_risk(rng, (62.0, 20.0), (18.0, 8.0), (6.0, 4.0)),
        team_imbalance_risk: mock_risk(rng, (45.0, 20.0), (12.0, 6.0), (4.0, 3.0)),
        scope_creep_risk: mock_risk(rng, (71.0, 20.0), (25.0, 10.0), (9.0, 5.0)),
        learning_curve_risk: mock_risk(rng, (33.0, 16.0), (8.0, 4.0), (3.0, 2.0)),
    };

    let team_stress = TeamStress::from_score(jitter(rng, 58.0, 20.0));

    let allocation = RoleAllocation {
        frontend_pct: jitter(rng, 40.0, 10.0),
        backend_pct: jitter(rng, 45.0, 10.0),
        devops_pct: jitter(rng, 15.0, 6.0),
        recommendation: "Recommended: 1.2 FE, 1.4 BE, 0.4 DevOps (shared)".to_string(),
    };

    Ok(SimulationResult {
        on_time_probability,
        p50_weeks,
        p90_weeks,
        expected_overrun_days,
        p50_cost,
        p90_cost,
        num_simulations: MOCK_NUM_SIMULATIONS,
        distribution,
        risks,
        team_stress,
        allocation,
    })
}

/// Each pair is `(base, range)` handed to [`jitter`].
fn mock_risk<R: Rng + ?Sized>(
    rng: &mut R,
    score: (f64, f64),
    uplift_pct: (f64, f64),
    delay_days: (f64, f64),
) -> RiskItem {
    let score = jitter(rng, score.0, score.1);
    let uplift = format!("+{}% delay", jitter(rng, uplift_pct.0, uplift_pct.1));
    let delay_days = jitter(rng, delay_days.0, delay_days.1);
    RiskItem::scored(score, uplift, delay_days)
}

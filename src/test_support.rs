use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::duration_sample::DurationSample;
use crate::domain::simulation_result::{
    RiskBreakdown, RiskItem, RoleAllocation, SimulationResult, TeamStress,
};
use crate::services::distribution_synthesizer::synthesize_with_rng;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(20260118)
}

pub fn histogram(pairs: &[(i32, u64)]) -> Vec<DurationSample> {
    pairs
        .iter()
        .map(|(week, frequency)| DurationSample::new(*week, *frequency))
        .collect()
}

/// A typical mid-sized project run around the given percentiles.
pub fn baseline_result(p50: f64, p90: f64) -> SimulationResult {
    SimulationResult {
        on_time_probability: 42.0,
        p50_weeks: p50,
        p90_weeks: p90,
        expected_overrun_days: 18.0,
        p50_cost: 48_000.0,
        p90_cost: 72_000.0,
        num_simulations: 1000,
        distribution: synthesize_with_rng(p50, p90, &mut seeded_rng()).unwrap(),
        risks: RiskBreakdown {
            integration_risk: RiskItem::scored(62.0, "+18% delay".to_string(), 6.0),
            team_imbalance_risk: RiskItem::scored(45.0, "+12% delay".to_string(), 4.0),
            scope_creep_risk: RiskItem::scored(71.0, "+25% delay".to_string(), 9.0),
            learning_curve_risk: RiskItem::scored(33.0, "+8% delay".to_string(), 3.0),
        },
        team_stress: TeamStress::from_score(58.0),
        allocation: RoleAllocation {
            frontend_pct: 40.0,
            backend_pct: 45.0,
            devops_pct: 15.0,
            recommendation: "Recommended: 40% FE, 45% BE, 15% DevOps".to_string(),
        },
    }
}

use rand::Rng;

use crate::domain::scenario::ScenarioDeltas;
use crate::domain::simulation_result::{SimulationResult, TeamStress};
use crate::services::distribution_synthesizer::synthesize_with_rng;
use crate::services::input_validation::InvalidInputError;
use crate::services::jitter::{jitter, round_to};

/// Minimum gap kept between the projected P50 and P90.
pub const MIN_P90_GAP: f64 = 2.0;
pub const MIN_P50_WEEKS: f64 = 2.0;

/// On-time probability shift in percentage points.
pub fn probability_shift(deltas: &ScenarioDeltas) -> f64 {
    f64::from(deltas.senior) * 8.0 - f64::from(deltas.integrations) * 5.0
        + f64::from(deltas.deadline) * 3.0
}

/// Timeline shift in weeks; negative values shorten the schedule.
pub fn week_shift(deltas: &ScenarioDeltas) -> f64 {
    -f64::from(deltas.senior) * 1.2 + f64::from(deltas.integrations) * 0.8
        - f64::from(deltas.deadline) * 0.5
}

pub fn stress_shift(deltas: &ScenarioDeltas) -> f64 {
    -f64::from(deltas.senior) * 10.0 + f64::from(deltas.integrations) * 6.0
        - f64::from(deltas.deadline) * 3.0
}

pub fn project(
    baseline: &SimulationResult,
    deltas: ScenarioDeltas,
) -> Result<SimulationResult, InvalidInputError> {
    let mut rng = rand::thread_rng();
    project_with_rng(baseline, deltas, &mut rng)
}

/// Derives a what-if result from `baseline` using fixed sensitivity
/// coefficients plus small noise.
///
/// Zero deltas return the baseline unchanged. The histogram is synthesized
/// again from the projected P50/P90. Risks and role allocation are carried
/// over from the baseline as they are; this model does not re-score them.
pub fn project_with_rng<R: Rng + ?Sized>(
    baseline: &SimulationResult,
    deltas: ScenarioDeltas,
    rng: &mut R,
) -> Result<SimulationResult, InvalidInputError> {
    if deltas.is_zero() {
        return Ok(baseline.clone());
    }

    let prob_shift = probability_shift(&deltas);
    let week_shift = week_shift(&deltas);
    tracing::debug!(?deltas, prob_shift, week_shift, "projecting scenario");

    let on_time_probability = round_to(
        (baseline.on_time_probability + prob_shift + jitter(rng, 0.0, 4.0)).clamp(5.0, 95.0),
        1,
    );
    let p50_weeks = round_to(
        (baseline.p50_weeks + week_shift + jitter(rng, 0.0, 0.8)).max(MIN_P50_WEEKS),
        1,
    );
    let p90_weeks = round_to(
        (baseline.p90_weeks + week_shift * 1.3 + jitter(rng, 0.0, 1.0)).max(p50_weeks + MIN_P90_GAP),
        1,
    );
    let expected_overrun_days = round_to(
        (baseline.expected_overrun_days - prob_shift * 0.4 + jitter(rng, 0.0, 3.0)).max(0.0),
        1,
    );
    let p50_cost = round_to(baseline.p50_cost + week_shift * 3200.0 + jitter(rng, 0.0, 2000.0), 0);
    let p90_cost = round_to(baseline.p90_cost + week_shift * 4500.0 + jitter(rng, 0.0, 3000.0), 0);

    let stress_score = round_to(
        baseline.team_stress.score + stress_shift(&deltas) + jitter(rng, 0.0, 4.0),
        0,
    )
    .clamp(10.0, 100.0);

    let distribution = synthesize_with_rng(p50_weeks, p90_weeks, rng)?;

    Ok(SimulationResult {
        on_time_probability,
        p50_weeks,
        p90_weeks,
        expected_overrun_days,
        p50_cost,
        p90_cost,
        num_simulations: baseline.num_simulations,
        distribution,
        risks: baseline.risks.clone(),
        team_stress: TeamStress::from_score(stress_score),
        allocation: baseline.allocation.clone(),
    })
}

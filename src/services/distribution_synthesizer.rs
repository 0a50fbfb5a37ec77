use rand::Rng;
use std::f64::consts::PI;

use crate::domain::duration_sample::DurationSample;
use crate::services::input_validation::{InvalidInputError, check_horizon, implied_std_dev};
use crate::services::jitter::unit_offset;

/// Nominal number of trials the synthetic histogram is scaled to.
pub const NOMINAL_TRIALS: f64 = 1000.0;

/// Bucket noise is drawn from `[-JITTER_SPAN/2, JITTER_SPAN/2)` and rounded.
const JITTER_SPAN: f64 = 8.0;

/// Fabricates a weekly histogram resembling a normal distribution anchored
/// at `p50` with the spread implied by `p90`.
///
/// Not reproducible: each call draws fresh bucket noise. Use
/// [`synthesize_with_rng`] with a seeded generator when the output must be
/// stable.
pub fn synthesize(p50: f64, p90: f64) -> Result<Vec<DurationSample>, InvalidInputError> {
    let mut rng = rand::thread_rng();
    synthesize_with_rng(p50, p90, &mut rng)
}

pub fn synthesize_with_rng<R: Rng + ?Sized>(
    p50: f64,
    p90: f64,
    rng: &mut R,
) -> Result<Vec<DurationSample>, InvalidInputError> {
    let std_dev = implied_std_dev(p50, p90)?;
    let mean = p50;
    let (first_week, last_week) = week_span(mean, std_dev)?;
    tracing::debug!(p50, p90, std_dev, first_week, last_week, "synthesizing histogram");

    let samples = (first_week..=last_week)
        .map(|week| {
            let expected = (NOMINAL_TRIALS * normal_density(week as f64, mean, std_dev)).round();
            let noise = (unit_offset(rng) * JITTER_SPAN).round();
            let frequency = (expected + noise).max(1.0) as u64;
            DurationSample::new(week, frequency)
        })
        .collect();
    Ok(samples)
}

/// Inclusive week range covering three standard deviations either side of
/// the mean, never starting before week 1 nor ending past the horizon limit.
pub fn week_span(mean: f64, std_dev: f64) -> Result<(i32, i32), InvalidInputError> {
    let last = (mean + 3.0 * std_dev).ceil();
    check_horizon(last)?;
    let first = ((mean - 3.0 * std_dev).floor() as i32).max(1);
    Ok((first, (last as i32).max(first)))
}

pub fn normal_density(x: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (x - mean) / std_dev;
    (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
}

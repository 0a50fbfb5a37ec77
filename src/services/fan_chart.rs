use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::domain::path_frame::PathSimulationFrame;
use crate::services::input_validation::{InvalidInputError, check_horizon, implied_std_dev};
use crate::services::percentiles::{order_statistic, sorted_f64};

pub const DEFAULT_PATH_COUNT: usize = 100;

/// Path indices kept verbatim for the trajectory overlay.
pub const SAMPLE_PATH_INDICES: [usize; 8] = [5, 15, 30, 45, 60, 75, 85, 95];

const BASE_VOLATILITY: f64 = 0.15;
const MEAN_REVERSION: f64 = 0.1;
const HORIZON_FACTOR: f64 = 1.2;

#[derive(Debug, Clone, PartialEq)]
pub struct FanChartParams {
    pub p50: f64,
    pub p90: f64,
    /// 1 (simple) to 5 (very complex).
    pub complexity: u8,
    pub team_size: f64,
    pub path_count: usize,
}

impl FanChartParams {
    pub fn new(p50: f64, p90: f64, complexity: u8, team_size: f64) -> Self {
        Self {
            p50,
            p90,
            complexity,
            team_size,
            path_count: DEFAULT_PATH_COUNT,
        }
    }

    pub fn with_path_count(mut self, path_count: usize) -> Self {
        self.path_count = path_count;
        self
    }

    fn validate(&self) -> Result<(), InvalidInputError> {
        implied_std_dev(self.p50, self.p90)?;
        if !(1..=5).contains(&self.complexity) {
            return Err(InvalidInputError::InvalidComplexity(self.complexity));
        }
        if !self.team_size.is_finite() || self.team_size <= 0.0 {
            return Err(InvalidInputError::InvalidTeamSize(self.team_size));
        }
        if self.path_count == 0 {
            return Err(InvalidInputError::InvalidPathCount);
        }
        check_horizon((self.p90 * HORIZON_FACTOR).ceil())
    }

    /// Last simulated week: 20% past the pessimistic estimate.
    pub fn max_weeks(&self) -> u32 {
        (self.p90 * HORIZON_FACTOR).ceil() as u32
    }

    /// Percent-per-week scale. Mixes percentage deviation with weekly steps;
    /// the fan is meant to look plausible, not to be dimensionally exact.
    pub fn baseline_growth(&self) -> f64 {
        100.0 / self.p50
    }

    /// Grows with complexity and shrinks with the square root of team size
    /// relative to a three-person team.
    pub fn volatility(&self) -> f64 {
        BASE_VOLATILITY
            * (1.0 + f64::from(self.complexity) / 20.0)
            * (1.0 / (self.team_size / 3.0).sqrt())
    }
}

/// Simulates the fan chart with fresh random draws on every call.
pub fn simulate(params: &FanChartParams) -> Result<Vec<PathSimulationFrame>, InvalidInputError> {
    let mut rng = rand::thread_rng();
    simulate_with_rng(params, &mut rng)
}

/// Runs `path_count` mean-reverting random walks and reduces them into
/// percentile bands, one frame per week from 0 to `max_weeks` inclusive.
///
/// Bands are built from absolute values of the cross-sectional order
/// statistics, so the fan is drawn symmetric even when the paths are skewed.
/// Each wider band is at least as wide as the narrower one inside it.
///
/// Below a five-week median the mean-reversion step overshoots by more than
/// it pulls back, so a long horizon can blow the walk up to infinity; that
/// fails with `DivergentPaths`.
pub fn simulate_with_rng<R: Rng + ?Sized>(
    params: &FanChartParams,
    rng: &mut R,
) -> Result<Vec<PathSimulationFrame>, InvalidInputError> {
    params.validate()?;
    let max_weeks = params.max_weeks();
    tracing::debug!(
        max_weeks,
        volatility = params.volatility(),
        paths = params.path_count,
        "simulating fan chart"
    );

    let paths: Vec<Vec<f64>> = (0..params.path_count)
        .map(|_| simulate_path(params, max_weeks, rng))
        .collect();
    if paths.iter().flatten().any(|deviation| !deviation.is_finite()) {
        return Err(InvalidInputError::DivergentPaths { p50: params.p50 });
    }

    let frames = (0..=max_weeks)
        .map(|week| reduce_week(&paths, week))
        .collect();
    Ok(frames)
}

fn simulate_path<R: Rng + ?Sized>(params: &FanChartParams, max_weeks: u32, rng: &mut R) -> Vec<f64> {
    let shock = Uniform::new(-1.0_f64, 1.0);
    let volatility = params.volatility();
    let growth = params.baseline_growth();

    let mut path = Vec::with_capacity(max_weeks as usize + 1);
    path.push(0.0);
    let mut cumulative_deviation = 0.0;
    for week in 1..=max_weeks {
        let mean_reversion = -MEAN_REVERSION * cumulative_deviation;
        let weekly_deviation =
            (volatility * f64::from(week) * shock.sample(rng) + mean_reversion) * growth;
        cumulative_deviation += weekly_deviation;
        path.push(cumulative_deviation);
    }
    path
}

fn reduce_week(paths: &[Vec<f64>], week: u32) -> PathSimulationFrame {
    let index = week as usize;
    let column: Vec<f64> = paths.iter().map(|path| path[index]).collect();
    let sorted = sorted_f64(&column);
    let at = |fraction: f64| order_statistic(&sorted, fraction).unwrap_or(0.0).abs();

    let p75_upper = at(0.75);
    let p90_upper = at(0.90).max(p75_upper);
    let p95_upper = at(0.95).max(p90_upper);
    let p75_lower = -at(0.25);
    let p90_lower = (-at(0.10)).min(p75_lower);
    let p95_lower = (-at(0.05)).min(p90_lower);

    let sample_paths = SAMPLE_PATH_INDICES
        .iter()
        .filter_map(|path_index| paths.get(*path_index).map(|path| path[index]))
        .collect();

    PathSimulationFrame {
        week,
        p95_upper,
        p90_upper,
        p75_upper,
        median: 0.0,
        p75_lower,
        p90_lower,
        p95_lower,
        sample_paths,
    }
}

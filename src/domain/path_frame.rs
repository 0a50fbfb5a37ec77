use serde::{Deserialize, Serialize};

/// Fan chart envelope for a single week.
///
/// Band values are signed percentage deviations from the median path, which
/// is pinned at zero. Upper values are `>= 0`, lower values are `<= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSimulationFrame {
    pub week: u32,
    pub p95_upper: f64,
    pub p90_upper: f64,
    pub p75_upper: f64,
    pub median: f64,
    pub p75_lower: f64,
    pub p90_lower: f64,
    pub p95_lower: f64,
    /// Raw values of the overlay trajectories, in path-index order.
    pub sample_paths: Vec<f64>,
}

impl PathSimulationFrame {
    /// Widest deviation of the outer band, used for symmetric axis ranges.
    pub fn max_deviation(&self) -> f64 {
        self.p95_upper.abs().max(self.p95_lower.abs())
    }
}

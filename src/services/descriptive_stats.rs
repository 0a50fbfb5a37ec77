use serde::Serialize;

use crate::domain::duration_sample::{DurationSample, sorted_by_week, total_frequency};
use crate::services::distribution_synthesizer::normal_density;
use crate::services::input_validation::InvalidInputError;

/// Percentile levels reported for a histogram.
pub const PERCENTILE_LEVELS: [u32; 6] = [10, 25, 50, 75, 90, 95];

/// Two-sided 95% z-score.
const Z_95: f64 = 1.96;

/// Empirical percentiles read off a step CDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Percentiles {
    pub p10: i32,
    pub p25: i32,
    pub p50: i32,
    pub p75: i32,
    pub p90: i32,
    pub p95: i32,
}

impl Percentiles {
    pub fn get(&self, percentile: u32) -> Option<i32> {
        match percentile {
            10 => Some(self.p10),
            25 => Some(self.p25),
            50 => Some(self.p50),
            75 => Some(self.p75),
            90 => Some(self.p90),
            95 => Some(self.p95),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        PERCENTILE_LEVELS
            .iter()
            .filter_map(move |level| self.get(*level).map(|week| (*level, week)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionStats {
    pub total_count: u64,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub mode: i32,
    pub skewness: f64,
    pub percentiles: Percentiles,
    pub ci95_lower: f64,
    pub ci95_upper: f64,
}

/// Descriptive statistics of a weekly histogram.
///
/// Pure: the same histogram always yields the same statistics. A histogram
/// concentrated in a single week has zero spread and reports zero skewness.
pub fn analyze(samples: &[DurationSample]) -> Result<DistributionStats, InvalidInputError> {
    let total_count = checked_total(samples)?;
    let total = total_count as f64;

    let mean = samples
        .iter()
        .map(|sample| sample.week as f64 * sample.frequency as f64)
        .sum::<f64>()
        / total;
    let variance = samples
        .iter()
        .map(|sample| (sample.week as f64 - mean).powi(2) * sample.frequency as f64)
        .sum::<f64>()
        / total;
    let std_dev = variance.sqrt();

    let skewness = if std_dev > 0.0 {
        samples
            .iter()
            .map(|sample| ((sample.week as f64 - mean) / std_dev).powi(3) * sample.frequency as f64)
            .sum::<f64>()
            / total
    } else {
        0.0
    };

    let stats = DistributionStats {
        total_count,
        mean,
        variance,
        std_dev,
        mode: mode(samples),
        skewness,
        percentiles: step_percentiles(samples, total_count),
        ci95_lower: mean - Z_95 * std_dev,
        ci95_upper: mean + Z_95 * std_dev,
    };
    tracing::debug!(mean, std_dev, total_count, "analyzed histogram");
    Ok(stats)
}

/// Non-zero total frequency. Every running sum over the same samples stays
/// at or below it, so prefix sums cannot overflow once this succeeds.
fn checked_total(samples: &[DurationSample]) -> Result<u64, InvalidInputError> {
    match total_frequency(samples) {
        None => Err(InvalidInputError::FrequencyOverflow),
        Some(0) => Err(InvalidInputError::EmptyHistogram),
        Some(total) => Ok(total),
    }
}

/// Week of the first maximum frequency when scanning in the given order.
fn mode(samples: &[DurationSample]) -> i32 {
    let mut best = samples[0];
    for sample in &samples[1..] {
        if sample.frequency > best.frequency {
            best = *sample;
        }
    }
    best.week
}

fn step_percentiles(samples: &[DurationSample], total_count: u64) -> Percentiles {
    let mut found: [Option<i32>; PERCENTILE_LEVELS.len()] = [None; PERCENTILE_LEVELS.len()];
    let mut cumulative: u64 = 0;

    for sample in sorted_by_week(samples) {
        cumulative += sample.frequency;
        for (slot, level) in found.iter_mut().zip(PERCENTILE_LEVELS) {
            // cumulative / total >= level / 100, kept in integers
            if slot.is_none()
                && cumulative as u128 * 100 >= level as u128 * total_count as u128
            {
                *slot = Some(sample.week);
            }
        }
    }

    // The last bucket always reaches 100%, so every level is set.
    let last_week = samples.iter().map(|sample| sample.week).max().unwrap_or_default();
    let [p10, p25, p50, p75, p90, p95] = found.map(|week| week.unwrap_or(last_week));
    Percentiles {
        p10,
        p25,
        p50,
        p75,
        p90,
        p95,
    }
}

/// One point of the cumulative view of a histogram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CdfPoint {
    pub week: i32,
    pub frequency: u64,
    /// Percent of trials finished by this week.
    pub cumulative_probability: f64,
    /// Percent of trials finishing in this week.
    pub normalized_frequency: f64,
}

pub fn cumulative_series(samples: &[DurationSample]) -> Result<Vec<CdfPoint>, InvalidInputError> {
    let total_count = checked_total(samples)?;
    let total = total_count as f64;
    let mut cumulative = 0;

    Ok(sorted_by_week(samples)
        .into_iter()
        .map(|sample| {
            cumulative += sample.frequency;
            CdfPoint {
                week: sample.week,
                frequency: sample.frequency,
                cumulative_probability: cumulative as f64 / total * 100.0,
                normalized_frequency: sample.frequency as f64 / total * 100.0,
            }
        })
        .collect())
}

/// Fitted normal curve in percent per week, evaluated at `weeks`.
pub fn normal_overlay(stats: &DistributionStats, weeks: &[i32]) -> Vec<(i32, f64)> {
    weeks
        .iter()
        .map(|week| {
            let value = if stats.std_dev > 0.0 {
                100.0 * normal_density(*week as f64, stats.mean, stats.std_dev)
            } else {
                0.0
            };
            (*week, value)
        })
        .collect()
}

/// Cumulative probability at the first week on or after `deadline`.
pub fn deadline_confidence(series: &[CdfPoint], deadline: f64) -> Option<f64> {
    series
        .iter()
        .find(|point| point.week as f64 >= deadline)
        .map(|point| point.cumulative_probability)
}

pub fn insight_text(
    num_simulations: u32,
    p50: f64,
    p90: f64,
    deadline: Option<f64>,
    confidence: Option<f64>,
) -> String {
    let base = format!(
        "Based on {num_simulations} test scenarios, you're most likely to finish around week {p50}. There's a 90% chance you'll be done by week {p90}."
    );
    let Some(deadline) = deadline else {
        return base;
    };
    let confidence = confidence
        .map(|value| format!("{value:.0}%"))
        .unwrap_or_else(|| "unknown".to_string());
    let advice = if deadline < p90 {
        "consider adding buffer time."
    } else {
        "you should be fine."
    };
    format!("{base} Your target deadline (week {deadline}) has a {confidence} confidence, {advice}")
}

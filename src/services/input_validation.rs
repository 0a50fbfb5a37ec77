use thiserror::Error;

/// Longest horizon, in weeks, any engine will enumerate (ten years).
pub const MAX_HORIZON_WEEKS: u32 = 520;

/// Inputs the statistical engines cannot produce a meaningful result for.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    #[error("p90 ({p90}) must be greater than p50 ({p50})")]
    NonPositiveSpread { p50: f64, p90: f64 },
    #[error("p50 must be greater than zero, got {0}")]
    NonPositiveMedian(f64),
    #[error("input values must be finite")]
    NonFiniteInput,
    #[error("histogram is empty or has a total frequency of zero")]
    EmptyHistogram,
    #[error("complexity must be between 1 and 5, got {0}")]
    InvalidComplexity(u8),
    #[error("team size must be greater than zero, got {0}")]
    InvalidTeamSize(f64),
    #[error("number of simulated paths must be greater than zero")]
    InvalidPathCount,
    #[error("horizon of {weeks} weeks exceeds the limit of {max} weeks")]
    HorizonTooLong { weeks: f64, max: u32 },
    #[error("histogram frequencies add up to more than {}", u64::MAX)]
    FrequencyOverflow,
    #[error("simulated paths diverged; p50 of {p50} weeks is too short for the horizon")]
    DivergentPaths { p50: f64 },
}

/// Checks a P50/P90 pair and returns the implied normal standard deviation.
pub fn implied_std_dev(p50: f64, p90: f64) -> Result<f64, InvalidInputError> {
    if !p50.is_finite() || !p90.is_finite() {
        return Err(InvalidInputError::NonFiniteInput);
    }
    if p50 <= 0.0 {
        return Err(InvalidInputError::NonPositiveMedian(p50));
    }
    if p90 <= p50 {
        return Err(InvalidInputError::NonPositiveSpread { p50, p90 });
    }
    // z-score of the 90th percentile of the standard normal
    Ok((p90 - p50) / 1.28)
}

/// Rejects a last week beyond [`MAX_HORIZON_WEEKS`].
pub fn check_horizon(last_week: f64) -> Result<(), InvalidInputError> {
    if last_week > f64::from(MAX_HORIZON_WEEKS) {
        return Err(InvalidInputError::HorizonTooLong {
            weeks: last_week,
            max: MAX_HORIZON_WEEKS,
        });
    }
    Ok(())
}

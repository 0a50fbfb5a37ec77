use serde::{Deserialize, Serialize};

/// One histogram bucket: how many trials finished in `week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationSample {
    pub week: i32,
    pub frequency: u64,
}

impl DurationSample {
    pub fn new(week: i32, frequency: u64) -> Self {
        Self { week, frequency }
    }
}

/// Sum of all frequencies in a histogram, or `None` if it overflows `u64`.
pub fn total_frequency(samples: &[DurationSample]) -> Option<u64> {
    samples
        .iter()
        .try_fold(0_u64, |total, sample| total.checked_add(sample.frequency))
}

/// Copy of `samples` ordered by ascending week.
pub fn sorted_by_week(samples: &[DurationSample]) -> Vec<DurationSample> {
    let mut sorted = samples.to_vec();
    sorted.sort_by_key(|sample| sample.week);
    sorted
}

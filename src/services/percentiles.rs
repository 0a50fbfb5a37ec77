/// Order-statistic helpers for already-sorted slices.
///
/// - Empty input => `None`.
/// - The index is `floor(len * fraction)`, clamped to the last element, so
///   no interpolation happens between neighbouring values.

/// Returns the value at the `fraction` position (0.0..=1.0) of a slice that
/// is already sorted in ascending order.
pub fn order_statistic<T: Copy>(sorted_values: &[T], fraction: f64) -> Option<T> {
    if sorted_values.is_empty() {
        return None;
    }

    let last = sorted_values.len() - 1;
    let index = if fraction <= 0.0 {
        0
    } else {
        ((sorted_values.len() as f64 * fraction).floor() as usize).min(last)
    };

    sorted_values.get(index).copied()
}

/// Sorts a copy of `values` ascending; NaN compares equal to everything.
pub fn sorted_f64(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

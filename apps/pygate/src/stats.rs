//! Small numeric helpers for summary lines.

/// Sum of the values.
pub fn total(values: &[usize]) -> usize {
    values.iter().sum()
}

/// Arithmetic mean, or `None` when `values` is empty.
pub fn mean(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(total(values) as f64 / values.len() as f64)
}

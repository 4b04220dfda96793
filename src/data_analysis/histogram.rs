// src/data_analysis/histogram.rs

/// Fixed-width histogram of a numeric column.
#[derive(Debug, Clone)]
pub struct HistogramData {
    /// `bin_count + 1` ascending bin edges spanning the observed value range.
    pub edges: Vec<f64>,
    /// Occupancy per bin; same length as `edges.len() - 1`.
    pub counts: Vec<usize>,
    pub bin_width: f64,
}

impl HistogramData {
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Bins values into `bin_count` equal-width bins spanning the observed range.
/// The observed maximum lands in the last bin rather than spilling past it.
///
/// Returns `None` when there is nothing to bin: empty input, a zero bin
/// count, or a column with no spread (all values identical).
pub fn compute_histogram(values: &[f64], bin_count: usize) -> Option<HistogramData> {
    if values.is_empty() || bin_count == 0 {
        return None;
    }

    let min_val = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_val = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if !min_val.is_finite() || !max_val.is_finite() || min_val >= max_val {
        return None;
    }

    let bin_width = (max_val - min_val) / bin_count as f64;
    let mut counts = vec![0usize; bin_count];

    for &value in values {
        let idx = ((value - min_val) / bin_width).floor() as usize;
        let idx = idx.min(bin_count - 1);
        counts[idx] += 1;
    }

    let edges = (0..=bin_count)
        .map(|i| min_val + i as f64 * bin_width)
        .collect();

    Some(HistogramData {
        edges,
        counts,
        bin_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_values_fill_expected_bins() {
        let values = [0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5];
        let hist = compute_histogram(&values, 4).unwrap();

        assert_eq!(hist.bin_count(), 4);
        assert!((hist.bin_width - 0.875).abs() < 1e-12);
        assert_eq!(hist.counts.iter().sum::<usize>(), values.len());
        assert_eq!(hist.edges.len(), 5);
        assert!((hist.edges[0] - 0.0).abs() < 1e-12);
        assert!((hist.edges[4] - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_maximum_value_lands_in_last_bin() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0];
        let hist = compute_histogram(&values, 4).unwrap();

        assert_eq!(hist.counts, vec![1, 1, 1, 2]);
        assert_eq!(hist.max_count(), 2);
    }

    #[test]
    fn test_known_gpa_like_distribution() {
        let values = [2.0, 2.1, 2.2, 3.0, 3.1, 3.9, 4.0];
        let hist = compute_histogram(&values, 2).unwrap();

        // Range 2.0..4.0 split at 3.0; the 3.0 value belongs to the upper bin
        assert_eq!(hist.counts, vec![3, 4]);
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_histogram(&[], 20).is_none());
    }

    #[test]
    fn test_zero_bins() {
        assert!(compute_histogram(&[1.0, 2.0], 0).is_none());
    }

    #[test]
    fn test_constant_column_has_no_histogram() {
        assert!(compute_histogram(&[3.5, 3.5, 3.5], 20).is_none());
        assert!(compute_histogram(&[3.5], 20).is_none());
    }
}

// src/data_analysis/histogram.rs

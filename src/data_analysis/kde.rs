// src/data_analysis/kde.rs

use std::f64::consts::PI;

/// Gaussian kernel density estimate of `values`, evaluated on an even grid
/// and scaled to overlay a count histogram of the same data.
///
/// Bandwidth follows Silverman's rule of thumb, `1.06 * s * n^(-1/5)` with
/// the sample standard deviation `s`. The grid extends three bandwidths past
/// the observed range so the curve tails off instead of being clipped.
/// Scaling by `n * bin_width` converts the unit-area density to the count
/// axis of a histogram with that bin width.
///
/// Returns an empty curve when a smooth estimate is not defined: fewer than
/// two values, no spread, or a degenerate grid.
pub fn kde_count_curve(values: &[f64], bin_width: f64, sample_points: usize) -> Vec<(f64, f64)> {
    if values.len() < 2 || sample_points < 2 || !(bin_width > 0.0) {
        return Vec::new();
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    let std_dev = variance.sqrt();

    let bandwidth = 1.06 * std_dev * n.powf(-0.2);
    if !(bandwidth > 0.0) || !bandwidth.is_finite() {
        return Vec::new();
    }

    let min_val = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_val = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let grid_start = min_val - 3.0 * bandwidth;
    let grid_end = max_val + 3.0 * bandwidth;
    let step = (grid_end - grid_start) / (sample_points - 1) as f64;

    let norm = 1.0 / (n * bandwidth * (2.0 * PI).sqrt());
    let count_scale = n * bin_width;

    (0..sample_points)
        .map(|i| {
            let x = grid_start + i as f64 * step;
            let density: f64 = values
                .iter()
                .map(|&v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density * count_scale)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_area_matches_count_scale() {
        let values = [2.1, 2.5, 2.8, 3.0, 3.1, 3.3, 3.6, 3.9];
        let bin_width = 0.25;
        let curve = kde_count_curve(&values, bin_width, 200);
        assert_eq!(curve.len(), 200);

        // Trapezoid integral of the scaled curve recovers n * bin_width
        let mut area = 0.0;
        for pair in curve.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            area += 0.5 * (y0 + y1) * (x1 - x0);
        }
        let expected = values.len() as f64 * bin_width;
        assert!(
            (area - expected).abs() / expected < 0.05,
            "area {} vs expected {}",
            area,
            expected
        );
    }

    #[test]
    fn test_peak_sits_near_the_mean_of_symmetric_data() {
        let values = [1.0, 2.0, 3.0];
        let curve = kde_count_curve(&values, 0.5, 401);

        let (peak_x, peak_y) = curve
            .iter()
            .cloned()
            .fold((f64::NAN, f64::NEG_INFINITY), |best, (x, y)| {
                if y > best.1 {
                    (x, y)
                } else {
                    best
                }
            });
        assert!(peak_y > 0.0);
        assert!((peak_x - 2.0).abs() < 0.05, "peak at {}", peak_x);
    }

    #[test]
    fn test_grid_extends_past_observed_range() {
        let values = [10.0, 12.0, 14.0];
        let curve = kde_count_curve(&values, 1.0, 50);

        let first_x = curve.first().map(|&(x, _)| x).unwrap();
        let last_x = curve.last().map(|&(x, _)| x).unwrap();
        assert!(first_x < 10.0);
        assert!(last_x > 14.0);
    }

    #[test]
    fn test_degenerate_inputs_yield_empty_curve() {
        assert!(kde_count_curve(&[], 0.5, 200).is_empty());
        assert!(kde_count_curve(&[1.0], 0.5, 200).is_empty());
        assert!(kde_count_curve(&[2.0, 2.0, 2.0], 0.5, 200).is_empty());
        assert!(kde_count_curve(&[1.0, 2.0], 0.0, 200).is_empty());
        assert!(kde_count_curve(&[1.0, 2.0], 0.5, 1).is_empty());
    }
}

// src/data_analysis/kde.rs

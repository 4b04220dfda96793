// src/data_analysis/correlation.rs

use ndarray::Array2;

/// Pearson correlation coefficient over the pairwise-complete observations of
/// two columns. Rows where either side is missing are dropped before the
/// calculation, so every matrix cell uses as much data as it can.
///
/// Returns `None` when fewer than two complete pairs remain or either side
/// has zero variance over those pairs.
pub fn pearson_correlation(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys.iter())
        .filter_map(|(x, y)| match (x, y) {
            (Some(a), Some(b)) => Some((*a, *b)),
            _ => None,
        })
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    if variance_x <= 0.0 || variance_y <= 0.0 {
        return None;
    }

    // Rounding can push a self-correlation a hair past 1.0
    Some((covariance / (variance_x.sqrt() * variance_y.sqrt())).clamp(-1.0, 1.0))
}

/// Builds the symmetric correlation matrix for the given columns.
/// Cell (i, j) holds the Pearson correlation of columns i and j; pairs with
/// no defined correlation are NaN and rendered as unavailable downstream.
pub fn correlation_matrix(columns: &[Vec<Option<f64>>]) -> Array2<f64> {
    let column_count = columns.len();
    let mut matrix = Array2::from_elem((column_count, column_count), f64::NAN);

    for i in 0..column_count {
        for j in i..column_count {
            if let Some(value) = pearson_correlation(&columns[i], &columns[j]) {
                matrix[[i, j]] = value;
                matrix[[j, i]] = value;
            }
        }
    }

    matrix
}


// src/data_analysis/correlation.rs

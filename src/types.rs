// src/types.rs
// Type aliases to reduce complexity warnings

use ndarray::Array2;
use std::error::Error;

// CSV parser return type
pub type StudentParseResult = Result<
    (
        Vec<crate::data_input::student_data::StudentRowData>,
        crate::data_input::student_data::ColumnPresence,
        Vec<(String, String)>, // export preamble metadata
    ),
    Box<dyn Error>,
>;

// Correlation heatmap input: column labels plus the matrix cells.
// Cell (i, j) correlates labels[i] with labels[j]; undefined cells are NaN.
pub type CorrelationData = (Vec<String>, Array2<f64>);

// One smoothed density curve, already scaled to histogram counts.
pub type KdeCurve = Vec<(f64, f64)>;

// Category labels with their occurrence counts, in display order.
pub type CategoryCounts = Vec<(String, usize)>;

// src/types.rs

// src/plot_functions/plot_correlation_heatmap.rs

use std::error::Error;

use crate::data_analysis::correlation::correlation_matrix;
use crate::data_analysis::descriptive::column_options;
use crate::data_input::student_data::{ColumnPresence, NumericColumn, StudentRowData};
use crate::plot_framework::{draw_heatmap_plot, HeatmapPlotConfig};

/// Generates the annotated correlation heatmap over the numeric columns
///
/// Pairwise-complete correlations: each cell uses the rows where both of its
/// columns carry a value. Cells with fewer than two such rows, or with a
/// constant column, render gray with an "n/a" annotation.
///
/// # Arguments
/// * `student_data` - Parsed student rows
/// * `presence` - Column presence flags from the header mapping
/// * `root_name` - Base filename for output
/// * `main_title` - Title line drawn at the top left of the canvas
pub fn plot_correlation_heatmap(
    student_data: &[StudentRowData],
    presence: &ColumnPresence,
    root_name: &str,
    main_title: &str,
) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{}_CorrelationHeatmap.png", root_name);
    let chart_name = "Correlation Heatmap";

    let columns = NumericColumn::present_columns(presence);
    let labels: Vec<String> = columns
        .iter()
        .map(|column| column.label().to_string())
        .collect();
    let column_data: Vec<Vec<Option<f64>>> = columns
        .iter()
        .map(|&column| column_options(student_data, column))
        .collect();

    draw_heatmap_plot(&output_file, main_title, chart_name, move || {
        if labels.len() < 2 {
            return None;
        }
        let matrix = correlation_matrix(&column_data);
        Some(HeatmapPlotConfig {
            title: "Correlation Heatmap".to_string(),
            correlation: (labels, matrix),
        })
    })
}

// src/plot_functions/plot_correlation_heatmap.rs

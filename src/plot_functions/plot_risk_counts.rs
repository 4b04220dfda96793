// src/plot_functions/plot_risk_counts.rs

use std::error::Error;

use crate::data_analysis::descriptive::risk_level_counts;
use crate::data_input::student_data::StudentRowData;
use crate::plot_framework::{draw_count_plot, CountPlotConfig};

/// Generates the risk-level count plot, one colored bar per label
pub fn plot_risk_counts(
    student_data: &[StudentRowData],
    root_name: &str,
    main_title: &str,
) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{}_RiskLevelCounts.png", root_name);
    let chart_name = "Risk Level Distribution";

    let (categories, _missing) = risk_level_counts(student_data);

    draw_count_plot(&output_file, main_title, chart_name, move || {
        if categories.is_empty() {
            return None;
        }
        Some(CountPlotConfig {
            title: "Risk Level Distribution".to_string(),
            x_label: "Risk Level".to_string(),
            categories,
        })
    })
}

// src/plot_functions/plot_risk_counts.rs

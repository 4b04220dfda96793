// src/plot_functions/plot_engagement_distribution.rs

use std::error::Error;

use crate::constants::{COLOR_ENGAGEMENT_HIST, HISTOGRAM_BIN_COUNT, KDE_SAMPLE_POINTS};
use crate::data_analysis::descriptive::column_values;
use crate::data_analysis::histogram::compute_histogram;
use crate::data_analysis::kde::kde_count_curve;
use crate::data_input::student_data::{NumericColumn, StudentRowData};
use crate::plot_framework::{draw_distribution_plot, DistributionPlotConfig};

/// Generates the engagement score histogram with its smoothed density overlay (green)
pub fn plot_engagement_distribution(
    student_data: &[StudentRowData],
    root_name: &str,
    main_title: &str,
) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{}_EngagementScoreDistribution.png", root_name);
    let chart_name = "Engagement Score Distribution";

    let values = column_values(student_data, NumericColumn::EngagementScore);

    draw_distribution_plot(&output_file, main_title, chart_name, move || {
        let histogram = compute_histogram(&values, HISTOGRAM_BIN_COUNT)?;
        let kde_curve = kde_count_curve(&values, histogram.bin_width, KDE_SAMPLE_POINTS);
        Some(DistributionPlotConfig {
            title: "Engagement Score Distribution".to_string(),
            x_label: "Engagement Score".to_string(),
            histogram,
            kde_curve,
            bar_color: *COLOR_ENGAGEMENT_HIST,
        })
    })
}

// src/plot_functions/plot_engagement_distribution.rs

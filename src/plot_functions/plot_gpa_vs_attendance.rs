// src/plot_functions/plot_gpa_vs_attendance.rs

use std::error::Error;

use crate::data_analysis::descriptive::scatter_groups;
use crate::data_input::student_data::StudentRowData;
use crate::plot_framework::{draw_scatter_plot, risk_group_color, ScatterGroup, ScatterPlotConfig};

/// Generates the attendance vs GPA scatter plot, point colors keyed by risk level
pub fn plot_gpa_vs_attendance(
    student_data: &[StudentRowData],
    root_name: &str,
    main_title: &str,
) -> Result<(), Box<dyn Error>> {
    let output_file = format!("{}_AttendanceVsGpa.png", root_name);
    let chart_name = "Attendance Rate vs GPA";

    let groups = scatter_groups(student_data);

    draw_scatter_plot(&output_file, main_title, chart_name, move || {
        if groups.is_empty() {
            return None;
        }
        let group_count = groups.len();
        let plot_groups: Vec<ScatterGroup> = groups
            .into_iter()
            .enumerate()
            .map(|(index, (label, points))| ScatterGroup {
                label,
                points,
                color: risk_group_color(index, group_count),
            })
            .collect();
        Some(ScatterPlotConfig {
            title: "Attendance Rate vs GPA (by Risk Level)".to_string(),
            x_label: "Attendance Rate".to_string(),
            y_label: "GPA".to_string(),
            groups: plot_groups,
        })
    })
}

// src/plot_functions/plot_gpa_vs_attendance.rs

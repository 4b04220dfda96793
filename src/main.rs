// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use student_csv_render::crate_version;
use student_csv_render::data_analysis::descriptive::{
    column_values, department_risk_breakdown, risk_level_counts, summarize,
};
use student_csv_render::data_input::csv_parser::parse_students_file;
use student_csv_render::data_input::export_metadata::parse_export_metadata;
use student_csv_render::data_input::student_data::NumericColumn;
use student_csv_render::plot_functions::plot_attendance_distribution::plot_attendance_distribution;
use student_csv_render::plot_functions::plot_correlation_heatmap::plot_correlation_heatmap;
use student_csv_render::plot_functions::plot_engagement_distribution::plot_engagement_distribution;
use student_csv_render::plot_functions::plot_gpa_distribution::plot_gpa_distribution;
use student_csv_render::plot_functions::plot_gpa_vs_attendance::plot_gpa_vs_attendance;
use student_csv_render::plot_functions::plot_risk_counts::plot_risk_counts;
use student_csv_render::risk_levels::{risk_level_name, RISK_LEVEL_COUNT};

fn main() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input_file.csv>", args[0]);
        std::process::exit(1);
    }
    let input_file = &args[1];
    let input_path = Path::new(input_file);
    let root_name = input_path.file_stem().unwrap_or_default().to_string_lossy();

    println!("student_csv_render v{}", crate_version());

    // --- Data Reading and Storage ---
    let (all_student_data, presence, header_metadata) = parse_students_file(input_path)?;

    if all_student_data.is_empty() {
        return Err("No valid data rows read, cannot generate plots.".into());
    }

    let export_info = parse_export_metadata(&header_metadata);
    let main_title = format!(
        "{} ({} students){}",
        root_name,
        all_student_data.len(),
        export_info.format_for_title()
    );

    // --- Descriptive Statistics ---
    println!("\n--- Descriptive Statistics ---");
    let numeric_columns = NumericColumn::present_columns(&presence);
    if numeric_columns.is_empty() {
        println!("  No numeric columns found.");
    }
    for column in &numeric_columns {
        let values = column_values(&all_student_data, *column);
        match summarize(&values) {
            Some(summary) => println!(
                "  {}: count={}, mean={:.3}, std={:.3}, min={:.3}, max={:.3}",
                column.label(),
                summary.count,
                summary.mean,
                summary.std_dev,
                summary.min,
                summary.max
            ),
            None => println!("  {}: no valid values", column.label()),
        }
    }

    // --- Risk Level Summary ---
    if presence.risk_level {
        println!("\n--- Risk Level Summary ---");
        let (risk_counts, missing_risk) = risk_level_counts(&all_student_data);
        for (label, count) in &risk_counts {
            println!("  {}: {}", label, count);
        }
        if missing_risk > 0 {
            println!("  (no label): {}", missing_risk);
        }
    }

    // --- Department Risk Breakdown ---
    if presence.department && presence.risk_level {
        println!("\n--- Department Risk Breakdown ---");
        for breakdown in department_risk_breakdown(&all_student_data) {
            let mut parts: Vec<String> = (0..RISK_LEVEL_COUNT)
                .map(|rank| format!("{} {}", breakdown.risk_counts[rank], risk_level_name(rank)))
                .collect();
            if breakdown.other > 0 {
                parts.push(format!("{} other", breakdown.other));
            }
            println!(
                "  {}: {} students ({})",
                breakdown.department,
                breakdown.total,
                parts.join(", ")
            );
        }
    }

    // --- Generate Correlation Heatmap ---
    println!("\n--- Generating Correlation Heatmap ---");
    if presence.numeric_column_count() >= 2 {
        plot_correlation_heatmap(&all_student_data, &presence, &root_name, &main_title)?;
    } else {
        println!("  Skipping Correlation Heatmap: Fewer than two numeric columns found.");
    }

    // --- Generate GPA Distribution Plot ---
    println!("\n--- Generating GPA Distribution Plot ---");
    if presence.gpa {
        plot_gpa_distribution(&all_student_data, &root_name, &main_title)?;
    } else {
        println!("  Skipping GPA Distribution Plot: 'gpa' column not found.");
    }

    // --- Generate Attendance Rate Distribution Plot ---
    println!("\n--- Generating Attendance Rate Distribution Plot ---");
    if presence.attendance_rate {
        plot_attendance_distribution(&all_student_data, &root_name, &main_title)?;
    } else {
        println!("  Skipping Attendance Rate Distribution Plot: 'attendance_rate' column not found.");
    }

    // --- Generate Engagement Score Distribution Plot ---
    println!("\n--- Generating Engagement Score Distribution Plot ---");
    if presence.engagement_score {
        plot_engagement_distribution(&all_student_data, &root_name, &main_title)?;
    } else {
        println!("  Skipping Engagement Score Distribution Plot: 'engagement_score' column not found.");
    }

    // --- Generate Risk Level Count Plot ---
    println!("\n--- Generating Risk Level Count Plot ---");
    if presence.risk_level {
        plot_risk_counts(&all_student_data, &root_name, &main_title)?;
    } else {
        println!("  Skipping Risk Level Count Plot: 'risk_level' column not found.");
    }

    // --- Generate Attendance vs GPA Scatter Plot ---
    println!("\n--- Generating Attendance vs GPA Scatter Plot ---");
    if presence.attendance_rate && presence.gpa && presence.risk_level {
        plot_gpa_vs_attendance(&all_student_data, &root_name, &main_title)?;
    } else {
        println!("  Skipping Attendance vs GPA Scatter Plot: Requires 'attendance_rate', 'gpa', and 'risk_level' columns.");
    }

    Ok(())
}

// src/plot_functions/mod.rs

pub mod plot_correlation_heatmap;
pub mod plot_gpa_distribution;
pub mod plot_attendance_distribution;
pub mod plot_engagement_distribution;
pub mod plot_risk_counts;
pub mod plot_gpa_vs_attendance;

// src/plot_functions/mod.rs

// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{GREEN, LIGHTBLUE, ORANGE};
use plotters::style::RGBColor;

// Plot dimensions per chart type.
pub const HEATMAP_PLOT_WIDTH: u32 = 1000;
pub const HEATMAP_PLOT_HEIGHT: u32 = 800;
pub const DISTRIBUTION_PLOT_WIDTH: u32 = 800;
pub const DISTRIBUTION_PLOT_HEIGHT: u32 = 500;
pub const COUNT_PLOT_WIDTH: u32 = 600;
pub const COUNT_PLOT_HEIGHT: u32 = 500;
pub const SCATTER_PLOT_WIDTH: u32 = 800;
pub const SCATTER_PLOT_HEIGHT: u32 = 600;

// Distribution binning and smoothing.
pub const HISTOGRAM_BIN_COUNT: usize = 20;
pub const KDE_SAMPLE_POINTS: usize = 200;

// Font sizes for all text elements, consumed via font_config.
pub const FONT_SIZE_MAIN_TITLE: i32 = 18;
pub const FONT_SIZE_CHART_TITLE: i32 = 24;
pub const FONT_SIZE_AXIS_LABEL: i32 = 15;
pub const FONT_SIZE_LEGEND: i32 = 15;
pub const FONT_SIZE_MESSAGE: i32 = 20;
pub const FONT_SIZE_ANNOTATION: i32 = 14;

// --- Plot Color Assignments ---
pub const COLOR_GPA_HIST: &RGBColor = &LIGHTBLUE;
pub const COLOR_ATTENDANCE_HIST: &RGBColor = &ORANGE;
pub const COLOR_ENGAGEMENT_HIST: &RGBColor = &GREEN;

// Heatmap cells with no defined correlation are drawn light gray.
pub const HEATMAP_UNDEFINED_CELL_COLOR: RGBColor = RGBColor(224, 224, 224);

// Opacity of histogram bar fills; bar outlines stay fully opaque.
pub const HISTOGRAM_BAR_ALPHA: f64 = 0.75;
// Opacity of scatter markers.
pub const SCATTER_POINT_ALPHA: f64 = 0.7;
pub const SCATTER_POINT_SIZE: i32 = 4;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;

// Minimum span when normalizing heatmap cell colors, guards the division
// when every defined correlation coincides.
pub const HEATMAP_MIN_COLOR_SPAN: f64 = 1e-9;

// src/constants.rs

// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::Circle;
use plotters::element::PathElement;
use plotters::element::Rectangle;
use plotters::element::Text;
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use std::error::Error;

use crate::constants::{
    COUNT_PLOT_HEIGHT, COUNT_PLOT_WIDTH, DISTRIBUTION_PLOT_HEIGHT, DISTRIBUTION_PLOT_WIDTH,
    FONT_SIZE_AXIS_LABEL, FONT_SIZE_CHART_TITLE, FONT_SIZE_LEGEND, FONT_SIZE_MAIN_TITLE,
    FONT_SIZE_MESSAGE, HEATMAP_MIN_COLOR_SPAN, HEATMAP_PLOT_HEIGHT, HEATMAP_PLOT_WIDTH,
    HEATMAP_UNDEFINED_CELL_COLOR, HISTOGRAM_BAR_ALPHA, LINE_WIDTH_PLOT, SCATTER_PLOT_HEIGHT,
    SCATTER_PLOT_WIDTH, SCATTER_POINT_ALPHA, SCATTER_POINT_SIZE,
};
use crate::data_analysis::histogram::HistogramData;
use crate::font_config::{FONT_TUPLE_ANNOTATION, FONT_TUPLE_CHART_TITLE};
use crate::types::{CategoryCounts, CorrelationData, KdeCurve};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    chart_name: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Constants for text rendering
    const CHAR_WIDTH_RATIO: f32 = 0.6; // Approximate character width relative to font size
    const LINE_HEIGHT_SPACING: i32 = 4; // Additional spacing between lines

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (
        (x_range.end - x_range.start) as u32,
        (y_range.end - y_range.start) as u32,
    );
    let message = format!("{chart_name} Data Unavailable:\n{reason}");

    // Estimate text dimensions for better centering
    let estimated_char_width = (FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;
    let estimated_line_height = FONT_SIZE_MESSAGE + LINE_HEIGHT_SPACING;

    // Find the longest line to estimate width
    let lines: Vec<&str> = message.split('\n').collect();
    let max_line_length = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    let estimated_text_width = max_line_length.saturating_mul(estimated_char_width as usize) as i32;
    let estimated_text_height = lines.len().saturating_mul(estimated_line_height as usize) as i32;

    // Calculate center position with better offset estimation
    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - estimated_text_height / 2;

    let text_style = ("sans-serif", FONT_SIZE_MESSAGE).into_font().color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Clone)]
pub struct DistributionPlotConfig {
    pub title: String,
    pub x_label: String,
    pub histogram: HistogramData,
    pub kde_curve: KdeCurve,
    pub bar_color: RGBColor,
}

#[derive(Clone)]
pub struct HeatmapPlotConfig {
    pub title: String,
    pub correlation: CorrelationData,
}

#[derive(Clone)]
pub struct CountPlotConfig {
    pub title: String,
    pub x_label: String,
    pub categories: CategoryCounts,
}

#[derive(Clone)]
pub struct ScatterGroup {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
}

#[derive(Clone)]
pub struct ScatterPlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub groups: Vec<ScatterGroup>,
}

/// Map a correlation value onto the diverging blue-white-red scale,
/// normalized over `min_val..max_val` (the finite cells of the matrix).
fn correlation_cell_color(value: f64, min_val: f64, max_val: f64) -> RGBColor {
    if !value.is_finite() || !min_val.is_finite() || !max_val.is_finite() {
        return HEATMAP_UNDEFINED_CELL_COLOR;
    }

    // Ensure span is non-zero to avoid division by zero
    let span = (max_val - min_val).abs().max(HEATMAP_MIN_COLOR_SPAN);
    let clamped = value.clamp(min_val, max_val);
    let t = ((clamped - min_val) / span).clamp(0.0, 1.0);

    // The gradient runs red to blue; reverse it so high correlations read warm
    let color = colorous::RED_BLUE.eval_continuous(1.0 - t);
    RGBColor(color.r, color.g, color.b)
}

/// Marker color for risk group `index` of `group_count`, sampled at evenly
/// spaced interior points of the same diverging scale the heatmap uses.
pub fn risk_group_color(index: usize, group_count: usize) -> RGBColor {
    let t = (index + 1) as f64 / (group_count + 1) as f64;
    let color = colorous::RED_BLUE.eval_continuous(1.0 - t);
    RGBColor(color.r, color.g, color.b)
}

/// Bar color for category `index`, cycling the eight-color qualitative set.
pub fn category_color(index: usize) -> RGBColor {
    let color = colorous::SET2[index % colorous::SET2.len()];
    RGBColor(color.r, color.g, color.b)
}

/// Black or white, whichever stays readable on the given cell fill.
fn annotation_text_color(fill: &RGBColor) -> RGBColor {
    let luminance = 0.299 * fill.0 as f64 + 0.587 * fill.1 as f64 + 0.114 * fill.2 as f64;
    if luminance < 140.0 {
        WHITE
    } else {
        BLACK
    }
}

fn draw_distribution_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &DistributionPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let hist = &plot_config.histogram;

    // Axis ranges cover the bars plus the KDE grid, which extends past them
    let mut x_min = hist.edges[0];
    let mut x_max = hist.edges[hist.edges.len() - 1];
    if let (Some(&(first_x, _)), Some(&(last_x, _))) =
        (plot_config.kde_curve.first(), plot_config.kde_curve.last())
    {
        x_min = x_min.min(first_x);
        x_max = x_max.max(last_x);
    }

    let kde_peak = plot_config
        .kde_curve
        .iter()
        .map(|&(_, y)| y)
        .fold(0.0_f64, f64::max);
    let y_max = (hist.max_count() as f64).max(kde_peak) * 1.05;

    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc("Count")
        .x_labels(10)
        .y_labels(10)
        .y_label_formatter(&|y| format!("{:.0}", y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    // Bars: translucent fill plus a full-opacity outline in the same color
    let fill = plot_config.bar_color.mix(HISTOGRAM_BAR_ALPHA);
    for (i, &count) in hist.counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let x0 = hist.edges[i];
        let x1 = hist.edges[i + 1];
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, count as f64)],
            fill.filled(),
        )))?;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, count as f64)],
            plot_config.bar_color.stroke_width(1),
        )))?;
    }

    if !plot_config.kde_curve.is_empty() {
        chart.draw_series(LineSeries::new(
            plot_config.kde_curve.iter().cloned(),
            plot_config.bar_color.stroke_width(LINE_WIDTH_PLOT),
        ))?;
    }

    Ok(())
}

/// Creates a single histogram-with-KDE chart image.
pub fn draw_distribution_plot<F>(
    output_filename: &str,
    root_name: &str,
    chart_name: &str,
    get_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnOnce() -> Option<DistributionPlotConfig>,
{
    let root_area = BitMapBackend::new(
        output_filename,
        (DISTRIBUTION_PLOT_WIDTH, DISTRIBUTION_PLOT_HEIGHT),
    )
    .into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);

    match get_plot_data() {
        Some(plot_config) => {
            let has_data = plot_config.histogram.max_count() > 0
                && plot_config.histogram.edges.len() == plot_config.histogram.counts.len() + 1;
            if has_data {
                draw_distribution_chart(&margined_root_area, &plot_config)?;
                root_area.present()?;
                println!("  Plot saved as '{}'.", output_filename);
            } else {
                finish_with_placeholder(
                    &root_area,
                    &margined_root_area,
                    output_filename,
                    chart_name,
                    "No data points",
                )?;
            }
        }
        None => {
            finish_with_placeholder(
                &root_area,
                &margined_root_area,
                output_filename,
                chart_name,
                "Calculation/Data Extraction Failed",
            )?;
        }
    }
    Ok(())
}

fn draw_heatmap_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &HeatmapPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let (labels, matrix) = &plot_config.correlation;
    let n = labels.len() as f64;

    // Finite cells drive the color normalization; undefined cells stay gray
    let finite_values: Array1<f64> = matrix.iter().cloned().filter(|v| v.is_finite()).collect();
    let color_min = *finite_values.min()?;
    let color_max = *finite_values.max()?;

    // Extra room left of x=0 for row labels and below y=0 for column labels.
    // No mesh is drawn; the cell grid and label texts carry the whole chart.
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(5)
        .x_label_area_size(10)
        .y_label_area_size(10)
        .build_cartesian_2d(-1.6..(n + 0.1), -0.9..(n + 0.1))?;

    for row in 0..labels.len() {
        for col in 0..labels.len() {
            let value = matrix[[row, col]];
            let cell_color = correlation_cell_color(value, color_min, color_max);

            // First matrix row at the top, so flip the y placement
            let x0 = col as f64;
            let x1 = x0 + 1.0;
            let y0 = n - 1.0 - row as f64;
            let y1 = y0 + 1.0;

            chart.draw_series(std::iter::once(Rectangle::new(
                [(x0, y0), (x1, y1)],
                cell_color.filled(),
            )))?;
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x0, y0), (x1, y1)],
                WHITE.stroke_width(1),
            )))?;

            let annotation = if value.is_finite() {
                format!("{:.2}", value)
            } else {
                "n/a".to_string()
            };
            let text_color = annotation_text_color(&cell_color);
            let annotation_style = FONT_TUPLE_ANNOTATION
                .into_font()
                .color(&text_color)
                .pos(Pos::new(HPos::Center, VPos::Center));
            chart.draw_series(std::iter::once(Text::new(
                annotation,
                (x0 + 0.5, y0 + 0.5),
                annotation_style,
            )))?;
        }
    }

    // Row labels left of the grid, column labels beneath it
    for (i, label) in labels.iter().enumerate() {
        let row_style = FONT_TUPLE_ANNOTATION
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Right, VPos::Center));
        chart.draw_series(std::iter::once(Text::new(
            label.clone(),
            (-0.1, n - 0.5 - i as f64),
            row_style,
        )))?;

        let column_style = FONT_TUPLE_ANNOTATION
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top));
        chart.draw_series(std::iter::once(Text::new(
            label.clone(),
            (i as f64 + 0.5, -0.15),
            column_style,
        )))?;
    }

    Ok(())
}

/// Creates an annotated correlation-matrix heatmap image.
pub fn draw_heatmap_plot<F>(
    output_filename: &str,
    root_name: &str,
    chart_name: &str,
    get_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnOnce() -> Option<HeatmapPlotConfig>,
{
    let root_area = BitMapBackend::new(output_filename, (HEATMAP_PLOT_WIDTH, HEATMAP_PLOT_HEIGHT))
        .into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);

    match get_plot_data() {
        Some(plot_config) => {
            let (labels, matrix) = &plot_config.correlation;
            let shape_ok = labels.len() >= 2
                && matrix.nrows() == labels.len()
                && matrix.ncols() == labels.len();
            let any_defined = matrix.iter().any(|v| v.is_finite());
            if shape_ok && any_defined {
                draw_heatmap_chart(&margined_root_area, &plot_config)?;
                root_area.present()?;
                println!("  Plot saved as '{}'.", output_filename);
            } else {
                let reason = if shape_ok {
                    "No defined correlations"
                } else {
                    "Fewer than two numeric columns"
                };
                finish_with_placeholder(
                    &root_area,
                    &margined_root_area,
                    output_filename,
                    chart_name,
                    reason,
                )?;
            }
        }
        None => {
            finish_with_placeholder(
                &root_area,
                &margined_root_area,
                output_filename,
                chart_name,
                "Calculation/Data Extraction Failed",
            )?;
        }
    }
    Ok(())
}

fn draw_count_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &CountPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let categories = &plot_config.categories;
    let k = categories.len() as f64;
    let max_count = categories.iter().map(|(_, c)| *c).max().unwrap_or(0) as f64;

    // The y range dips below zero to leave room for category names under the bars
    let y_top = max_count * 1.1;
    let y_bottom = -(y_top * 0.16);
    let x_left = -0.1;
    let x_right = k + 0.1;

    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(x_left..x_right, y_bottom..y_top)?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc("Count")
        .disable_x_mesh()
        .x_labels(0)
        .y_labels(10)
        .y_label_formatter(&|y| {
            if *y < 0.0 {
                String::new()
            } else {
                format!("{:.0}", y)
            }
        })
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    for (i, (label, count)) in categories.iter().enumerate() {
        let bar_color = category_color(i);
        let x0 = i as f64 + 0.1;
        let x1 = i as f64 + 0.9;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, *count as f64)],
            bar_color.filled(),
        )))?;

        let label_style = ("sans-serif", FONT_SIZE_AXIS_LABEL)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Top));
        chart.draw_series(std::iter::once(Text::new(
            label.clone(),
            (i as f64 + 0.5, -(y_top * 0.02)),
            label_style,
        )))?;
    }

    // Baseline under the bars
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x_left, 0.0), (x_right, 0.0)],
        BLACK.stroke_width(1),
    )))?;

    Ok(())
}

/// Creates a categorical count-plot image with one colored bar per label.
pub fn draw_count_plot<F>(
    output_filename: &str,
    root_name: &str,
    chart_name: &str,
    get_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnOnce() -> Option<CountPlotConfig>,
{
    let root_area =
        BitMapBackend::new(output_filename, (COUNT_PLOT_WIDTH, COUNT_PLOT_HEIGHT))
            .into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);

    match get_plot_data() {
        Some(plot_config) => {
            let has_data = plot_config
                .categories
                .iter()
                .any(|(_, count)| *count > 0);
            if has_data {
                draw_count_chart(&margined_root_area, &plot_config)?;
                root_area.present()?;
                println!("  Plot saved as '{}'.", output_filename);
            } else {
                finish_with_placeholder(
                    &root_area,
                    &margined_root_area,
                    output_filename,
                    chart_name,
                    "No data points",
                )?;
            }
        }
        None => {
            finish_with_placeholder(
                &root_area,
                &margined_root_area,
                output_filename,
                chart_name,
                "Calculation/Data Extraction Failed",
            )?;
        }
    }
    Ok(())
}

fn draw_scatter_chart(
    area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    plot_config: &ScatterPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for group in &plot_config.groups {
        for &(x, y) in &group.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    let (x_lo, x_hi) = calculate_range(x_min, x_max);
    let (y_lo, y_hi) = calculate_range(y_min, y_max);

    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
        .margin(5)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
        .draw()?;

    let mut legend_series_count = 0;
    for group in &plot_config.groups {
        if group.points.is_empty() {
            continue;
        }
        let marker_color = group.color.mix(SCATTER_POINT_ALPHA);
        let legend_color = group.color;
        let series = chart.draw_series(
            group
                .points
                .iter()
                .map(|&(x, y)| Circle::new((x, y), SCATTER_POINT_SIZE, marker_color.filled())),
        )?;
        if !group.label.is_empty() {
            series.label(&group.label).legend(move |(x, y)| {
                Circle::new((x + 10, y), SCATTER_POINT_SIZE, legend_color.filled())
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", FONT_SIZE_LEGEND))
            .draw()?;
    }

    Ok(())
}

/// Creates a grouped scatter-plot image with a legend per group.
pub fn draw_scatter_plot<F>(
    output_filename: &str,
    root_name: &str,
    chart_name: &str,
    get_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnOnce() -> Option<ScatterPlotConfig>,
{
    let root_area =
        BitMapBackend::new(output_filename, (SCATTER_PLOT_WIDTH, SCATTER_PLOT_HEIGHT))
            .into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        ("sans-serif", FONT_SIZE_MAIN_TITLE)
            .into_font()
            .color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);

    match get_plot_data() {
        Some(plot_config) => {
            let has_data = plot_config
                .groups
                .iter()
                .any(|group| !group.points.is_empty());
            if has_data {
                draw_scatter_chart(&margined_root_area, &plot_config)?;
                root_area.present()?;
                println!("  Plot saved as '{}'.", output_filename);
            } else {
                finish_with_placeholder(
                    &root_area,
                    &margined_root_area,
                    output_filename,
                    chart_name,
                    "No data points",
                )?;
            }
        }
        None => {
            finish_with_placeholder(
                &root_area,
                &margined_root_area,
                output_filename,
                chart_name,
                "Calculation/Data Extraction Failed",
            )?;
        }
    }
    Ok(())
}

/// Renders the placeholder message, writes the file, and reports the skip.
fn finish_with_placeholder(
    root_area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    margined_area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
    output_filename: &str,
    chart_name: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    draw_unavailable_message(margined_area, chart_name, reason)?;
    root_area.present()?;
    println!(
        "  Skipping '{}' chart: {}, only a placeholder message shown.",
        output_filename, reason
    );
    Ok(())
}

// src/plot_framework.rs

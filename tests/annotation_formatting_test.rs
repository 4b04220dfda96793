// tests/annotation_formatting_test.rs

/// Replicates the heatmap cell annotation logic from plot_framework.rs:
/// finite correlations print with two decimals, undefined cells print "n/a".
fn format_cell_annotation(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else {
        "n/a".to_string()
    }
}

/// Replicates the annotation text color choice from plot_framework.rs:
/// white text on dark cell fills, black on light ones.
fn pick_annotation_text_color(r: u8, g: u8, b: u8) -> &'static str {
    let luminance = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
    if luminance < 140.0 {
        "white"
    } else {
        "black"
    }
}

/// Replicates the count plot Y-axis formatter from plot_framework.rs. The
/// axis range dips below zero to make room for category names, and those
/// negative positions must not get tick labels.
fn format_count_axis_label(y: f64) -> String {
    if y < 0.0 {
        String::new()
    } else {
        format!("{:.0}", y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_annotations_use_two_decimals() {
        assert_eq!(format_cell_annotation(1.0), "1.00");
        assert_eq!(format_cell_annotation(-1.0), "-1.00");
        assert_eq!(format_cell_annotation(0.82345), "0.82");
        assert_eq!(format_cell_annotation(0.999), "1.00");
        // Tiny negatives keep their sign, same as the usual heatmap rendering
        assert_eq!(format_cell_annotation(-0.0049), "-0.00");
    }

    #[test]
    fn test_undefined_correlations_annotate_as_na() {
        assert_eq!(format_cell_annotation(f64::NAN), "n/a");
        assert_eq!(format_cell_annotation(f64::INFINITY), "n/a");
        assert_eq!(format_cell_annotation(f64::NEG_INFINITY), "n/a");
    }

    #[test]
    fn test_annotation_text_color_tracks_cell_luminance() {
        // Endpoints of the diverging scale are dark, so they take white text
        assert_eq!(pick_annotation_text_color(5, 48, 97), "white");
        assert_eq!(pick_annotation_text_color(103, 0, 31), "white");

        // The pale middle of the scale and the undefined-cell gray take black
        assert_eq!(pick_annotation_text_color(247, 247, 247), "black");
        assert_eq!(pick_annotation_text_color(224, 224, 224), "black");
        assert_eq!(pick_annotation_text_color(255, 255, 255), "black");
    }

    #[test]
    fn test_count_axis_hides_labels_below_zero() {
        assert_eq!(format_count_axis_label(-2.0), "");
        assert_eq!(format_count_axis_label(-0.5), "");

        assert_eq!(format_count_axis_label(0.0), "0");
        assert_eq!(format_count_axis_label(12.0), "12");
        assert_eq!(format_count_axis_label(12.6), "13");
    }
}

// src/data_analysis/descriptive.rs

use crate::data_input::student_data::{NumericColumn, StudentRowData};
use crate::risk_levels::{canonical_label, risk_level_name, risk_rank, RISK_LEVEL_COUNT, RISK_LEVEL_NAMES};
use crate::types::CategoryCounts;

/// Summary statistics for one numeric column over its present values.
#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator). NaN below two values.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Per-department risk tallies for the console breakdown.
#[derive(Debug, Clone)]
pub struct DepartmentBreakdown {
    pub department: String,
    /// Counts per canonical risk level, indexed by rank.
    pub risk_counts: [usize; RISK_LEVEL_COUNT],
    /// Rows whose risk label is missing or outside the canonical set.
    pub other: usize,
    pub total: usize,
}

/// Values of one numeric column across all rows, missing cells dropped.
pub fn column_values(rows: &[StudentRowData], column: NumericColumn) -> Vec<f64> {
    rows.iter().filter_map(|row| column.value_in(row)).collect()
}

/// One entry per row, missing cells kept as `None` so pairwise-complete
/// consumers can line columns up row by row.
pub fn column_options(rows: &[StudentRowData], column: NumericColumn) -> Vec<Option<f64>> {
    rows.iter().map(|row| column.value_in(row)).collect()
}

pub fn summarize(values: &[f64]) -> Option<ColumnSummary> {
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let n = count as f64;
    let mean = values.iter().sum::<f64>() / n;
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let std_dev = if count > 1 {
        (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
    } else {
        f64::NAN
    };

    Some(ColumnSummary {
        count,
        mean,
        std_dev,
        min,
        max,
    })
}

/// Counts rows per risk label. Canonical levels come first in severity order
/// (zero-count levels omitted), any other labels follow in first-appearance
/// order. The second return value counts rows with no risk label at all.
pub fn risk_level_counts(rows: &[StudentRowData]) -> (CategoryCounts, usize) {
    let mut canonical_counts = [0usize; RISK_LEVEL_COUNT];
    let mut unknown_counts: CategoryCounts = Vec::new();
    let mut missing = 0usize;

    for row in rows {
        match &row.risk_level {
            Some(label) => match risk_rank(label) {
                Some(rank) => canonical_counts[rank] += 1,
                None => {
                    let display = canonical_label(label);
                    match unknown_counts.iter().position(|(l, _)| *l == display) {
                        Some(idx) => unknown_counts[idx].1 += 1,
                        None => unknown_counts.push((display, 1)),
                    }
                }
            },
            None => missing += 1,
        }
    }

    let mut ordered: CategoryCounts = Vec::new();
    for (rank, &count) in canonical_counts.iter().enumerate() {
        if count > 0 {
            ordered.push((risk_level_name(rank).to_string(), count));
        }
    }
    ordered.extend(unknown_counts);

    (ordered, missing)
}

/// Scatter observations grouped by risk label, canonical levels in severity
/// order first and other labels appended as they appear. Rows missing either
/// coordinate or the label are left out, matching how a hue-grouped scatter
/// treats incomplete rows.
pub fn scatter_groups(rows: &[StudentRowData]) -> Vec<(String, Vec<(f64, f64)>)> {
    let mut groups: Vec<(String, Vec<(f64, f64)>)> = RISK_LEVEL_NAMES
        .iter()
        .map(|name| (name.to_string(), Vec::new()))
        .collect();

    for row in rows {
        let point = match (row.attendance_rate, row.gpa) {
            (Some(attendance_rate), Some(gpa)) => (attendance_rate, gpa),
            _ => continue,
        };
        let label = match &row.risk_level {
            Some(label) => canonical_label(label),
            None => continue,
        };
        match groups.iter().position(|(name, _)| *name == label) {
            Some(idx) => groups[idx].1.push(point),
            None => groups.push((label, vec![point])),
        }
    }

    groups.retain(|(_, points)| !points.is_empty());
    groups
}

/// Builds per-department risk tallies, largest department first. Rows with no
/// department are grouped under "(unspecified)".
pub fn department_risk_breakdown(rows: &[StudentRowData]) -> Vec<DepartmentBreakdown> {
    let mut breakdowns: Vec<DepartmentBreakdown> = Vec::new();

    for row in rows {
        let department = row
            .department
            .clone()
            .unwrap_or_else(|| "(unspecified)".to_string());

        let idx = match breakdowns.iter().position(|b| b.department == department) {
            Some(idx) => idx,
            None => {
                breakdowns.push(DepartmentBreakdown {
                    department,
                    risk_counts: [0; RISK_LEVEL_COUNT],
                    other: 0,
                    total: 0,
                });
                breakdowns.len() - 1
            }
        };

        let entry = &mut breakdowns[idx];
        match row.risk_level.as_deref().and_then(risk_rank) {
            Some(rank) => entry.risk_counts[rank] += 1,
            None => entry.other += 1,
        }
        entry.total += 1;
    }

    breakdowns.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.department.cmp(&b.department))
    });
    breakdowns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_with_risk(department: Option<&str>, risk: Option<&str>) -> StudentRowData {
        let mut row = StudentRowData::default();
        row.department = department.map(|d| d.to_string());
        row.risk_level = risk.map(|r| r.to_string());
        row
    }

    #[test]
    fn test_summarize_known_values() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let summary = summarize(&values).unwrap();

        assert_eq!(summary.count, 8);
        assert!((summary.mean - 5.0).abs() < 1e-12);
        // Sample variance 32/7
        assert!((summary.std_dev - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
        assert!((summary.min - 2.0).abs() < 1e-12);
        assert!((summary.max - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_summarize_single_value_has_undefined_std() {
        let summary = summarize(&[3.5]).unwrap();
        assert_eq!(summary.count, 1);
        assert!((summary.mean - 3.5).abs() < 1e-12);
        assert!(summary.std_dev.is_nan());
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_risk_level_counts_ordering_and_case_merge() {
        let rows = vec![
            row_with_risk(None, Some("high")),
            row_with_risk(None, Some("LOW")),
            row_with_risk(None, Some("watchlist")),
            row_with_risk(None, Some("low")),
            row_with_risk(None, None),
            row_with_risk(None, Some("High")),
            row_with_risk(None, Some("watchlist")),
        ];

        let (counts, missing) = risk_level_counts(&rows);

        assert_eq!(
            counts,
            vec![
                ("low".to_string(), 2),
                ("high".to_string(), 2),
                ("watchlist".to_string(), 2),
            ]
        );
        assert_eq!(missing, 1);
    }

    #[test]
    fn test_risk_level_counts_omits_absent_levels() {
        let rows = vec![
            row_with_risk(None, Some("medium")),
            row_with_risk(None, Some("medium")),
        ];
        let (counts, missing) = risk_level_counts(&rows);
        assert_eq!(counts, vec![("medium".to_string(), 2)]);
        assert_eq!(missing, 0);
    }

    #[test]
    fn test_scatter_groups_order_and_skipping() {
        let mut complete_low = row_with_risk(None, Some("Low"));
        complete_low.attendance_rate = Some(90.0);
        complete_low.gpa = Some(3.6);

        let mut complete_high = row_with_risk(None, Some("high"));
        complete_high.attendance_rate = Some(55.0);
        complete_high.gpa = Some(1.9);

        let mut complete_other = row_with_risk(None, Some("watchlist"));
        complete_other.attendance_rate = Some(70.0);
        complete_other.gpa = Some(2.8);

        let mut missing_gpa = row_with_risk(None, Some("low"));
        missing_gpa.attendance_rate = Some(80.0);

        let missing_label = {
            let mut row = StudentRowData::default();
            row.attendance_rate = Some(60.0);
            row.gpa = Some(2.0);
            row
        };

        // Deliberately out of severity order in the input
        let rows = vec![
            complete_high,
            complete_other,
            complete_low,
            missing_gpa,
            missing_label,
        ];
        let groups = scatter_groups(&rows);

        let names: Vec<&str> = groups.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["low", "high", "watchlist"]);
        assert_eq!(groups[0].1, vec![(90.0, 3.6)]);
        assert_eq!(groups[1].1, vec![(55.0, 1.9)]);
    }

    #[test]
    fn test_department_breakdown_sorting_and_other_bucket() {
        let rows = vec![
            row_with_risk(Some("Physics"), Some("low")),
            row_with_risk(Some("Math"), Some("high")),
            row_with_risk(Some("Physics"), Some("unknown-label")),
            row_with_risk(Some("Physics"), None),
            row_with_risk(None, Some("medium")),
        ];

        let breakdowns = department_risk_breakdown(&rows);

        assert_eq!(breakdowns.len(), 3);
        assert_eq!(breakdowns[0].department, "Physics");
        assert_eq!(breakdowns[0].total, 3);
        assert_eq!(breakdowns[0].risk_counts, [1, 0, 0]);
        assert_eq!(breakdowns[0].other, 2);

        // Equal totals fall back to name order
        assert_eq!(breakdowns[1].department, "(unspecified)");
        assert_eq!(breakdowns[2].department, "Math");
        assert_eq!(breakdowns[2].risk_counts, [0, 0, 1]);
    }
}

// src/data_analysis/descriptive.rs

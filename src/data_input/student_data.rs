// src/data_input/student_data.rs

/// Structure to hold data parsed from a single row of the students CSV.
/// Uses `Option` per field to handle potentially missing or unparseable cells.
#[derive(Debug, Default, Clone)]
pub struct StudentRowData {
    pub student_id: Option<String>,       // Student identifier (e.g. "ST001").
    pub name: Option<String>,             // Full name. Carried through, never charted.
    pub email: Option<String>,            // Contact address. Carried through, never charted.
    pub department: Option<String>,       // Department name, for the breakdown summary.
    pub year: Option<f64>,                // Year of study. Numeric so it joins the correlation matrix.
    pub gpa: Option<f64>,                 // Grade point average (0-4 scale).
    pub attendance_rate: Option<f64>,     // Attendance percentage.
    pub engagement_score: Option<f64>,    // Participation proxy score.
    pub risk_level: Option<String>,       // Categorical risk label (low/medium/high in exports).
}

/// Which of the target columns the CSV header row actually contained.
/// Every chart step checks its required columns here before running.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColumnPresence {
    pub student_id: bool,
    pub name: bool,
    pub email: bool,
    pub department: bool,
    pub year: bool,
    pub gpa: bool,
    pub attendance_rate: bool,
    pub engagement_score: bool,
    pub risk_level: bool,
}

impl ColumnPresence {
    /// Number of numeric columns available for the correlation heatmap.
    pub fn numeric_column_count(&self) -> usize {
        NumericColumn::ALL
            .iter()
            .filter(|column| column.is_present(self))
            .count()
    }

    /// True if no target column was found at all.
    pub fn is_empty(&self) -> bool {
        !(self.student_id
            || self.name
            || self.email
            || self.department
            || self.year
            || self.gpa
            || self.attendance_rate
            || self.engagement_score
            || self.risk_level)
    }
}

/// The numeric columns, in the fixed order they appear in the correlation
/// heatmap and the descriptive statistics block. `student_id` is excluded by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    Year,
    Gpa,
    AttendanceRate,
    EngagementScore,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 4] = [
        NumericColumn::Year,
        NumericColumn::Gpa,
        NumericColumn::AttendanceRate,
        NumericColumn::EngagementScore,
    ];

    /// Column name as it appears in the CSV header.
    pub fn label(&self) -> &'static str {
        match self {
            NumericColumn::Year => "year",
            NumericColumn::Gpa => "gpa",
            NumericColumn::AttendanceRate => "attendance_rate",
            NumericColumn::EngagementScore => "engagement_score",
        }
    }

    /// Extract this column's value from a parsed row.
    pub fn value_in(&self, row: &StudentRowData) -> Option<f64> {
        match self {
            NumericColumn::Year => row.year,
            NumericColumn::Gpa => row.gpa,
            NumericColumn::AttendanceRate => row.attendance_rate,
            NumericColumn::EngagementScore => row.engagement_score,
        }
    }

    pub fn is_present(&self, presence: &ColumnPresence) -> bool {
        match self {
            NumericColumn::Year => presence.year,
            NumericColumn::Gpa => presence.gpa,
            NumericColumn::AttendanceRate => presence.attendance_rate,
            NumericColumn::EngagementScore => presence.engagement_score,
        }
    }

    /// The numeric columns present in this file, preserving the fixed order.
    pub fn present_columns(presence: &ColumnPresence) -> Vec<NumericColumn> {
        NumericColumn::ALL
            .iter()
            .copied()
            .filter(|column| column.is_present(presence))
            .collect()
    }
}

// src/data_input/student_data.rs

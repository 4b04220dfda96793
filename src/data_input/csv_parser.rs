// src/data_input/csv_parser.rs

use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

use crate::data_input::student_data::{ColumnPresence, StudentRowData};
use crate::types::StudentParseResult;

/// Target columns, in fixed index order. The indices below are referenced by
/// the parse closures and must stay in sync with this table.
const TARGET_HEADERS: [&str; 9] = [
    "student_id",       // 0
    "name",             // 1
    "email",            // 2
    "department",       // 3
    "year",             // 4
    "gpa",              // 5
    "attendance_rate",  // 6
    "engagement_score", // 7
    "risk_level",       // 8
];

/// Role note printed next to each header in the mapping status report.
const HEADER_PURPOSES: [&str; 9] = [
    "Optional, rows with an empty value are skipped",
    "Optional, carried through",
    "Optional, carried through",
    "Optional, for the department breakdown",
    "Numeric, joins the correlation heatmap",
    "Numeric, for heatmap, distribution, and scatter",
    "Numeric, for heatmap, distribution, and scatter",
    "Numeric, for heatmap and distribution",
    "Categorical, for count plot and scatter coloring",
];

/// How many cells of a candidate line must match target column names before
/// the line is accepted as the CSV header row. The first non-empty line only
/// needs one match so headerless single-column exports still parse.
const HEADER_MATCH_THRESHOLD: usize = 2;

fn count_header_matches(line: &str) -> usize {
    line.split(',')
        .map(|cell| cell.trim().trim_matches('"'))
        .filter(|cell| {
            TARGET_HEADERS
                .iter()
                .any(|target| cell.eq_ignore_ascii_case(target))
        })
        .count()
}

/// Parses the students CSV file, extracts any export-metadata preamble,
/// determines column presence, and reads all data rows.
///
/// Returns a tuple containing:
/// 1. `Vec<StudentRowData>`: all parsed student rows.
/// 2. `ColumnPresence`: flags for every target column.
/// 3. `Vec<(String, String)>`: metadata key-value pairs found before the header row.
pub fn parse_students_file(input_file_path: &Path) -> StudentParseResult {
    // --- Metadata Extraction ---
    let mut metadata: Vec<(String, String)> = Vec::new();
    let mut csv_lines: Vec<String> = Vec::new();
    let mut found_csv_header = false;
    let mut seen_non_empty_line = false;

    // First pass: read file line by line to split the export preamble from the
    // CSV table. The header row is recognized by its target column names.
    {
        use std::io::{BufRead, BufReader};
        let file = File::open(input_file_path)?;
        let reader = BufReader::new(file);

        for line_result in reader.lines() {
            let line = line_result?;
            let trimmed_line = line.trim();

            // Skip empty lines
            if trimmed_line.is_empty() {
                continue;
            }

            if !found_csv_header {
                let matches = count_header_matches(trimmed_line);
                let threshold = if seen_non_empty_line {
                    HEADER_MATCH_THRESHOLD
                } else {
                    1
                };
                if matches >= threshold {
                    found_csv_header = true;
                    csv_lines.push(line);
                    println!("Found CSV header row");
                    continue;
                }
            }
            seen_non_empty_line = true;

            if found_csv_header {
                // Collect CSV data lines
                csv_lines.push(line);
            } else {
                // Parse preamble lines (key-value pairs)
                let mut rdr = csv::ReaderBuilder::new()
                    .has_headers(false)
                    .from_reader(trimmed_line.as_bytes());
                if let Some(Ok(record)) = rdr.records().next() {
                    if record.len() >= 2 {
                        let key = record.get(0).unwrap_or("").trim().trim_matches('"').to_string();
                        let value = record.get(1).unwrap_or("").trim().trim_matches('"').to_string();
                        if !key.is_empty() {
                            metadata.push((key, value));
                        }
                    }
                }
            }
        }
    }

    if !found_csv_header {
        return Err("Could not find CSV header row in the file".into());
    }

    println!("Extracted {} metadata entries", metadata.len());
    if !metadata.is_empty() {
        println!("Sample metadata:");
        for (i, (key, value)) in metadata.iter().take(5).enumerate() {
            println!("  {}: '{}' = '{}'", i + 1, key, value);
        }
        if metadata.len() > 5 {
            println!("  ... and {} more", metadata.len() - 5);
        }
    }

    // Create CSV content from collected lines
    let csv_content = csv_lines.join("\n");

    let mut presence = ColumnPresence::default();
    let header_indices: Vec<Option<usize>>;

    // Read CSV header and map target headers to indices.
    {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_content.as_bytes());
        let header_record = reader.headers()?.clone();
        println!("Headers found in CSV: {:?}", header_record);

        header_indices = TARGET_HEADERS
            .iter()
            .map(|&target_header| {
                header_record
                    .iter()
                    .position(|h| h.trim().eq_ignore_ascii_case(target_header))
            })
            .collect();

        println!("Header mapping status:");
        for (i, name) in TARGET_HEADERS.iter().enumerate() {
            let found = header_indices[i].is_some();
            println!(
                "  '{}': {} ({})",
                name,
                if found { "Found" } else { "Not Found" },
                HEADER_PURPOSES[i]
            );
        }

        presence.student_id = header_indices[0].is_some();
        presence.name = header_indices[1].is_some();
        presence.email = header_indices[2].is_some();
        presence.department = header_indices[3].is_some();
        presence.year = header_indices[4].is_some();
        presence.gpa = header_indices[5].is_some();
        presence.attendance_rate = header_indices[6].is_some();
        presence.engagement_score = header_indices[7].is_some();
        presence.risk_level = header_indices[8].is_some();

        if presence.is_empty() {
            return Err(
                "Error: None of the target student columns were found in the header row. Aborting."
                    .into(),
            );
        }
    }

    // --- Data Reading and Storage ---
    let mut all_student_data: Vec<StudentRowData> = Vec::new();
    println!("\nReading data rows...");
    {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_content.as_bytes());

        for (row_index, result) in reader.records().enumerate() {
            match result {
                Ok(record) => {
                    let mut current_row_data = StudentRowData::default();

                    let parse_string_by_target_idx = |target_idx: usize| -> Option<String> {
                        header_indices
                            .get(target_idx)
                            .and_then(|opt_csv_idx| opt_csv_idx.as_ref())
                            .and_then(|&csv_idx| record.get(csv_idx))
                            .map(str::trim)
                            .filter(|value| !value.is_empty())
                            .map(|value| value.to_string())
                    };

                    // Non-finite cells (NaN/inf) count as missing so they never
                    // poison the statistics downstream.
                    let parse_f64_by_target_idx = |target_idx: usize| -> Option<f64> {
                        header_indices
                            .get(target_idx)
                            .and_then(|opt_csv_idx| opt_csv_idx.as_ref())
                            .and_then(|&csv_idx| record.get(csv_idx))
                            .and_then(|val_str| val_str.parse::<f64>().ok())
                            .filter(|value| value.is_finite())
                    };

                    // Parse student_id first: when the column exists, an empty
                    // cell marks a malformed export row.
                    current_row_data.student_id = parse_string_by_target_idx(0);
                    if header_indices[0].is_some() && current_row_data.student_id.is_none() {
                        eprintln!(
                            "Warning: Skipping row {} due to empty 'student_id'",
                            row_index + 1
                        );
                        continue;
                    }

                    current_row_data.name = parse_string_by_target_idx(1);
                    current_row_data.email = parse_string_by_target_idx(2);
                    current_row_data.department = parse_string_by_target_idx(3);
                    current_row_data.year = parse_f64_by_target_idx(4);
                    current_row_data.gpa = parse_f64_by_target_idx(5);
                    current_row_data.attendance_rate = parse_f64_by_target_idx(6);
                    current_row_data.engagement_score = parse_f64_by_target_idx(7);
                    current_row_data.risk_level = parse_string_by_target_idx(8);

                    all_student_data.push(current_row_data);
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Skipping row {} due to CSV read error: {}",
                        row_index + 1,
                        e
                    );
                }
            }
        }
    }

    println!("Finished reading {} data rows.", all_student_data.len());

    Ok((all_student_data, presence, metadata))
}

// src/data_input/csv_parser.rs

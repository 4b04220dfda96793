// src/data_input/export_metadata.rs

/// Export details parsed from the key-value preamble some student information
/// systems write above the CSV header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportInfo {
    pub source: Option<String>,
    pub export_date: Option<String>,
    pub term: Option<String>,
}

impl ExportInfo {
    /// Format export details for chart titles.
    /// Returns an empty string when nothing was found in the preamble.
    pub fn format_for_title(&self) -> String {
        let mut parts = Vec::new();

        if let Some(term) = &self.term {
            parts.push(term.clone());
        }
        if let Some(source) = &self.source {
            parts.push(source.clone());
        }
        if let Some(export_date) = &self.export_date {
            parts.push(format!("exported {}", export_date));
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!(" - {}", parts.join(", "))
        }
    }
}

/// Parse export details from preamble key-value pairs.
/// Key names vary between exporting systems, so each field checks a few
/// common spellings. Returns default (empty) values if nothing matches.
pub fn parse_export_metadata(header_metadata: &[(String, String)]) -> ExportInfo {
    let mut export_info = ExportInfo::default();

    // If no metadata available, return default (empty) values
    if header_metadata.is_empty() {
        return export_info;
    }

    // Convert header metadata to a lookup map for easier access (build once, use everywhere)
    let header_map: std::collections::HashMap<String, String> = header_metadata
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.clone()))
        .collect();

    if let Some(source) = header_map
        .get("source")
        .or_else(|| header_map.get("generated_by"))
        .or_else(|| header_map.get("generated by"))
        .or_else(|| header_map.get("exported_by"))
        .or_else(|| header_map.get("exported by"))
    {
        if !source.is_empty() {
            export_info.source = Some(source.clone());
        }
    }

    if let Some(export_date) = header_map
        .get("export_date")
        .or_else(|| header_map.get("export date"))
        .or_else(|| header_map.get("exported_at"))
        .or_else(|| header_map.get("date"))
    {
        if !export_date.is_empty() {
            export_info.export_date = Some(export_date.clone());
        }
    }

    if let Some(term) = header_map
        .get("term")
        .or_else(|| header_map.get("semester"))
        .or_else(|| header_map.get("academic_term"))
    {
        if !term.is_empty() {
            export_info.term = Some(term.clone());
        }
    }

    export_info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_preamble_parsing() {
        let metadata = vec![
            ("Source".to_string(), "Campus Registrar".to_string()),
            ("Export_Date".to_string(), "2024-06-01".to_string()),
            ("Term".to_string(), "Fall 2024".to_string()),
        ];

        let export_info = parse_export_metadata(&metadata);

        assert_eq!(export_info.source, Some("Campus Registrar".to_string()));
        assert_eq!(export_info.export_date, Some("2024-06-01".to_string()));
        assert_eq!(export_info.term, Some("Fall 2024".to_string()));
    }

    #[test]
    fn test_synonym_keys() {
        let metadata = vec![
            ("generated_by".to_string(), "LMS Export Tool".to_string()),
            ("exported_at".to_string(), "2024-01-15".to_string()),
            ("semester".to_string(), "Spring 2024".to_string()),
        ];

        let export_info = parse_export_metadata(&metadata);

        assert_eq!(export_info.source, Some("LMS Export Tool".to_string()));
        assert_eq!(export_info.export_date, Some("2024-01-15".to_string()));
        assert_eq!(export_info.term, Some("Spring 2024".to_string()));
    }

    #[test]
    fn test_format_for_title() {
        let mut export_info = ExportInfo::default();
        export_info.term = Some("Fall 2024".to_string());
        export_info.source = Some("Campus Registrar".to_string());
        export_info.export_date = Some("2024-06-01".to_string());

        assert_eq!(
            export_info.format_for_title(),
            " - Fall 2024, Campus Registrar, exported 2024-06-01"
        );

        // Partial details keep the same ordering
        export_info.source = None;
        assert_eq!(
            export_info.format_for_title(),
            " - Fall 2024, exported 2024-06-01"
        );

        export_info.export_date = None;
        assert_eq!(export_info.format_for_title(), " - Fall 2024");
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let metadata = vec![
            ("source".to_string(), "".to_string()),
            ("term".to_string(), "Fall 2024".to_string()),
        ];

        let export_info = parse_export_metadata(&metadata);

        assert_eq!(export_info.source, None);
        assert_eq!(export_info.term, Some("Fall 2024".to_string()));
    }

    #[test]
    fn test_empty_metadata() {
        let empty_metadata = vec![];
        let export_info = parse_export_metadata(&empty_metadata);

        // Should return default values
        assert_eq!(export_info.source, None);
        assert_eq!(export_info.export_date, None);
        assert_eq!(export_info.term, None);

        // Title should be empty
        assert_eq!(export_info.format_for_title(), "");
    }
}

// src/data_input/export_metadata.rs

/// Centralized risk-level naming utilities
///
/// Provides consistent risk-level names and ordering across all plot
/// functions and data analysis modules.
/// Get the canonical risk-level name for a given rank
///
/// # Arguments
/// * `rank` - Risk rank (0=low, 1=medium, 2=high)
///
/// # Returns
/// Static string slice with the risk-level name
///
/// # Panics
/// Panics if rank is greater than 2
pub fn risk_level_name(rank: usize) -> &'static str {
    match rank {
        0 => "low",
        1 => "medium",
        2 => "high",
        _ => panic!(
            "Invalid risk rank: {}. Expected 0 (low), 1 (medium), or 2 (high)",
            rank
        ),
    }
}

/// All canonical risk-level names as a static array, in severity order
pub const RISK_LEVEL_NAMES: [&str; 3] = ["low", "medium", "high"];

/// Number of canonical risk levels
pub const RISK_LEVEL_COUNT: usize = RISK_LEVEL_NAMES.len();

/// Find the canonical rank of a label, matching case-insensitively after
/// trimming. Returns `None` for labels outside the canonical set.
pub fn risk_rank(label: &str) -> Option<usize> {
    let trimmed = label.trim();
    RISK_LEVEL_NAMES
        .iter()
        .position(|name| trimmed.eq_ignore_ascii_case(name))
}

/// Canonical display form of a label: canonical labels collapse to their
/// lowercase name so case variants count as one category, anything else is
/// passed through trimmed.
pub fn canonical_label(label: &str) -> String {
    match risk_rank(label) {
        Some(rank) => RISK_LEVEL_NAMES[rank].to_string(),
        None => label.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_level_name() {
        assert_eq!(risk_level_name(0), "low");
        assert_eq!(risk_level_name(1), "medium");
        assert_eq!(risk_level_name(2), "high");
    }

    #[test]
    #[should_panic(expected = "Invalid risk rank")]
    fn test_risk_level_name_panic() {
        risk_level_name(3);
    }

    #[test]
    fn test_risk_rank_case_insensitive() {
        assert_eq!(risk_rank("low"), Some(0));
        assert_eq!(risk_rank("Medium"), Some(1));
        assert_eq!(risk_rank("HIGH"), Some(2));
        assert_eq!(risk_rank("  high  "), Some(2));
        assert_eq!(risk_rank("critical"), None);
        assert_eq!(risk_rank(""), None);
    }

    #[test]
    fn test_canonical_label() {
        assert_eq!(canonical_label("LOW"), "low");
        assert_eq!(canonical_label(" Medium "), "medium");
        assert_eq!(canonical_label("unknown"), "unknown");
        assert_eq!(canonical_label("  watchlist "), "watchlist");
    }

    #[test]
    fn test_risk_level_names_constant() {
        assert_eq!(RISK_LEVEL_NAMES[0], "low");
        assert_eq!(RISK_LEVEL_NAMES[1], "medium");
        assert_eq!(RISK_LEVEL_NAMES[2], "high");
        assert_eq!(RISK_LEVEL_COUNT, 3);
    }
}

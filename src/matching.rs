//! Duplicated file name detection rule.

/// Smallest accepted ratio between target and source name length.
const LENGTH_RATIO_MIN: f64 = 0.7;
/// Largest accepted ratio between target and source name length.
const LENGTH_RATIO_MAX: f64 = 1.3;

/// Check if a target file name duplicates a source file name.
///
/// Base names are compared case-insensitively:
/// two names are considered duplicated when one contains the other
/// and their character counts differ by at most 30 percent.
/// An empty source name never matches anything.
#[must_use]
pub fn is_duplicate_name(target_name: &str, source_name: &str) -> bool {
    // Guard against division by zero instead of leaning on float infinity semantics
    if source_name.is_empty() {
        return false;
    }

    let ratio = target_name.chars().count() as f64 / source_name.chars().count() as f64;
    if !(LENGTH_RATIO_MIN..=LENGTH_RATIO_MAX).contains(&ratio) {
        return false;
    }

    let target = target_name.to_lowercase();
    let source = source_name.to_lowercase();
    target.contains(&source) || source.contains(&target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_identical_names() {
        assert!(is_duplicate_name("report", "report"));
    }

    #[test]
    fn matches_case_insensitively() {
        assert!(is_duplicate_name("REPORT", "report"));
        assert!(is_duplicate_name("Invoice_March", "invoice_MARCH"));
        assert_eq!(
            is_duplicate_name("Report", "report_final"),
            is_duplicate_name("REPORT", "report_final")
        );
    }

    #[test]
    fn matches_name_with_version_suffix() {
        // Contained substring with a length ratio of 16/13
        assert!(is_duplicate_name("invoice_march_v2", "invoice_march"));
    }

    #[test]
    fn matches_in_both_directions() {
        assert!(is_duplicate_name("invoice_march", "invoice_march_v2"));
    }

    #[test]
    fn rejects_names_without_containment() {
        assert!(!is_duplicate_name("unrelated_report", "invoice_march"));
        assert!(!is_duplicate_name("abcdefghix", "abcdefghij"));
    }

    #[test]
    fn rejects_short_name_contained_in_long_name() {
        // "a" is contained in "abcdefghij" but the ratio of 10 is far outside the tolerance
        assert!(!is_duplicate_name("abcdefghij", "a"));
        assert!(!is_duplicate_name("a", "abcdefghij"));
    }

    #[test]
    fn rejects_empty_source_name() {
        assert!(!is_duplicate_name("report", ""));
        assert!(!is_duplicate_name("", ""));
    }

    #[test]
    fn rejects_empty_target_name() {
        assert!(!is_duplicate_name("", "report"));
    }

    #[test]
    fn accepts_length_ratio_at_lower_bound() {
        // 7 characters against 10 is exactly 0.7
        assert!(is_duplicate_name("abcdefg", "abcdefghij"));
    }

    #[test]
    fn accepts_length_ratio_at_upper_bound() {
        // 13 characters against 10 is exactly 1.3
        assert!(is_duplicate_name("abcdefghijklm", "abcdefghij"));
    }

    #[test]
    fn rejects_length_ratio_outside_bounds() {
        // 6/10 and 14/10 fall just outside the inclusive bounds
        assert!(!is_duplicate_name("abcdef", "abcdefghij"));
        assert!(!is_duplicate_name("abcdefghijklmn", "abcdefghij"));
    }

    #[test]
    fn length_ratio_counts_characters_not_bytes() {
        // "éé" is four bytes but two characters: 3/2 is out of bounds while 5/4 would not be
        assert!(!is_duplicate_name("ééx", "éé"));
    }

    #[test]
    fn matches_close_variant_names() {
        assert!(is_duplicate_name("report2", "report"));
        assert!(is_duplicate_name("xreport", "report"));
        assert!(!is_duplicate_name("report_backup", "report"));
    }
}

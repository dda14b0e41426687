//! Case-insensitive text helpers shared by catalog matching and color rules.

/// Lowercases and trims a label so catalog values compare consistently.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Case-insensitive equality after trimming both sides.
pub fn same_label(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

/// Case-insensitive substring search. Blank keywords never match.
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    let keyword = normalize(keyword);
    if keyword.is_empty() {
        return false;
    }
    haystack.to_lowercase().contains(&keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_case_and_whitespace() {
        assert_eq!(normalize("  Casual Shoes "), "casual shoes");
    }

    #[test]
    fn should_compare_labels_ignoring_case() {
        assert!(same_label("Navy Blue", "navy blue "));
        assert!(!same_label("Navy", "Navy Blue"));
    }

    #[test]
    fn should_find_keyword_inside_longer_text() {
        assert!(contains_keyword("Fastrack Analog Watch", "watch"));
        assert!(contains_keyword("Wristwatches", "WATCH"));
        assert!(!contains_keyword("Leather Belt", "watch"));
    }

    #[test]
    fn should_never_match_blank_keyword() {
        assert!(!contains_keyword("anything", "   "));
    }
}

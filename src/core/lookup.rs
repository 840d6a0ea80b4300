// Identifier matching used by every id based lookup. Identifiers are compared
// case-insensitively and otherwise exactly; no trimming or partial matching.
pub(crate) fn matches_id(candidate: &str, query: &str) -> bool {
    candidate.chars().flat_map(char::to_lowercase)
        .eq(query.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use crate::core::lookup::matches_id;

    #[test]
    fn test_should_match_ignoring_case() {
        assert!(matches_id("B1", "b1"));
        assert!(matches_id("b1", "B1"));
        assert!(matches_id("ÄBC", "äbc"));
        assert!(matches_id("", ""));
    }

    #[test]
    fn test_should_not_match_partial_or_padded() {
        assert!(!matches_id("B1", "B"));
        assert!(!matches_id("B1", "B12"));
        assert!(!matches_id("B1", " B1"));
        assert!(!matches_id("B1", ""));
    }
}

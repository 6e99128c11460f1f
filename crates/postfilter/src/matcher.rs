//! Case-insensitive containment primitive.

/// Allocation-free case-insensitive containment check.
///
/// The needle must already be uppercased; the filter pass uppercases the
/// query once and reuses it against every title. An empty needle matches
/// any haystack.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle_upper: &str) -> bool {
    if needle_upper.is_empty() {
        return true;
    }
    // Fast path: pure-ASCII inputs compare byte windows without allocating.
    // Titles are short UI strings, so a naive scan is plenty.
    if haystack.is_ascii() && needle_upper.is_ascii() {
        let needle = needle_upper.as_bytes();
        let hay = haystack.as_bytes();
        if needle.len() > hay.len() {
            return false;
        }
        return hay
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle));
    }
    // Unicode fallback: allocates, but uses the host case mapping. Uppercase
    // folding so expanding mappings like ß -> SS land on the match side.
    haystack.to_uppercase().contains(needle_upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle_matches_anything() {
        assert!(contains_ignore_case("", ""));
        assert!(contains_ignore_case("Hello", ""));
    }

    #[test]
    fn ascii_match_ignores_case() {
        assert!(contains_ignore_case("Hello World", "WORLD"));
        assert!(contains_ignore_case("hello", "HELLO"));
        assert!(contains_ignore_case("Hello", "ELL"));
    }

    #[test]
    fn ascii_no_match() {
        assert!(!contains_ignore_case("Hello", "WORLD"));
        assert!(!contains_ignore_case("", "A"));
    }

    #[test]
    fn needle_longer_than_haystack() {
        assert!(!contains_ignore_case("ab", "ABC"));
    }

    #[test]
    fn unicode_fallback_folds_case() {
        assert!(contains_ignore_case("Éclair Recipe", "ÉCLAIR"));
        assert!(contains_ignore_case("ångström", "ÅNGSTRÖM"));
        assert!(!contains_ignore_case("Éclair", "ÜBER"));
    }

    #[test]
    fn expanding_case_mappings_match() {
        // "ß".to_uppercase() == "SS", so an ASCII query can hit a non-ASCII
        // title. Lowercase folding would miss this.
        assert!(contains_ignore_case("Straße", "STRASSE"));
        assert!(contains_ignore_case("Straße und Wege", "SSE UND"));
        assert!(!contains_ignore_case("Strasse", "STRASSEN"));
    }

    #[test]
    fn match_at_boundaries() {
        assert!(contains_ignore_case("abc", "AB"));
        assert!(contains_ignore_case("abc", "BC"));
        assert!(contains_ignore_case("abc", "ABC"));
    }
}

//! Search query normalization.

/// A normalized search query.
///
/// A blank query means "browse everything"; any other query is held
/// trimmed and lowercased, ready for substring matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Empty or whitespace-only input.
    Browse,
    /// Trimmed, lowercased needle. Never empty.
    Text(String),
}

impl SearchQuery {
    /// Normalize raw user input.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            SearchQuery::Browse
        } else {
            SearchQuery::Text(trimmed.to_lowercase())
        }
    }

    /// Whether this query browses the full catalog.
    pub fn is_browse(&self) -> bool {
        matches!(self, SearchQuery::Browse)
    }

    /// The lowercased needle, if any.
    pub fn needle(&self) -> Option<&str> {
        match self {
            SearchQuery::Browse => None,
            SearchQuery::Text(s) => Some(s),
        }
    }

    /// Case-insensitive substring test against a candidate field.
    ///
    /// A browse query matches everything.
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            SearchQuery::Browse => true,
            SearchQuery::Text(needle) => candidate.to_lowercase().contains(needle.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_browse() {
        assert_eq!(SearchQuery::parse(""), SearchQuery::Browse);
        assert_eq!(SearchQuery::parse("   "), SearchQuery::Browse);
        assert_eq!(SearchQuery::parse("\t\n"), SearchQuery::Browse);
    }

    #[test]
    fn text_is_trimmed_and_lowercased() {
        assert_eq!(
            SearchQuery::parse("  Great HALL "),
            SearchQuery::Text("great hall".to_string())
        );
    }

    #[test]
    fn matches_substring_ignoring_case() {
        let q = SearchQuery::parse("MAIN");
        assert!(q.matches("Main Campus Loop"));
        assert!(q.matches("domain"));
        assert!(!q.matches("Madina"));
    }

    #[test]
    fn no_tokenization() {
        // Word order matters; it is a plain substring test.
        let q = SearchQuery::parse("hall great");
        assert!(!q.matches("Great Hall"));
    }

    #[test]
    fn browse_matches_everything() {
        assert!(SearchQuery::Browse.matches(""));
        assert!(SearchQuery::Browse.matches("anything"));
        assert_eq!(SearchQuery::Browse.needle(), None);
    }
}

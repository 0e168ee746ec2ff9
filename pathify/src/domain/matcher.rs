// pathify/src/domain/matcher.rs

/// A candidate that matched a query, as ranked by a [`FuzzyMatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    /// Original candidate text, unmodified
    pub text: String,
    /// Matcher specific relevance, higher is better
    pub score: u32,
}

/// Fuzzy ranking collaborator.
///
/// Contract: returns the matching candidates best first. An empty (or blank)
/// query or an empty candidate list yields no matches. Scoring is owned by the
/// implementation; callers must not filter or reorder the result.
pub trait FuzzyMatcher: std::fmt::Debug + Send + Sync {
    fn find(&self, query: &str, candidates: &[String]) -> Vec<FuzzyMatch>;
}

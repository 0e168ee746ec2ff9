// pathify/src/infrastructure/matching/nucleo_matcher.rs

use crate::domain::matcher::{FuzzyMatch, FuzzyMatcher};
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher};
use tracing::{instrument, trace};

/// Fuzzy subsequence ranking on top of `nucleo-matcher`.
///
/// Matching is case-insensitive and uses nucleo's path scoring bonuses, so
/// hits right after a `/` rank higher. Whitespace is not matched literally:
/// the query is split into words and every word must match on its own, so
/// `a b` finds `/a/b`. Candidates with equal score keep their list order.
#[derive(Debug, Clone)]
pub struct NucleoMatcher {
    config: Config,
}

impl Default for NucleoMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl NucleoMatcher {
    pub fn new() -> Self {
        Self {
            config: Config::DEFAULT.match_paths(),
        }
    }
}

impl FuzzyMatcher for NucleoMatcher {
    #[instrument(level = "debug", skip(self, candidates), fields(candidates = candidates.len()))]
    fn find(&self, query: &str, candidates: &[String]) -> Vec<FuzzyMatch> {
        if query.trim().is_empty() || candidates.is_empty() {
            return Vec::new();
        }

        let mut matcher = Matcher::new(self.config.clone());
        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );

        // match_list sorts by descending score with a stable sort
        let matches: Vec<FuzzyMatch> = pattern
            .match_list(candidates.iter(), &mut matcher)
            .into_iter()
            .map(|(text, score)| FuzzyMatch {
                text: text.clone(),
                score,
            })
            .collect();

        trace!("{} of {} candidates matched", matches.len(), candidates.len());
        matches
    }
}

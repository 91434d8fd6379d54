/// Fuzzy "did you mean" suggestions for unknown tier names.
use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

use super::table::TierTable;

/// Maximum number of suggestions returned.
const MAX_SUGGESTIONS: usize = 3;

/// Tier identifiers that fuzzily match `query`, best match first.
#[must_use]
pub fn suggest(table: &TierTable, query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

    let mut scored: Vec<(&str, u32)> = table
        .ids()
        .filter_map(|id| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(id, &mut buf);
            pattern.score(haystack, &mut matcher).map(|score| (id, score))
        })
        .collect();

    // Sort by score descending; ties keep rank order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(id, _)| id.to_owned())
        .collect()
}

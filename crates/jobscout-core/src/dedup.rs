use std::collections::HashSet;

use crate::models::SearchHit;

/// Keep only hits whose URL has not been seen before.
///
/// Pure filter: the seen-set is not mutated here. The runner inserts the
/// surviving URLs immediately after filtering, before the next query runs,
/// so the same URL returned by two queries in one run is reported once.
pub fn filter_new_results(results: Vec<SearchHit>, seen_urls: &HashSet<String>) -> Vec<SearchHit> {
    results
        .into_iter()
        .filter(|r| !seen_urls.contains(&r.url))
        .collect()
}

use crate::models::{SearchHit, SearchQuery};

/// The sentence emitted when no query produced a new result.
pub const NO_RESULTS_SENTENCE: &str = "No new job postings found via Boolean search today.";

/// Render the final report text.
///
/// `results_by_query` is an ordered list of (query name, new hits) pairs,
/// one entry per query in config order. Queries with zero new results are
/// skipped; if every query is empty, a single no-results sentence replaces
/// the per-query sections. Absent fields render as empty strings.
pub fn format_as_text_block(results_by_query: &[(String, Vec<SearchHit>)], run_date: &str) -> String {
    let mut lines = vec![
        format!("=== BOOLEAN SEARCH RESULTS - {run_date} ==="),
        "Source: Direct ATS search via Tavily (Greenhouse, Lever, Workday, ICIMS)".to_string(),
        String::new(),
    ];

    let total: usize = results_by_query.iter().map(|(_, v)| v.len()).sum();
    if total == 0 {
        lines.push(NO_RESULTS_SENTENCE.to_string());
        return lines.join("\n");
    }

    for (query_name, results) in results_by_query {
        if results.is_empty() {
            continue;
        }
        lines.push(format!("Query: \"{query_name}\""));
        for (i, item) in results.iter().enumerate() {
            lines.push(format!("--- Result {} ---", i + 1));
            lines.push(format!("Title: {}", item.title));
            lines.push(format!("URL: {}", item.url));
            lines.push(format!("Snippet: {}", item.description));
            lines.push("---".to_string());
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Render the dry-run listing: each enabled query's name and text, without
/// touching the network.
pub fn describe_queries(queries: &[&SearchQuery], days_back: u32) -> String {
    let mut lines = vec![format!(
        "DRY RUN — {} queries, days_back={}",
        queries.len(),
        days_back
    )];
    for q in queries {
        lines.push(format!("  [{}]\n  {}\n", q.name, q.text));
    }
    lines.join("\n")
}

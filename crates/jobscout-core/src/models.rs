use serde::Deserialize;

/// A named boolean-style search query from the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    /// Human-readable name, used as the report section header.
    pub name: String,
    /// The boolean query string sent to the search API.
    #[serde(rename = "string")]
    pub text: String,
    /// Disabled queries are skipped without being listed.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Run settings from the config file. Defaults apply per-field when absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub results_per_query: usize,
    pub delay_between_queries_seconds: f64,
    pub days_back: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            results_per_query: 10,
            delay_between_queries_seconds: 2.0,
            days_back: 7,
        }
    }
}

/// Top-level config file shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub queries: Vec<SearchQuery>,
}

impl SearchConfig {
    /// Queries with `enabled: true`, in config order.
    pub fn enabled_queries(&self) -> Vec<&SearchQuery> {
        self.queries.iter().filter(|q| q.enabled).collect()
    }
}

/// A single normalized search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub url: String,
    pub title: String,
    /// Snippet text, truncated to 200 chars by the client.
    pub description: String,
}

/// How a run ended, for library callers that cannot rely on exit codes
/// (the process always exits 0 on recoverable failures).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Clean no-op: nothing was searched (missing config, no enabled
    /// queries, missing credential, or dry run).
    Skipped,
    /// Every query's API call succeeded.
    Completed,
    /// At least one query's API call failed and contributed an empty set.
    CompletedWithFailures,
}

/// Result of a full pipeline run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub status: RunStatus,
    /// The formatted report text.
    pub report: String,
    /// New job postings found across all queries.
    pub total_new: usize,
    /// Queries actually executed (zero when the run was skipped).
    pub queries_run: usize,
    /// Queries whose API call failed.
    pub failed_queries: usize,
}

impl RunOutcome {
    /// Outcome for a clean no-op: missing config, no enabled queries,
    /// missing credential, or dry run. No report, nothing searched.
    pub fn skipped() -> Self {
        Self {
            status: RunStatus::Skipped,
            report: String::new(),
            total_new: 0,
            queries_run: 0,
            failed_queries: 0,
        }
    }
}

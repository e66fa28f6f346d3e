use std::collections::HashSet;
use std::time::Duration;

use crate::classify::is_job_posting;
use crate::dedup::filter_new_results;
use crate::error::AppError;
use crate::models::{RunOutcome, RunStatus, SearchHit, SearchQuery, Settings};
use crate::report::format_as_text_block;
use crate::traits::SearchProvider;

/// Orchestrates the full search pipeline: query → classify → dedup → report.
///
/// Generic over the search provider via the [`SearchProvider`] trait,
/// enabling dependency injection and testability without real HTTP calls.
/// Execution is strictly sequential; the only pause is the configured
/// inter-query delay, skipped after the last query.
pub struct SearchRunner<P: SearchProvider> {
    provider: P,
    settings: Settings,
}

impl<P: SearchProvider> SearchRunner<P> {
    pub fn new(provider: P, settings: Settings) -> Self {
        Self { provider, settings }
    }

    /// Run every query in order against the cumulative seen-set.
    ///
    /// `seen_urls` is mutated as new results are found, so later queries in
    /// the same run are deduplicated against earlier queries' discoveries.
    /// Persisting the updated set is the caller's concern.
    pub async fn run(
        &self,
        queries: &[&SearchQuery],
        seen_urls: &mut HashSet<String>,
    ) -> RunOutcome {
        let mut results_by_query: Vec<(String, Vec<SearchHit>)> =
            Vec::with_capacity(queries.len());
        let mut total_new = 0;
        let mut failed_queries = 0;

        for (i, query) in queries.iter().enumerate() {
            tracing::info!("Running: {}", query.name);

            let raw = match self.run_query(query).await {
                Ok(hits) => hits,
                Err(_) => {
                    failed_queries += 1;
                    Vec::new()
                }
            };
            let raw_count = raw.len();

            let job_results: Vec<SearchHit> =
                raw.into_iter().filter(|r| is_job_posting(r)).collect();
            let job_count = job_results.len();

            let new_results = filter_new_results(job_results, seen_urls);
            total_new += new_results.len();
            for r in &new_results {
                seen_urls.insert(r.url.clone());
            }

            tracing::info!(
                "  {} results -> {} job postings -> {} new",
                raw_count,
                job_count,
                new_results.len()
            );
            results_by_query.push((query.name.clone(), new_results));

            let delay = self.settings.delay_between_queries_seconds;
            if i + 1 < queries.len() && delay > 0.0 {
                tokio::time::sleep(Duration::from_secs_f64(delay)).await;
            }
        }

        let run_date = chrono::Local::now().date_naive().to_string();
        let report = format_as_text_block(&results_by_query, &run_date);

        let status = if failed_queries > 0 {
            RunStatus::CompletedWithFailures
        } else {
            RunStatus::Completed
        };

        RunOutcome {
            status,
            report,
            total_new,
            queries_run: queries.len(),
            failed_queries,
        }
    }

    /// One best-effort API call. Errors are logged (401 and 429 get
    /// operator-facing hints) and returned so the caller can count the
    /// failure; the run itself never aborts on a failing query.
    async fn run_query(&self, query: &SearchQuery) -> Result<Vec<SearchHit>, AppError> {
        let result = self
            .provider
            .search(
                &query.text,
                self.settings.results_per_query,
                self.settings.days_back,
            )
            .await;

        if let Err(e) = &result {
            match e {
                AppError::AuthError => {
                    tracing::error!("Invalid Tavily API key, check JOBSCOUT_TAVILY_API_KEY");
                }
                AppError::RateLimitExceeded => {
                    tracing::warn!("Tavily rate limit hit");
                }
                AppError::ApiError {
                    status_code,
                    message,
                } => {
                    tracing::warn!("HTTP {}: {}", status_code, message);
                }
                other => {
                    tracing::warn!("Query failed ({}), skipping", other);
                }
            }
        }

        result
    }
}

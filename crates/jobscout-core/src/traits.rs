use std::future::Future;

use crate::error::AppError;
use crate::models::SearchHit;

/// Runs a single search query against an external search API.
///
/// The seam between the pipeline and the network: the orchestrator is
/// generic over this trait so tests can inject a mock provider.
pub trait SearchProvider: Send + Sync + Clone {
    /// Issue one request for `query`, asking for at most `max_results`
    /// hits published within the last `days_back` days.
    fn search(
        &self,
        query: &str,
        max_results: usize,
        days_back: u32,
    ) -> impl Future<Output = Result<Vec<SearchHit>, AppError>> + Send;
}

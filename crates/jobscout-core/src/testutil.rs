//! Test utilities: a mock search provider for dependency injection.
//!
//! Uses `Arc<Mutex<_>>` for interior mutability, allowing test assertions
//! on recorded calls.

use std::sync::{Arc, Mutex};

use crate::error::AppError;
use crate::models::SearchHit;
use crate::traits::SearchProvider;

/// Mock provider that returns a configurable queue of responses.
///
/// Each call pops the first element; once the queue is empty, calls return
/// an empty result list. Every call is recorded as
/// `(query, max_results, days_back)` for assertions.
#[derive(Clone, Default)]
pub struct MockProvider {
    responses: Arc<Mutex<Vec<Result<Vec<SearchHit>, AppError>>>>,
    pub calls: Arc<Mutex<Vec<(String, usize, u32)>>>,
}

impl MockProvider {
    pub fn with_responses(responses: Vec<Result<Vec<SearchHit>, AppError>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_error(error: AppError) -> Self {
        Self::with_responses(vec![Err(error)])
    }
}

impl SearchProvider for MockProvider {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
        days_back: u32,
    ) -> Result<Vec<SearchHit>, AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), max_results, days_back));

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(Vec::new())
        } else {
            responses.remove(0)
        }
    }
}

/// Create a hit with an empty description.
pub fn make_hit(url: &str, title: &str) -> SearchHit {
    SearchHit {
        url: url.to_string(),
        title: title.to_string(),
        description: String::new(),
    }
}

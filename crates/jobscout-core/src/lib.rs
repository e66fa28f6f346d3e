pub mod classify;
pub mod config;
pub mod dedup;
pub mod error;
pub mod history;
pub mod models;
pub mod report;
pub mod run;
pub mod traits;

#[cfg(test)]
pub mod testutil;

pub use classify::is_job_posting;
pub use dedup::filter_new_results;
pub use error::AppError;
pub use models::{RunOutcome, RunStatus, SearchConfig, SearchHit, SearchQuery, Settings};
pub use report::format_as_text_block;
pub use run::SearchRunner;
pub use traits::SearchProvider;

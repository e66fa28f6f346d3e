use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobscout_client::TavilySearcher;
use jobscout_core::config::load_config;
use jobscout_core::history::load_history;
use jobscout_core::report::describe_queries;
use jobscout_core::{RunOutcome, RunStatus, SearchRunner};

#[derive(Parser)]
#[command(
    name = "jobscout",
    version,
    about = "Boolean ATS job search via the Tavily Search API"
)]
struct Cli {
    /// Path to the JSON config file (queries and run settings)
    #[arg(long, default_value = "boolean-search-config.json")]
    config: PathBuf,

    /// Path to the seen-URL history file
    #[arg(long, default_value = ".job_history.txt")]
    history: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Tavily API key (reads from JOBSCOUT_TAVILY_API_KEY if not provided)
    #[arg(
        long,
        env = "JOBSCOUT_TAVILY_API_KEY",
        default_value = "",
        hide_env_values = true
    )]
    api_key: String,

    /// List enabled queries without making any network calls
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

/// Everything after arg parsing and logging setup.
///
/// Recoverable setup failures (missing config, no enabled queries, missing
/// credential) and dry runs log to the operator and come back as
/// `RunStatus::Skipped`, so callers see a clean no-op rather than an exit
/// code. The network is never touched on a skip path. Only unforeseen
/// defects (unreadable history, unwritable output) propagate as errors.
async fn run(cli: Cli) -> Result<RunOutcome> {
    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return Ok(RunOutcome::skipped());
        }
    };

    let queries = config.enabled_queries();
    if queries.is_empty() {
        tracing::warn!("No enabled queries found in config");
        return Ok(RunOutcome::skipped());
    }

    if cli.dry_run {
        println!("{}", describe_queries(&queries, config.settings.days_back));
        return Ok(RunOutcome::skipped());
    }

    if cli.api_key.is_empty() {
        tracing::error!(
            "JOBSCOUT_TAVILY_API_KEY not set.\n  \
             Sign up at https://app.tavily.com (free: 1,000 queries/month)\n  \
             Then add to .env: export JOBSCOUT_TAVILY_API_KEY='tvly-...'"
        );
        return Ok(RunOutcome::skipped());
    }

    let mut seen_urls = load_history(&cli.history)
        .with_context(|| format!("Failed to read history file {}", cli.history.display()))?;

    let searcher = TavilySearcher::new(&cli.api_key)?;
    let runner = SearchRunner::new(searcher, config.settings.clone());
    let outcome = runner.run(&queries, &mut seen_urls).await;

    match &cli.output {
        Some(path) => std::fs::write(path, &outcome.report)
            .with_context(|| format!("Failed to write report to {}", path.display()))?,
        None => println!("{}", outcome.report),
    }

    Ok(outcome)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Diagnostics go to stderr so the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = run(cli).await?;

    match outcome.status {
        // Skip paths already told the operator why.
        RunStatus::Skipped => {}
        RunStatus::CompletedWithFailures => tracing::warn!(
            "{} new jobs found across {} queries ({} failed)",
            outcome.total_new,
            outcome.queries_run,
            outcome.failed_queries
        ),
        RunStatus::Completed => tracing::info!(
            "{} new jobs found across {} queries",
            outcome.total_new,
            outcome.queries_run
        ),
    }

    Ok(())
}

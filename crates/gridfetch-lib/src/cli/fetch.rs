use crate::cli::params::FetchParams;
use crate::download::{BatchReport, HttpFetcher, run_batch};
use crate::error::GridFetchError;
use crate::logger::RunLog;
use tracing;

/// Runs the whole batch against the resolved parameters. Per-dataset failure
/// is reported, not propagated: only an unusable log sink, HTTP client, or
/// destination directory makes this return an error.
pub async fn run_fetch(params: FetchParams) -> Result<BatchReport, GridFetchError> {
    let log = RunLog::to_file(&params.log_path)?;
    let fetcher = HttpFetcher::new(&params.options)?;

    tracing::info!(
        "Fetching {} datasets into {}",
        params.catalog.len(),
        params.output_dir.display()
    );

    let report = run_batch(
        &fetcher,
        &params.catalog,
        &params.output_dir,
        &params.options,
        &log,
    )
    .await?;

    if report.all_succeeded() {
        tracing::info!("All {} datasets downloaded", report.attempted);
    } else {
        tracing::warn!(
            "{} of {} datasets failed",
            report.failed.len(),
            report.attempted
        );
        for failed in &report.failed {
            tracing::warn!("Failed: {} ({})", failed.filename, failed.url);
        }
    }

    Ok(report)
}

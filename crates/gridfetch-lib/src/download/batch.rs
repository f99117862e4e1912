use super::retry::{FetchOutcome, fetch_with_retry};
use super::task::FetchTask;
use super::types::{BatchReport, FailedDataset, FetchOptions};
use crate::catalog::DatasetMapping;
use crate::error::GridFetchError;
use crate::logger::RunLog;
use std::path::Path;

/// Drives every mapping in the catalog through the retrying fetcher, one at
/// a time. A dataset that exhausts its retry budget is recorded and the
/// batch moves on; only an uncreatable destination directory aborts the run.
pub async fn run_batch(
    task: &dyn FetchTask,
    catalog: &[DatasetMapping],
    output_dir: &Path,
    options: &FetchOptions,
    log: &RunLog,
) -> Result<BatchReport, GridFetchError> {
    log.info("Starting download process");

    std::fs::create_dir_all(output_dir).map_err(|e| GridFetchError::DownloadDirectoryCreation {
        path: output_dir.to_path_buf(),
        reason: e.to_string(),
    })?;
    log.info(&format!("Created directory {}", output_dir.display()));

    let mut report = BatchReport {
        attempted: catalog.len(),
        failed: Vec::new(),
    };

    for mapping in catalog {
        let output_path = output_dir.join(&mapping.filename);
        match fetch_with_retry(task, mapping, &output_path, options, log).await {
            FetchOutcome::Succeeded { .. } => {}
            FetchOutcome::Exhausted { .. } => {
                log.error(&format!("Failed to download {}", mapping.filename));
                report.failed.push(FailedDataset {
                    filename: mapping.filename.clone(),
                    url: mapping.url.clone(),
                });
            }
        }
    }

    log.info("Download process completed");
    Ok(report)
}

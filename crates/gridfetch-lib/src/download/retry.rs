use super::task::FetchTask;
use super::types::FetchOptions;
use crate::catalog::DatasetMapping;
use crate::logger::RunLog;
use std::path::Path;

/// Terminal state of one logical fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Succeeded { attempts: u32 },
    Exhausted { attempts: u32 },
}

impl FetchOutcome {
    pub fn is_success(self) -> bool {
        matches!(self, FetchOutcome::Succeeded { .. })
    }
}

/// Drives one mapping through up to `retry_count` attempts with a fixed
/// delay in between, logging every attempt's outcome. Failure is always
/// communicated through the returned outcome plus log entries, never an
/// error.
pub async fn fetch_with_retry(
    task: &dyn FetchTask,
    mapping: &DatasetMapping,
    output_path: &Path,
    options: &FetchOptions,
    log: &RunLog,
) -> FetchOutcome {
    let retry_count = options.retry_count.max(1);

    for attempt in 1..=retry_count {
        match task.fetch(&mapping.url, output_path).await {
            Ok(()) => {
                log.info(&format!(
                    "Downloaded {} to {}",
                    mapping.url,
                    output_path.display()
                ));
                return FetchOutcome::Succeeded { attempts: attempt };
            }
            Err(err) if attempt < retry_count => {
                log.warning(&format!(
                    "Attempt {attempt} of {retry_count} failed for {}: {err}",
                    mapping.url
                ));
                tokio::time::sleep(options.retry_delay).await;
            }
            Err(err) => {
                log.error(&format!(
                    "Giving up on {} after {retry_count} attempts: {err}",
                    mapping.url
                ));
            }
        }
    }

    FetchOutcome::Exhausted {
        attempts: retry_count,
    }
}

mod batch;
mod retry;
mod task;
#[cfg(test)]
pub(crate) mod test_support;
mod types;

pub use batch::run_batch;
pub use retry::{FetchOutcome, fetch_with_retry};
pub use task::{FetchTask, HttpFetcher};
pub use types::{BatchReport, FailedDataset, FetchOptions};

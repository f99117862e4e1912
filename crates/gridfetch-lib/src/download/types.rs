use std::time::Duration;
use url::Url;

#[derive(Clone, Copy, Debug)]
pub struct FetchOptions {
    /// Maximum attempts per dataset before giving up.
    pub retry_count: u32,
    /// Fixed delay between attempts.
    pub retry_delay: Duration,
    /// Upper bound on establishing the connection.
    pub connect_timeout: Duration,
    /// Upper bound on one attempt's total duration.
    pub total_timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            retry_count: 3,
            retry_delay: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(60),
            total_timeout: Duration::from_secs(2400),
        }
    }
}

/// A dataset that used up its whole retry budget.
#[derive(Clone, Debug)]
pub struct FailedDataset {
    pub filename: String,
    pub url: Url,
}

/// Aggregate outcome of one batch run. The batch itself always completes;
/// this is how callers find out which datasets did not make it.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    pub attempted: usize,
    pub failed: Vec<FailedDataset>,
}

impl BatchReport {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

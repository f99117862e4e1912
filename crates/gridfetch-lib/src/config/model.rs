use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Export endpoint the dataset slugs are resolved against. The query
/// parameters are baked into every dataset URL at catalog-construction time.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    pub base_url: String,
    pub format: String,
    pub use_labels_for_header: bool,
    pub epsg: u32,
}

/// One dataset to fetch: the local output filename and the export slug it is
/// served under.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetDef {
    pub filename: String,
    pub dataset: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: PathBuf,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    pub path: PathBuf,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct DownloadConfig {
    pub retry_count: u32,
    pub retry_delay_secs: u64,
    pub connect_timeout_secs: u64,
    pub total_timeout_secs: u64,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            retry_count: 3,
            retry_delay_secs: 5,
            connect_timeout_secs: 60,
            total_timeout_secs: 2400,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub source: SourceConfig,
    pub datasets: Vec<DatasetDef>,
    pub output: OutputConfig,
    pub log: LogConfig,
    #[serde(default)]
    pub download: DownloadConfig,
}

use eyre::Result;
use gridfetch_lib::config::{
    Config, DatasetDef, DownloadConfig, LogConfig, OutputConfig, SourceConfig,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .try_init();
}

/// Config pointing at `base_url` with one dataset per (filename, slug) pair
/// and a zero inter-retry delay so tests do not sleep.
pub fn create_test_config(base_url: &str, datasets: &[(&str, &str)], root: &Path) -> Config {
    Config {
        source: SourceConfig {
            base_url: base_url.to_string(),
            format: "csv".to_string(),
            use_labels_for_header: true,
            epsg: 2154,
        },
        datasets: datasets
            .iter()
            .map(|(filename, dataset)| DatasetDef {
                filename: filename.to_string(),
                dataset: dataset.to_string(),
            })
            .collect(),
        output: OutputConfig {
            path: root.join("downloaded"),
        },
        log: LogConfig {
            path: root.join("logs").join("download.log"),
        },
        download: DownloadConfig {
            retry_count: 3,
            retry_delay_secs: 0,
            connect_timeout_secs: 5,
            total_timeout_secs: 30,
        },
    }
}

pub fn setup_test_environment(config: &Config) -> Result<(TempDir, PathBuf)> {
    let temp_dir = tempfile::tempdir()?;

    let config_path = temp_dir.path().join("config.json");
    std::fs::write(&config_path, serde_json::to_string_pretty(config)?)?;

    Ok((temp_dir, config_path))
}

pub async fn wait_for_file_creation(path: &Path, timeout_secs: u64) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed().as_secs() < timeout_secs {
        if path.exists() {
            return true;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }
    false
}

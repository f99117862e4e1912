use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridFetchError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid source URL {url}: {reason}")]
    InvalidSourceUrl { url: String, reason: String },

    #[error("Duplicate output filename in dataset table: {filename}")]
    DuplicateDatasetFilename { filename: String },

    #[error("Download directory creation failed at {path}: {reason}")]
    DownloadDirectoryCreation { path: PathBuf, reason: String },

    #[error("Failed to open log sink at {path}: {reason}")]
    LogSinkCreation { path: PathBuf, reason: String },

    #[error("Invalid command line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}

/// Failure of a single download attempt. The retry loop treats every variant
/// as transient; classification beyond that lives in the log message.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP transfer failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error writing download: {0}")]
    Io(#[from] std::io::Error),
}

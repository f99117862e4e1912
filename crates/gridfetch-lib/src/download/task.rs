use super::types::FetchOptions;
use crate::error::{FetchError, GridFetchError};
use async_trait::async_trait;
use futures::StreamExt;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use url::Url;

/// One network attempt: fetch `url` into `output_path`. No internal retry;
/// that is the caller's job.
#[async_trait]
pub trait FetchTask: Send + Sync {
    async fn fetch(&self, url: &Url, output_path: &Path) -> Result<(), FetchError>;
}

/// reqwest-backed fetcher. The connect and total timeouts from the options
/// are baked into the client, so exceeding either surfaces as a plain
/// `FetchError::Http` from the attempt.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(options: &FetchOptions) -> Result<HttpFetcher, GridFetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(options.connect_timeout)
            .timeout(options.total_timeout)
            .build()?;

        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl FetchTask for HttpFetcher {
    async fn fetch(&self, url: &Url, output_path: &Path) -> Result<(), FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;

        // Truncates leftovers from a prior failed attempt. On failure the
        // file's content is undefined; the retry loop overwrites it anyway.
        let file = tokio::fs::File::create(output_path).await?;
        let mut writer = tokio::io::BufWriter::new(file);

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            writer.write_all(&chunk?).await?;
        }
        writer.flush().await?;

        Ok(())
    }
}

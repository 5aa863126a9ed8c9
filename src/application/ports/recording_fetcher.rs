use async_trait::async_trait;

/// Fetches the caller's recorded audio from the telephony provider.
#[async_trait]
pub trait RecordingFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("reading response body failed: {0}")]
    Body(String),
}

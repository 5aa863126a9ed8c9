use async_trait::async_trait;

use crate::application::ports::{DownloadError, RecordingFetcher};

/// Fetches recordings over plain HTTP GET.
pub struct HttpRecordingFetcher {
    client: reqwest::Client,
}

impl HttpRecordingFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpRecordingFetcher {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl RecordingFetcher for HttpRecordingFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DownloadError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(DownloadError::Status { status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DownloadError::Body(e.to_string()))?;

        tracing::debug!(url = %url, bytes = bytes.len(), "Recording fetched");

        Ok(bytes.to_vec())
    }
}

use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Publishes a local audio artifact at a URL the telephony provider can fetch.
#[async_trait]
pub trait AudioHost: Send + Sync {
    async fn publish(&self, path: &Path) -> Result<String, HostingError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HostingError {
    #[error("publish failed: {0}")]
    PublishFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

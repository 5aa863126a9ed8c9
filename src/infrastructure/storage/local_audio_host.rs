use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};
use uuid::Uuid;

use crate::application::ports::{AudioHost, HostingError};

/// Hosts reply audio from a local directory served by the HTTP router under
/// `/audio`. Each published artifact gets a fresh UUID name so URLs never
/// collide across calls.
pub struct LocalDirAudioHost {
    store: Arc<LocalFileSystem>,
    public_base_url: String,
}

impl LocalDirAudioHost {
    pub fn new(dir: PathBuf, public_base_url: String) -> Result<Self, HostingError> {
        std::fs::create_dir_all(&dir)?;
        let store = LocalFileSystem::new_with_prefix(dir)
            .map_err(|e| HostingError::PublishFailed(e.to_string()))?;
        Ok(Self {
            store: Arc::new(store),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl AudioHost for LocalDirAudioHost {
    async fn publish(&self, path: &Path) -> Result<String, HostingError> {
        let bytes = tokio::fs::read(path).await?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("mp3");
        let name = format!("{}.{}", Uuid::new_v4(), extension);

        self.store
            .put(
                &StorePath::from(name.as_str()),
                PutPayload::from(Bytes::from(bytes)),
            )
            .await
            .map_err(|e| HostingError::PublishFailed(e.to_string()))?;

        Ok(format!("{}/audio/{}", self.public_base_url, name))
    }
}

use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ArtifactKind;

/// Creates scoped temporary audio files. Every handle removes its file when
/// dropped, on success and failure paths alike; nothing is reused.
#[derive(Debug, Clone, Default)]
pub struct TempAudioStore {
    dir: Option<PathBuf>,
}

impl TempAudioStore {
    /// Store backed by the system temp directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store backed by a specific directory, useful for asserting cleanup.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    pub fn acquire(&self, kind: ArtifactKind) -> Result<TempAudio, TempStoreError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("callbridge-").suffix(kind.suffix());
        let file = match &self.dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(TempStoreError::Create)?;
        Ok(TempAudio { kind, file })
    }
}

/// A uniquely named local audio file, deleted on drop.
#[derive(Debug)]
pub struct TempAudio {
    kind: ArtifactKind,
    file: NamedTempFile,
}

impl TempAudio {
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn write_all(&mut self, bytes: &[u8]) -> Result<(), TempStoreError> {
        self.file.write_all(bytes).map_err(TempStoreError::Write)?;
        self.file.flush().map_err(TempStoreError::Write)
    }

    pub fn read(&self) -> Result<Vec<u8>, TempStoreError> {
        std::fs::read(self.path()).map_err(TempStoreError::Read)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TempStoreError {
    #[error("creating temp file failed: {0}")]
    Create(#[source] io::Error),
    #[error("writing temp file failed: {0}")]
    Write(#[source] io::Error),
    #[error("reading temp file failed: {0}")]
    Read(#[source] io::Error),
}

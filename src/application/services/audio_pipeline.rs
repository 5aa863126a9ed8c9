use std::sync::Arc;

use crate::application::ports::{
    DownloadError, RecordingFetcher, SubmissionError, TranscriptionProvider, UploadError,
};
use crate::domain::{ArtifactKind, PipelineStage};
use crate::infrastructure::storage::{TempAudio, TempAudioStore, TempStoreError};

use super::transcription::{AwaitError, PollConfig, await_completion};

/// Turns a remote recording URL into transcript text.
///
/// Stages run strictly in order: download, upload, submit, poll. The first
/// failure short-circuits the run; the recording artifact is removed on every
/// exit path.
pub struct AudioPipeline<R, P>
where
    R: RecordingFetcher,
    P: TranscriptionProvider,
{
    fetcher: Arc<R>,
    provider: Arc<P>,
    temp_store: TempAudioStore,
    poll_config: PollConfig,
}

impl<R, P> AudioPipeline<R, P>
where
    R: RecordingFetcher,
    P: TranscriptionProvider,
{
    pub fn new(
        fetcher: Arc<R>,
        provider: Arc<P>,
        temp_store: TempAudioStore,
        poll_config: PollConfig,
    ) -> Self {
        Self {
            fetcher,
            provider,
            temp_store,
            poll_config,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn process(&self, recording_url: &str) -> Result<String, PipelineError> {
        let audio = self.fetcher.fetch(recording_url).await?;
        tracing::debug!(bytes = audio.len(), "Recording downloaded");

        let mut recording = self.temp_store.acquire(ArtifactKind::Recording)?;
        recording.write_all(&audio)?;
        let recording = self.normalize(recording);

        let upload_ref = self.provider.upload(&recording.read()?).await?;
        drop(recording);
        tracing::debug!(upload_ref = %upload_ref, "Recording uploaded");

        let job = self.provider.submit(&upload_ref).await?;
        tracing::info!(job = %job, "Transcription job submitted");

        let transcript = await_completion(self.provider.as_ref(), &job, &self.poll_config).await?;
        tracing::info!(job = %job, chars = transcript.len(), "Transcript received");

        Ok(transcript)
    }

    /// Placeholder for resampling/compression; currently passes audio through
    /// untouched.
    fn normalize(&self, artifact: TempAudio) -> TempAudio {
        artifact
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("download: {0}")]
    Download(#[from] DownloadError),
    #[error("local artifact: {0}")]
    TempStore(#[from] TempStoreError),
    #[error("upload: {0}")]
    Upload(#[from] UploadError),
    #[error("submit: {0}")]
    Submit(#[from] SubmissionError),
    #[error("transcription: {0}")]
    Transcription(#[from] AwaitError),
}

impl PipelineError {
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::Download(_) | PipelineError::TempStore(_) => PipelineStage::Download,
            PipelineError::Upload(_) => PipelineStage::Upload,
            PipelineError::Submit(_) => PipelineStage::Submit,
            PipelineError::Transcription(_) => PipelineStage::Poll,
        }
    }
}

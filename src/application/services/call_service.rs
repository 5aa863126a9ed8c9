use std::sync::Arc;

use crate::application::ports::{
    AudioHost, HostingError, RecordingFetcher, ReplyError, ReplyGenerator, SpeechSynthesizer,
    SynthesisError, TranscriptionProvider,
};
use crate::domain::{ArtifactKind, PipelineStage};
use crate::infrastructure::storage::{TempAudioStore, TempStoreError};

use super::audio_pipeline::{AudioPipeline, PipelineError};

/// Full webhook round trip: transcript, AI reply, synthesized speech,
/// publicly hosted audio URL.
pub struct CallService<R, P>
where
    R: RecordingFetcher,
    P: TranscriptionProvider,
{
    pipeline: AudioPipeline<R, P>,
    reply_generator: Arc<dyn ReplyGenerator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    audio_host: Arc<dyn AudioHost>,
    temp_store: TempAudioStore,
}

impl<R, P> CallService<R, P>
where
    R: RecordingFetcher,
    P: TranscriptionProvider,
{
    pub fn new(
        pipeline: AudioPipeline<R, P>,
        reply_generator: Arc<dyn ReplyGenerator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        audio_host: Arc<dyn AudioHost>,
        temp_store: TempAudioStore,
    ) -> Self {
        Self {
            pipeline,
            reply_generator,
            synthesizer,
            audio_host,
            temp_store,
        }
    }

    /// Processes one inbound call and returns the URL of the reply audio.
    pub async fn handle(&self, recording_url: &str) -> Result<String, CallError> {
        let transcript = self.pipeline.process(recording_url).await?;

        let reply = self.reply_generator.generate(&transcript).await?;
        tracing::debug!(chars = reply.len(), "AI reply generated");

        let audio = self.synthesizer.synthesize(&reply).await?;

        let mut speech = self
            .temp_store
            .acquire(ArtifactKind::Speech)
            .map_err(CallError::TempStore)?;
        speech.write_all(&audio).map_err(CallError::TempStore)?;

        let public_url = self.audio_host.publish(speech.path()).await?;
        tracing::info!(url = %public_url, "Reply audio published");

        Ok(public_url)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CallError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),
    #[error("ai reply: {0}")]
    Reply(#[from] ReplyError),
    #[error("synthesis: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("local artifact: {0}")]
    TempStore(TempStoreError),
    #[error("hosting: {0}")]
    Hosting(#[from] HostingError),
}

impl CallError {
    pub fn stage(&self) -> PipelineStage {
        match self {
            CallError::Pipeline(e) => e.stage(),
            CallError::Reply(_) => PipelineStage::AiGeneration,
            CallError::Synthesis(_) | CallError::TempStore(_) => PipelineStage::Synthesis,
            CallError::Hosting(_) => PipelineStage::Hosting,
        }
    }
}

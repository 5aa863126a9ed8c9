mod audio_pipeline;
mod call_service;
mod transcription;

pub use audio_pipeline::{AudioPipeline, PipelineError};
pub use call_service::{CallError, CallService};
pub use transcription::{AwaitError, PollConfig, await_completion};

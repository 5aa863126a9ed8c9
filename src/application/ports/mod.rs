mod audio_host;
mod recording_fetcher;
mod reply_generator;
mod speech_synthesizer;
mod transcription_provider;

pub use audio_host::{AudioHost, HostingError};
pub use recording_fetcher::{DownloadError, RecordingFetcher};
pub use reply_generator::{ReplyError, ReplyGenerator};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use transcription_provider::{
    PollError, SubmissionError, TranscriptionProvider, UploadError,
};

pub mod download;
pub mod llm;
pub mod observability;
pub mod speech;
pub mod storage;
pub mod transcription;

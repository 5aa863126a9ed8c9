use async_trait::async_trait;

use crate::domain::{JobId, JobSnapshot, UploadRef};

/// The three primitives of a remote speech-to-text service's async protocol.
///
/// `upload` and `submit` are one-shot; retrying them is the caller's decision.
/// `poll` reports a single status observation and distinguishes transient
/// faults, which the poll loop may retry, from permanent rejections, which it
/// must not.
#[async_trait]
pub trait TranscriptionProvider: Send + Sync {
    async fn upload(&self, audio: &[u8]) -> Result<UploadRef, UploadError>;

    async fn submit(&self, upload: &UploadRef) -> Result<JobId, SubmissionError>;

    async fn poll(&self, job: &JobId) -> Result<JobSnapshot, PollError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("upload request failed: {0}")]
    Network(String),
    #[error("upload rejected with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid upload response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("submission request failed: {0}")]
    Network(String),
    #[error("submission rejected with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid submission response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    /// Network fault or server-side hiccup; safe to retry a few times.
    #[error("status poll failed: {0}")]
    Transient(String),
    /// Permanent rejection (bad credentials, unknown job); never retried.
    #[error("status poll rejected: {0}")]
    Rejected(String),
}

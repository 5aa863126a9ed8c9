use std::fmt;

use super::JobStatus;

/// Service-issued identifier for a submitted transcription job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque reference returned by the upload endpoint, consumed by job submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRef(String);

impl UploadRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UploadRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One observed status of a remote job. The transcript is only present once
/// the job has completed; the error message only once it has failed.
#[derive(Debug, Clone)]
pub struct JobSnapshot {
    pub status: JobStatus,
    pub text: Option<String>,
    pub error: Option<String>,
}

impl JobSnapshot {
    pub fn new(status: JobStatus) -> Self {
        Self {
            status,
            text: None,
            error: None,
        }
    }

    pub fn with_text(status: JobStatus, text: impl Into<String>) -> Self {
        Self {
            status,
            text: Some(text.into()),
            error: None,
        }
    }
}

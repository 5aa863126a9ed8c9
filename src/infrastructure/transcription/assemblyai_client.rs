use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::application::ports::{
    PollError, SubmissionError, TranscriptionProvider, UploadError,
};
use crate::domain::{JobId, JobSnapshot, UploadRef};

const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com";

/// AssemblyAI v2 REST client: binary upload, job submission, status poll.
pub struct AssemblyAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AssemblyAiClient {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
        }
    }
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Deserialize)]
struct SubmitResponse {
    id: String,
}

#[derive(Deserialize)]
struct StatusResponse {
    status: String,
    text: Option<String>,
    error: Option<String>,
}

#[async_trait]
impl TranscriptionProvider for AssemblyAiClient {
    async fn upload(&self, audio: &[u8]) -> Result<UploadRef, UploadError> {
        let url = format!("{}/v2/upload", self.base_url);

        tracing::debug!(bytes = audio.len(), "Uploading audio to AssemblyAI");

        let response = self
            .client
            .post(&url)
            .header("authorization", &self.api_key)
            .body(audio.to_vec())
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(UploadError::Status { status, body });
        }

        let parsed: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

        Ok(UploadRef::new(parsed.upload_url))
    }

    async fn submit(&self, upload: &UploadRef) -> Result<JobId, SubmissionError> {
        let url = format!("{}/v2/transcript", self.base_url);

        let response = self
            .client
            .post(&url)
            .header("authorization", &self.api_key)
            .json(&json!({ "audio_url": upload.as_str() }))
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SubmissionError::Status { status, body });
        }

        let parsed: SubmitResponse = response
            .json()
            .await
            .map_err(|e| SubmissionError::InvalidResponse(e.to_string()))?;

        Ok(JobId::new(parsed.id))
    }

    async fn poll(&self, job: &JobId) -> Result<JobSnapshot, PollError> {
        let url = format!("{}/v2/transcript/{}", self.base_url, job);

        let response = self
            .client
            .get(&url)
            .header("authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| PollError::Transient(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            let message = format!("status {}: {}", status, body);
            // Client-side rejections will not heal on retry; server faults may.
            return if status.is_client_error() {
                Err(PollError::Rejected(message))
            } else {
                Err(PollError::Transient(message))
            };
        }

        let parsed: StatusResponse = response
            .json()
            .await
            .map_err(|e| PollError::Transient(e.to_string()))?;

        let job_status = parsed
            .status
            .parse()
            .map_err(PollError::Rejected)?;

        Ok(JobSnapshot {
            status: job_status,
            text: parsed.text,
            error: parsed.error,
        })
    }
}

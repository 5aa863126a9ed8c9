use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Synthesizes reply speech via the OpenAI audio API, returning mp3 bytes.
pub struct OpenAiSpeechSynthesizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    voice: String,
}

impl OpenAiSpeechSynthesizer {
    pub fn new(api_key: String, base_url: Option<String>, model: String, voice: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model,
            voice,
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for OpenAiSpeechSynthesizer {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SynthesisError> {
        let url = format!("{}/audio/speech", self.base_url);

        let body = json!({
            "model": self.model,
            "voice": self.voice,
            "input": text,
            "response_format": "mp3",
        });

        tracing::debug!(model = %self.model, chars = text.len(), "Synthesizing speech");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SynthesisError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Body(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

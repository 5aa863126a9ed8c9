use async_trait::async_trait;

/// Produces the assistant's reply to the caller's transcribed words.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    async fn generate(&self, user_text: &str) -> Result<String, ReplyError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

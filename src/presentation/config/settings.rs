use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::PollConfig;

/// Process configuration, read once at startup. Missing credentials are a
/// fatal startup error, never a per-request failure.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub transcription: TranscriptionSettings,
    pub openai: OpenAiSettings,
    pub hosting: HostingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct TranscriptionSettings {
    pub api_key: String,
    /// Overridable for tests; `None` uses the production endpoint.
    pub base_url: Option<String>,
    pub poll_interval: Duration,
    pub max_wait: Duration,
    pub transient_retries: u32,
}

impl TranscriptionSettings {
    pub fn poll_config(&self) -> PollConfig {
        PollConfig {
            poll_interval: self.poll_interval,
            max_wait: self.max_wait,
            transient_retries: self.transient_retries,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub chat_model: String,
    pub speech_model: String,
    pub voice: String,
}

#[derive(Debug, Clone)]
pub struct HostingSettings {
    pub dir: PathBuf,
    pub public_base_url: String,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = optional("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = parsed("SERVER_PORT", 5000)?;

        let server = ServerSettings {
            host: host.clone(),
            port,
        };

        let transcription = TranscriptionSettings {
            api_key: required("ASSEMBLYAI_API_KEY")?,
            base_url: optional("ASSEMBLYAI_BASE_URL"),
            poll_interval: Duration::from_millis(parsed("TRANSCRIPTION_POLL_INTERVAL_MS", 1000)?),
            max_wait: Duration::from_secs(parsed("TRANSCRIPTION_MAX_WAIT_SECS", 120)?),
            transient_retries: parsed("TRANSCRIPTION_POLL_RETRIES", 3)?,
        };

        let openai = OpenAiSettings {
            api_key: required("OPENAI_API_KEY")?,
            base_url: optional("OPENAI_BASE_URL"),
            chat_model: optional("OPENAI_CHAT_MODEL")
                .unwrap_or_else(|| "gpt-3.5-turbo".to_string()),
            speech_model: optional("OPENAI_SPEECH_MODEL").unwrap_or_else(|| "tts-1".to_string()),
            voice: optional("OPENAI_VOICE").unwrap_or_else(|| "alloy".to_string()),
        };

        let hosting = HostingSettings {
            dir: optional("AUDIO_HOST_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public_audio")),
            public_base_url: optional("PUBLIC_BASE_URL")
                .unwrap_or_else(|| format!("http://{}:{}", host, port)),
        };

        Ok(Self {
            server,
            transcription,
            openai,
            hosting,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::MissingVar(name))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parsed<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            var: name,
            reason: e.to_string(),
        }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

use std::time::Duration;

use callbridge::presentation::config::{ConfigError, Settings};

// All environment mutation happens inside this single test so parallel test
// threads never race on process-global state.
#[test]
fn settings_from_env_requires_credentials_and_applies_defaults() {
    for var in [
        "SERVER_HOST",
        "SERVER_PORT",
        "ASSEMBLYAI_API_KEY",
        "ASSEMBLYAI_BASE_URL",
        "TRANSCRIPTION_POLL_INTERVAL_MS",
        "TRANSCRIPTION_MAX_WAIT_SECS",
        "TRANSCRIPTION_POLL_RETRIES",
        "OPENAI_API_KEY",
        "OPENAI_BASE_URL",
        "OPENAI_CHAT_MODEL",
        "OPENAI_SPEECH_MODEL",
        "OPENAI_VOICE",
        "AUDIO_HOST_DIR",
        "PUBLIC_BASE_URL",
    ] {
        std::env::remove_var(var);
    }

    // Missing transcription credential is fatal.
    let err = Settings::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::MissingVar("ASSEMBLYAI_API_KEY")));

    std::env::set_var("ASSEMBLYAI_API_KEY", "aai-key");
    let err = Settings::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::MissingVar("OPENAI_API_KEY")));

    // With both credentials present, everything else falls back to defaults.
    std::env::set_var("OPENAI_API_KEY", "oai-key");
    let settings = Settings::from_env().unwrap();
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.transcription.api_key, "aai-key");
    assert_eq!(settings.transcription.poll_interval, Duration::from_secs(1));
    assert_eq!(settings.transcription.max_wait, Duration::from_secs(120));
    assert_eq!(settings.transcription.transient_retries, 3);
    assert_eq!(settings.openai.chat_model, "gpt-3.5-turbo");
    assert_eq!(settings.hosting.public_base_url, "http://0.0.0.0:5000");

    // Explicit overrides win.
    std::env::set_var("SERVER_PORT", "8080");
    std::env::set_var("TRANSCRIPTION_MAX_WAIT_SECS", "30");
    std::env::set_var("PUBLIC_BASE_URL", "https://calls.example.com");
    let settings = Settings::from_env().unwrap();
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.transcription.max_wait, Duration::from_secs(30));
    assert_eq!(
        settings.hosting.public_base_url,
        "https://calls.example.com"
    );

    // Malformed numbers are a startup error, not a silent default.
    std::env::set_var("SERVER_PORT", "not-a-port");
    let err = Settings::from_env().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            var: "SERVER_PORT",
            ..
        }
    ));

    for var in [
        "ASSEMBLYAI_API_KEY",
        "OPENAI_API_KEY",
        "SERVER_PORT",
        "TRANSCRIPTION_MAX_WAIT_SECS",
        "PUBLIC_BASE_URL",
    ] {
        std::env::remove_var(var);
    }
}

mod settings;

pub use settings::{
    ConfigError, HostingSettings, OpenAiSettings, ServerSettings, Settings, TranscriptionSettings,
};

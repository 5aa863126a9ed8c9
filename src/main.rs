use std::sync::Arc;

use tokio::net::TcpListener;

use callbridge::application::services::{AudioPipeline, CallService};
use callbridge::infrastructure::download::HttpRecordingFetcher;
use callbridge::infrastructure::llm::OpenAiChatClient;
use callbridge::infrastructure::observability::{TracingConfig, init_tracing};
use callbridge::infrastructure::speech::OpenAiSpeechSynthesizer;
use callbridge::infrastructure::storage::{LocalDirAudioHost, TempAudioStore};
use callbridge::infrastructure::transcription::AssemblyAiClient;
use callbridge::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Credentials are validated here, once; a missing key aborts startup.
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::default(), settings.server.port);

    let fetcher = Arc::new(HttpRecordingFetcher::default());
    let provider = Arc::new(AssemblyAiClient::new(
        settings.transcription.api_key.clone(),
        settings.transcription.base_url.clone(),
    ));
    let temp_store = TempAudioStore::new();

    let pipeline = AudioPipeline::new(
        fetcher,
        provider,
        temp_store.clone(),
        settings.transcription.poll_config(),
    );

    let reply_generator = Arc::new(OpenAiChatClient::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        settings.openai.chat_model.clone(),
    ));
    let synthesizer = Arc::new(OpenAiSpeechSynthesizer::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        settings.openai.speech_model.clone(),
        settings.openai.voice.clone(),
    ));
    let audio_host = Arc::new(LocalDirAudioHost::new(
        settings.hosting.dir.clone(),
        settings.hosting.public_base_url.clone(),
    )?);

    let call_service = Arc::new(CallService::new(
        pipeline,
        reply_generator,
        synthesizer,
        audio_host,
        temp_store,
    ));

    let state = AppState {
        call_service,
        settings: settings.clone(),
    };

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, create_router(state)).await?;

    Ok(())
}

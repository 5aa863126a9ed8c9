use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{RecordingFetcher, TranscriptionProvider};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{handle_call_handler, health_handler};
use crate::presentation::state::AppState;

pub fn create_router<R, P>(state: AppState<R, P>) -> Router
where
    R: RecordingFetcher + 'static,
    P: TranscriptionProvider + 'static,
{
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let audio_dir = state.settings.hosting.dir.clone();

    Router::new()
        .route("/health", get(health_handler))
        .route("/handle_call", post(handle_call_handler::<R, P>))
        .nest_service("/audio", ServeDir::new(audio_dir))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .with_state(state)
}

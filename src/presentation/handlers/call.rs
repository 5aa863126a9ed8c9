use axum::Form;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::application::ports::{RecordingFetcher, TranscriptionProvider};
use crate::presentation::state::AppState;

/// Form payload the telephony provider posts after a recording finishes.
#[derive(Debug, Deserialize)]
pub struct CallWebhook {
    #[serde(rename = "RecordingUrl")]
    pub recording_url: String,
}

/// Webhook round trip: recording in, TwiML `<Play>` with the reply audio out.
///
/// Failures answer 500 with a generic body; stage and cause go to the logs
/// only, so neither credentials nor internal URLs can leak to the provider.
#[tracing::instrument(skip(state, webhook))]
pub async fn handle_call_handler<R, P>(
    State(state): State<AppState<R, P>>,
    Form(webhook): Form<CallWebhook>,
) -> Response
where
    R: RecordingFetcher + 'static,
    P: TranscriptionProvider + 'static,
{
    match state.call_service.handle(&webhook.recording_url).await {
        Ok(play_url) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/xml")],
            play_response(&play_url),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(stage = %e.stage(), error = %e, "Call processing failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "call processing failed").into_response()
        }
    }
}

fn play_response(url: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Play>{}</Play></Response>",
        escape_xml(url)
    )
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_response_wraps_url_in_twiml() {
        let xml = play_response("http://host/audio/a.mp3");
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Play>http://host/audio/a.mp3</Play></Response>"
        );
    }

    #[test]
    fn play_response_escapes_query_separators() {
        let xml = play_response("http://host/audio/a.mp3?sig=a&b=<c>");
        assert!(xml.contains("a.mp3?sig=a&amp;b=&lt;c&gt;"));
    }
}

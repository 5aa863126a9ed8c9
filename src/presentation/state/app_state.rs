use std::sync::Arc;

use crate::application::ports::{RecordingFetcher, TranscriptionProvider};
use crate::application::services::CallService;
use crate::presentation::config::Settings;

pub struct AppState<R, P>
where
    R: RecordingFetcher,
    P: TranscriptionProvider,
{
    pub call_service: Arc<CallService<R, P>>,
    pub settings: Settings,
}

impl<R, P> Clone for AppState<R, P>
where
    R: RecordingFetcher,
    P: TranscriptionProvider,
{
    fn clone(&self) -> Self {
        Self {
            call_service: Arc::clone(&self.call_service),
            settings: self.settings.clone(),
        }
    }
}

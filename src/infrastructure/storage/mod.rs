mod local_audio_host;
mod temp_audio;

pub use local_audio_host::LocalDirAudioHost;
pub use temp_audio::{TempAudio, TempAudioStore, TempStoreError};

/// What kind of audio a local artifact holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// Caller audio fetched from the telephony provider.
    Recording,
    /// Synthesized reply audio.
    Speech,
}

impl ArtifactKind {
    pub fn suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Recording => ".wav",
            ArtifactKind::Speech => ".mp3",
        }
    }
}

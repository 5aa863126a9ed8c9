use std::fmt;

/// Phase of a call-processing run, used to tag failures at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Download,
    Upload,
    Submit,
    Poll,
    AiGeneration,
    Synthesis,
    Hosting,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::Download => "download",
            PipelineStage::Upload => "upload",
            PipelineStage::Submit => "submit",
            PipelineStage::Poll => "poll",
            PipelineStage::AiGeneration => "ai-generation",
            PipelineStage::Synthesis => "synthesis",
            PipelineStage::Hosting => "hosting",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

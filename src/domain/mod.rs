mod artifact;
mod job;
mod job_status;
mod pipeline_stage;

pub use artifact::ArtifactKind;
pub use job::{JobId, JobSnapshot, UploadRef};
pub use job_status::JobStatus;
pub use pipeline_stage::PipelineStage;

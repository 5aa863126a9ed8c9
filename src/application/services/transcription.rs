use std::time::Duration;

use tokio::time::Instant;

use crate::application::ports::{PollError, TranscriptionProvider};
use crate::domain::{JobId, JobStatus};

/// Tuning for the status poll loop.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Suspension between consecutive status polls.
    pub poll_interval: Duration,
    /// Hard bound on the whole wait; exceeding it is a caller-visible timeout.
    pub max_wait: Duration,
    /// Consecutive transient poll faults tolerated before giving up.
    pub transient_retries: u32,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(1),
            max_wait: Duration::from_secs(120),
            transient_retries: 3,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AwaitError {
    #[error("status poll failed: {0}")]
    Poll(#[from] PollError),
    #[error("transcription job {job} failed: {reason}")]
    JobFailed { job: JobId, reason: String },
    #[error("transcription did not finish within {0:?}")]
    Timeout(Duration),
    #[error("completed job {0} returned no transcript")]
    MissingTranscript(JobId),
}

/// Polls `job` until it reaches a terminal status.
///
/// Returns the transcript on `completed`; fails immediately on `failed`
/// without polling again. Non-terminal statuses suspend for
/// `config.poll_interval` between polls, and the loop is bounded by
/// `config.max_wait`. Transient poll faults are retried up to
/// `config.transient_retries` consecutive times; a permanent rejection
/// surfaces at once.
pub async fn await_completion<P>(
    provider: &P,
    job: &JobId,
    config: &PollConfig,
) -> Result<String, AwaitError>
where
    P: TranscriptionProvider + ?Sized,
{
    let started = Instant::now();
    let mut transient_faults: u32 = 0;

    loop {
        match provider.poll(job).await {
            Ok(snapshot) => {
                transient_faults = 0;
                match snapshot.status {
                    JobStatus::Completed => {
                        return snapshot
                            .text
                            .ok_or_else(|| AwaitError::MissingTranscript(job.clone()));
                    }
                    JobStatus::Failed => {
                        return Err(AwaitError::JobFailed {
                            job: job.clone(),
                            reason: snapshot
                                .error
                                .unwrap_or_else(|| "no reason reported".to_string()),
                        });
                    }
                    JobStatus::Queued | JobStatus::Processing => {
                        tracing::debug!(job = %job, status = %snapshot.status, "Transcription pending");
                    }
                }
            }
            Err(e @ PollError::Rejected(_)) => return Err(AwaitError::Poll(e)),
            Err(PollError::Transient(reason)) => {
                transient_faults += 1;
                if transient_faults > config.transient_retries {
                    return Err(AwaitError::Poll(PollError::Transient(reason)));
                }
                tracing::warn!(
                    job = %job,
                    attempt = transient_faults,
                    reason = %reason,
                    "Transient poll fault, retrying"
                );
            }
        }

        if started.elapsed() >= config.max_wait {
            return Err(AwaitError::Timeout(config.max_wait));
        }
        tokio::time::sleep(config.poll_interval).await;
    }
}

//! Background polling of a submitted job.

use super::DeployRequest;
use crate::error::{DeployError, Result};
use crate::platform::{JobSummary, ReleaseJobs};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Polls one job until it leaves the pending/running states
pub(super) struct JobObserver<C> {
    jobs: Arc<C>,
    app_id: String,
    branch_name: String,
    interval: Duration,
    summary: JobSummary,
}

impl<C: ReleaseJobs + 'static> JobObserver<C> {
    pub(super) fn new(jobs: Arc<C>, request: &DeployRequest, started: JobSummary) -> Self {
        Self {
            jobs,
            app_id: request.app_id.clone(),
            branch_name: request.branch_name.clone(),
            interval: request.observation_interval,
            summary: started,
        }
    }

    /// Poll until the job is terminal and return its last summary
    ///
    /// The status is checked before each sleep, so a job that is already
    /// terminal when submitted is returned without any query.
    pub(super) async fn run(mut self) -> Result<JobSummary> {
        let mut polls = 0u32;

        while self.summary.status.is_in_progress() {
            tokio::time::sleep(self.interval).await;

            polls += 1;
            let current = self
                .jobs
                .get_job(&self.app_id, &self.branch_name, &self.summary.job_id)
                .await
                .map_err(|source| DeployError::GetJob {
                    job_id: self.summary.job_id.clone(),
                    source,
                })?;

            log::debug!("Poll {} of job {}: {}", polls, current.job_id, current.status);
            if current.status != self.summary.status {
                log::info!(
                    "Job {} status {} -> {}",
                    self.summary.job_id,
                    self.summary.status,
                    current.status
                );
            }

            self.summary.status = current.status;
        }

        Ok(self.summary)
    }
}

/// Owns the spawned observer task and aborts it when dropped
///
/// Covers every way `deploy` can return, including its future being dropped
/// by the caller mid-poll.
pub(super) struct ObserverGuard {
    handle: JoinHandle<Result<JobSummary>>,
}

impl ObserverGuard {
    pub(super) fn spawn<C: ReleaseJobs + 'static>(observer: JobObserver<C>) -> Self {
        Self {
            handle: tokio::spawn(observer.run()),
        }
    }

    /// Wait for the observer's single outcome
    pub(super) async fn join(&mut self) -> Result<JobSummary> {
        match (&mut self.handle).await {
            Ok(outcome) => outcome,
            Err(e) => Err(DeployError::ObserverLost {
                reason: e.to_string(),
            }),
        }
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        // No-op when the task already finished.
        self.handle.abort();
    }
}

//! Deployment orchestration.
//!
//! A deploy submits one release job, then observes it from a background task
//! until it reaches a terminal status or the observation window closes:
//!
//! 1. `StartJob` on the caller's task; failure is returned immediately.
//! 2. A spawned observer polls `GetJob` every `observation_interval` while the
//!    last known status is pending or running.
//! 3. The observer's outcome is raced against `observation_timeout`.
//! 4. The terminal status is mapped to success or a [`DeployError`].
//!
//! The observer is aborted on every exit path, so no query outlives `deploy`.

mod observer;

use crate::error::{ConfigError, DeployError, Result};
use crate::platform::{JobStatus, JobSummary, JobType, ReleaseJobs};
use observer::{JobObserver, ObserverGuard};
use std::sync::Arc;
use std::time::Duration;

/// Branch deployed when none is given
pub const DEFAULT_BRANCH_NAME: &str = "main";

/// Observation window when none is given
pub const DEFAULT_OBSERVATION_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Poll interval when none is given
pub const DEFAULT_OBSERVATION_INTERVAL: Duration = Duration::from_secs(5);

/// Parameters of a single deploy invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployRequest {
    /// Amplify app id
    pub app_id: String,
    /// Branch to release
    pub branch_name: String,
    /// Time allowed for the job to reach a terminal status
    pub observation_timeout: Duration,
    /// Delay between status queries
    pub observation_interval: Duration,
}

impl DeployRequest {
    /// Request for `app_id` with default branch, timeout and interval
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            branch_name: DEFAULT_BRANCH_NAME.to_string(),
            observation_timeout: DEFAULT_OBSERVATION_TIMEOUT,
            observation_interval: DEFAULT_OBSERVATION_INTERVAL,
        }
    }

    /// Set the branch name
    pub fn with_branch_name(mut self, branch_name: impl Into<String>) -> Self {
        self.branch_name = branch_name.into();
        self
    }

    /// Set the observation window
    pub fn with_observation_timeout(mut self, timeout: Duration) -> Self {
        self.observation_timeout = timeout;
        self
    }

    /// Set the poll interval
    pub fn with_observation_interval(mut self, interval: Duration) -> Self {
        self.observation_interval = interval;
        self
    }

    /// Reject requests that cannot be observed sensibly
    ///
    /// A zero interval would query the API in a tight loop. An interval longer
    /// than the timeout is accepted: the deadline simply fires before the
    /// first poll.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.app_id.trim().is_empty() {
            return Err(ConfigError::MissingArgument {
                argument: "app-id".to_string(),
            });
        }
        if self.branch_name.trim().is_empty() {
            return Err(ConfigError::MissingArgument {
                argument: "branch-name".to_string(),
            });
        }
        if self.observation_timeout.is_zero() {
            return Err(ConfigError::ZeroDuration {
                argument: "observation-timeout".to_string(),
            });
        }
        if self.observation_interval.is_zero() {
            return Err(ConfigError::ZeroDuration {
                argument: "observation-interval".to_string(),
            });
        }
        Ok(())
    }

    /// Whether the deadline fires before the first status query
    pub fn deadline_precedes_first_poll(&self) -> bool {
        self.observation_interval > self.observation_timeout
    }
}

/// Runs deploys against a release job API
pub struct Deployer<C> {
    jobs: Arc<C>,
}

impl<C> Clone for Deployer<C> {
    fn clone(&self) -> Self {
        Self {
            jobs: Arc::clone(&self.jobs),
        }
    }
}

impl<C: ReleaseJobs + 'static> Deployer<C> {
    /// Create a deployer over `jobs`
    pub fn new(jobs: C) -> Self {
        Self::from_arc(Arc::new(jobs))
    }

    /// Create a deployer sharing an existing client
    pub fn from_arc(jobs: Arc<C>) -> Self {
        Self { jobs }
    }

    /// Start a release job and wait until it finishes
    ///
    /// Returns the final job summary when the job succeeded.
    pub async fn deploy(&self, request: &DeployRequest) -> Result<JobSummary> {
        request.validate()?;
        if request.deadline_precedes_first_poll() {
            log::warn!(
                "Observation interval {:?} exceeds timeout {:?}; the job will not be polled",
                request.observation_interval,
                request.observation_timeout
            );
        }

        let job_type = JobType::Release;
        let started = self
            .jobs
            .start_job(&request.app_id, &request.branch_name, job_type)
            .await
            .map_err(|source| DeployError::StartJob { source })?;

        log::info!(
            "Started {} job {} for {}/{} ({})",
            job_type.as_str(),
            started.job_id,
            request.app_id,
            request.branch_name,
            started.status
        );

        let job_id = started.job_id.clone();
        let observer = JobObserver::new(Arc::clone(&self.jobs), request, started);
        let mut guard = ObserverGuard::spawn(observer);

        let finished = match tokio::time::timeout(request.observation_timeout, guard.join()).await
        {
            Ok(outcome) => outcome?,
            Err(_elapsed) => {
                log::warn!(
                    "Job {} still running after {:?}, giving up",
                    job_id,
                    request.observation_timeout
                );
                return Err(DeployError::DeadlineExceeded {
                    job_id,
                    timeout: request.observation_timeout,
                });
            }
        };

        resolve(finished)
    }
}

/// Map a terminal job summary to the deploy result
fn resolve(summary: JobSummary) -> Result<JobSummary> {
    match summary.status {
        JobStatus::Succeeded => Ok(summary),
        JobStatus::Failed => Err(DeployError::JobFailed {
            job_id: summary.job_id,
        }),
        status => Err(DeployError::UnexpectedStatus {
            job_id: summary.job_id,
            status,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = DeployRequest::new("d1a2b3");
        assert_eq!(request.branch_name, "main");
        assert_eq!(request.observation_timeout, Duration::from_secs(300));
        assert_eq!(request.observation_interval, Duration::from_secs(5));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_app_id() {
        let err = DeployRequest::new("  ").validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingArgument {
                argument: "app-id".to_string()
            }
        );
    }

    #[test]
    fn test_validate_rejects_zero_durations() {
        let request = DeployRequest::new("app").with_observation_interval(Duration::ZERO);
        assert!(matches!(
            request.validate(),
            Err(ConfigError::ZeroDuration { argument }) if argument == "observation-interval"
        ));

        let request = DeployRequest::new("app").with_observation_timeout(Duration::ZERO);
        assert!(matches!(
            request.validate(),
            Err(ConfigError::ZeroDuration { argument }) if argument == "observation-timeout"
        ));
    }

    #[test]
    fn test_validate_allows_interval_longer_than_timeout() {
        let request = DeployRequest::new("app")
            .with_observation_timeout(Duration::from_secs(1))
            .with_observation_interval(Duration::from_secs(5));
        assert!(request.validate().is_ok());
        assert!(request.deadline_precedes_first_poll());
        assert!(!DeployRequest::new("app").deadline_precedes_first_poll());
    }

    #[test]
    fn test_resolve_terminal_statuses() {
        assert!(resolve(JobSummary::new("j1", JobStatus::Succeeded)).is_ok());

        let err = resolve(JobSummary::new("j1", JobStatus::Failed)).unwrap_err();
        assert!(err.to_string().contains("job failed"));

        let err = resolve(JobSummary::new("j1", JobStatus::Other("CANCELLED".into()))).unwrap_err();
        assert!(err.to_string().contains("unexpected job status: CANCELLED"));
    }
}

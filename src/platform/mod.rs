//! Remote release job API.
//!
//! The orchestrator only needs two calls from the hosting platform: submit a
//! release job and read its summary back. [`ReleaseJobs`] is that seam;
//! [`AmplifyJobs`] is the production implementation.

mod amplify;

pub use amplify::{AmplifyJobs, ClientOptions};

use crate::error::PlatformError;
use async_trait::async_trait;
use std::fmt;

/// Kind of job submitted to the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    /// Build and deploy the branch head
    Release,
}

impl JobType {
    /// Wire spelling used by the platform
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Release => "RELEASE",
        }
    }
}

/// Status of a remote job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// Queued, not started yet
    Pending,
    /// Build or deploy in progress
    Running,
    /// Finished successfully
    Succeeded,
    /// Finished with a failure
    Failed,
    /// Any other platform value, kept verbatim
    Other(String),
}

impl JobStatus {
    /// Parse the platform's wire spelling
    pub fn from_wire(value: &str) -> Self {
        match value {
            "PENDING" => JobStatus::Pending,
            "RUNNING" => JobStatus::Running,
            "SUCCEED" => JobStatus::Succeeded,
            "FAILED" => JobStatus::Failed,
            other => JobStatus::Other(other.to_string()),
        }
    }

    /// Wire spelling of this status
    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Pending => "PENDING",
            JobStatus::Running => "RUNNING",
            JobStatus::Succeeded => "SUCCEED",
            JobStatus::Failed => "FAILED",
            JobStatus::Other(value) => value,
        }
    }

    /// Whether the job may still change status
    pub fn is_in_progress(&self) -> bool {
        matches!(self, JobStatus::Pending | JobStatus::Running)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier and status of a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    /// Platform job id
    pub job_id: String,
    /// Status at the time of the response
    pub status: JobStatus,
}

impl JobSummary {
    /// Create a summary
    pub fn new(job_id: impl Into<String>, status: JobStatus) -> Self {
        Self {
            job_id: job_id.into(),
            status,
        }
    }
}

/// Start and query release jobs for an app branch
#[async_trait]
pub trait ReleaseJobs: Send + Sync {
    /// Submit a job for `branch_name` of `app_id`
    async fn start_job(
        &self,
        app_id: &str,
        branch_name: &str,
        job_type: JobType,
    ) -> Result<JobSummary, PlatformError>;

    /// Fetch the current summary of `job_id`
    async fn get_job(
        &self,
        app_id: &str,
        branch_name: &str,
        job_id: &str,
    ) -> Result<JobSummary, PlatformError>;
}

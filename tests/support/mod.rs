//! Scripted in-memory job API for orchestrator tests.

#![allow(dead_code)]

use amplify_release::{JobStatus, JobSummary, JobType, PlatformError, ReleaseJobs};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

pub const JOB_ID: &str = "j1";

/// Replays a fixed sequence of job statuses
///
/// `start_job` answers with the configured initial status. Each `get_job`
/// pops the next scripted response; once the script is exhausted the job
/// reports RUNNING forever.
#[derive(Debug)]
pub struct ScriptedJobs {
    start: Mutex<Option<Result<JobSummary, PlatformError>>>,
    polls: Mutex<VecDeque<Result<JobStatus, PlatformError>>>,
    started_with: Mutex<Vec<(String, String, JobType)>>,
    queried_with: Mutex<Vec<(String, String, String)>>,
}

impl ScriptedJobs {
    pub fn starting_as(status: JobStatus) -> Self {
        Self {
            start: Mutex::new(Some(Ok(JobSummary::new(JOB_ID, status)))),
            polls: Mutex::new(VecDeque::new()),
            started_with: Mutex::new(Vec::new()),
            queried_with: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_start(message: &str) -> Self {
        let jobs = Self::starting_as(JobStatus::Pending);
        *jobs.start.lock().unwrap() = Some(Err(api_error("StartJob", message)));
        jobs
    }

    pub fn then(self, status: JobStatus) -> Self {
        self.polls.lock().unwrap().push_back(Ok(status));
        self
    }

    pub fn then_error(self, message: &str) -> Self {
        self.polls
            .lock()
            .unwrap()
            .push_back(Err(api_error("GetJob", message)));
        self
    }

    pub fn start_calls(&self) -> Vec<(String, String, JobType)> {
        self.started_with.lock().unwrap().clone()
    }

    pub fn get_calls(&self) -> Vec<(String, String, String)> {
        self.queried_with.lock().unwrap().clone()
    }

    pub fn get_call_count(&self) -> usize {
        self.queried_with.lock().unwrap().len()
    }
}

fn api_error(operation: &str, message: &str) -> PlatformError {
    PlatformError::Api {
        operation: operation.to_string(),
        message: message.to_string(),
    }
}

#[async_trait]
impl ReleaseJobs for ScriptedJobs {
    async fn start_job(
        &self,
        app_id: &str,
        branch_name: &str,
        job_type: JobType,
    ) -> Result<JobSummary, PlatformError> {
        self.started_with.lock().unwrap().push((
            app_id.to_string(),
            branch_name.to_string(),
            job_type,
        ));
        self.start
            .lock()
            .unwrap()
            .take()
            .expect("start_job called more than once")
    }

    async fn get_job(
        &self,
        app_id: &str,
        branch_name: &str,
        job_id: &str,
    ) -> Result<JobSummary, PlatformError> {
        self.queried_with.lock().unwrap().push((
            app_id.to_string(),
            branch_name.to_string(),
            job_id.to_string(),
        ));
        let next = self
            .polls
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(JobStatus::Running));
        next.map(|status| JobSummary::new(job_id, status))
    }
}

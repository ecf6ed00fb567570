//! AWS Amplify implementation of the release job API.

use super::{JobStatus, JobSummary, JobType, ReleaseJobs};
use crate::error::PlatformError;
use async_trait::async_trait;
use aws_sdk_amplify::config::Region;
use aws_sdk_amplify::error::DisplayErrorContext;
use aws_sdk_amplify::types as amplify;

/// Overrides for the ambient AWS configuration chain
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Named profile from the shared config files
    pub profile: Option<String>,
    /// Region the Amplify app lives in
    pub region: Option<String>,
}

/// Release job API backed by the Amplify SDK client
#[derive(Debug, Clone)]
pub struct AmplifyJobs {
    client: aws_sdk_amplify::Client,
}

impl AmplifyJobs {
    /// Load the AWS configuration chain and build a client
    ///
    /// Credentials come from the usual sources (environment, profile, web
    /// identity, instance role); `options` only narrows profile and region.
    pub async fn connect(options: &ClientOptions) -> Result<Self, PlatformError> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(profile) = &options.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &options.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        if sdk_config.region().is_none() {
            return Err(PlatformError::Api {
                operation: "LoadConfig".to_string(),
                message: "no AWS region configured".to_string(),
            });
        }
        log::debug!("Using AWS region {:?}", sdk_config.region());

        Ok(Self {
            client: aws_sdk_amplify::Client::new(&sdk_config),
        })
    }
}

fn api_error(operation: &str, err: impl std::error::Error) -> PlatformError {
    PlatformError::Api {
        operation: operation.to_string(),
        message: DisplayErrorContext(err).to_string(),
    }
}

fn missing_field(operation: &str, field: &str) -> PlatformError {
    PlatformError::MissingField {
        operation: operation.to_string(),
        field: field.to_string(),
    }
}

fn to_summary(summary: &amplify::JobSummary) -> JobSummary {
    JobSummary::new(summary.job_id(), JobStatus::from_wire(summary.status().as_str()))
}

#[async_trait]
impl ReleaseJobs for AmplifyJobs {
    async fn start_job(
        &self,
        app_id: &str,
        branch_name: &str,
        job_type: JobType,
    ) -> Result<JobSummary, PlatformError> {
        let job_type = match job_type {
            JobType::Release => amplify::JobType::Release,
        };

        let output = self
            .client
            .start_job()
            .app_id(app_id)
            .branch_name(branch_name)
            .job_type(job_type)
            .send()
            .await
            .map_err(|e| api_error("StartJob", e))?;

        output
            .job_summary()
            .map(to_summary)
            .ok_or_else(|| missing_field("StartJob", "jobSummary"))
    }

    async fn get_job(
        &self,
        app_id: &str,
        branch_name: &str,
        job_id: &str,
    ) -> Result<JobSummary, PlatformError> {
        let output = self
            .client
            .get_job()
            .app_id(app_id)
            .branch_name(branch_name)
            .job_id(job_id)
            .send()
            .await
            .map_err(|e| api_error("GetJob", e))?;

        output
            .job()
            .and_then(|job| job.summary())
            .map(to_summary)
            .ok_or_else(|| missing_field("GetJob", "job.summary"))
    }
}

//! Error types for amplify_release operations.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use crate::platform::JobStatus;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for amplify_release operations
pub type Result<T> = std::result::Result<T, DeployError>;

/// Main error type for a deploy invocation
#[derive(Error, Debug)]
pub enum DeployError {
    /// Request or argument validation errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Submitting the release job failed
    #[error("failed to start job: {source}")]
    StartJob {
        /// Underlying API error
        #[source]
        source: PlatformError,
    },

    /// Querying the job status failed
    #[error("failed to get job {job_id}: {source}")]
    GetJob {
        /// Job being observed
        job_id: String,
        /// Underlying API error
        #[source]
        source: PlatformError,
    },

    /// The job reached the FAILED status
    #[error("job failed (job {job_id})")]
    JobFailed {
        /// Failed job
        job_id: String,
    },

    /// The job stopped in a status that is neither success nor failure
    #[error("unexpected job status: {status} (job {job_id})")]
    UnexpectedStatus {
        /// Observed job
        job_id: String,
        /// Terminal status reported by the platform
        status: JobStatus,
    },

    /// The observation window elapsed before the job finished
    #[error("deadline exceeded: job {job_id} did not finish within {timeout:?}")]
    DeadlineExceeded {
        /// Observed job
        job_id: String,
        /// Observation window that elapsed
        timeout: Duration,
    },

    /// The background observer stopped without producing an outcome
    #[error("job observer stopped unexpectedly: {reason}")]
    ObserverLost {
        /// Join error description
        reason: String,
    },

    /// Platform client could not be initialised
    #[error("failed to initialize client: {0}")]
    Client(#[source] PlatformError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by the remote job API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// API call failed (transport, auth, throttling, service error)
    #[error("{operation} request failed: {message}")]
    Api {
        /// API operation name
        operation: String,
        /// Error description including the SDK error chain
        message: String,
    },

    /// Response did not carry a field the caller needs
    #[error("{operation} response is missing {field}")]
    MissingField {
        /// API operation name
        operation: String,
        /// Missing field
        field: String,
    },
}

/// Invalid deploy configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Missing required value
    #[error("Missing required argument: {argument}")]
    MissingArgument {
        /// Argument name
        argument: String,
    },

    /// Duration that must be positive was zero
    #[error("{argument} must be greater than zero")]
    ZeroDuration {
        /// Argument name
        argument: String,
    },
}

impl DeployError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            DeployError::Config(ConfigError::MissingArgument { argument }) => vec![format!(
                "Pass --{} or set the matching AMPLIFY_* environment variable",
                argument
            )],
            DeployError::Config(ConfigError::ZeroDuration { argument }) => vec![format!(
                "Use a positive duration for --{}, e.g. 5s or 1m30s",
                argument
            )],
            DeployError::StartJob { .. } | DeployError::Client(_) => vec![
                "Verify AWS credentials: aws sts get-caller-identity".to_string(),
                "Check the app id and branch name in the Amplify console".to_string(),
                "Set --region or AWS_REGION to the app's region".to_string(),
            ],
            DeployError::DeadlineExceeded { .. } => vec![
                "Increase --observation-timeout".to_string(),
                "The job keeps running remotely; check it in the Amplify console".to_string(),
            ],
            DeployError::JobFailed { .. } => {
                vec!["Inspect the job logs in the Amplify console".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

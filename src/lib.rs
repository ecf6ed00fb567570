//! # Amplify Release
//!
//! Trigger a release job on AWS Amplify and block until it finishes, so a CI
//! pipeline can gate on the outcome of a hosted deployment.
//!
//! One invocation is one stateless cycle: start the job, poll its status at a
//! fixed interval from a background task, and resolve to success, failure or
//! timeout. Nothing is retried and nothing is persisted.
//!
//! ## Usage
//!
//! ```bash
//! amplify_release deploy --app-id=d1a2b3
//! amplify_release deploy --app-id=d1a2b3 --branch-name=staging --observation-timeout=10m
//! amplify_release version
//! ```
//!
//! ## Library
//!
//! [`Deployer`] works with any [`ReleaseJobs`] implementation, which keeps the
//! orchestration testable without AWS:
//!
//! ```no_run
//! # async fn example() -> amplify_release::Result<()> {
//! use amplify_release::{AmplifyJobs, ClientOptions, DeployRequest, Deployer};
//!
//! let jobs = AmplifyJobs::connect(&ClientOptions::default())
//!     .await
//!     .map_err(amplify_release::DeployError::Client)?;
//! let summary = Deployer::new(jobs).deploy(&DeployRequest::new("d1a2b3")).await?;
//! println!("job {} succeeded", summary.job_id);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod deploy;
pub mod error;
pub mod platform;

pub use cli::{Args, build_version};
pub use deploy::{DeployRequest, Deployer};
pub use error::{ConfigError, DeployError, PlatformError, Result};
pub use platform::{AmplifyJobs, ClientOptions, JobStatus, JobSummary, JobType, ReleaseJobs};

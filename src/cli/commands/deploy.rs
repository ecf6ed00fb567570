//! Deploy command implementation.

use crate::cli::{DeployArgs, OutputManager};
use crate::deploy::Deployer;
use crate::error::{DeployError, Result};
use crate::platform::AmplifyJobs;

/// Execute deploy command
pub(super) async fn execute_deploy(args: &DeployArgs, output: &OutputManager) -> Result<()> {
    let request = args.to_request();
    // Reject bad input before touching the AWS configuration chain.
    request.validate()?;

    let jobs = AmplifyJobs::connect(&args.client_options())
        .await
        .map_err(DeployError::Client)?;

    output.progress(&format!(
        "Releasing {} branch '{}' (timeout {:?}, polling every {:?})",
        request.app_id,
        request.branch_name,
        request.observation_timeout,
        request.observation_interval
    ))?;

    let summary = Deployer::new(jobs).deploy(&request).await?;

    output.success(&format!("Job {} succeeded", summary.job_id))?;
    Ok(())
}

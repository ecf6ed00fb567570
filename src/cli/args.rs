//! Command line argument parsing.
//!
//! Every deploy flag can also come from an `AMPLIFY_*` environment variable so
//! CI pipelines can configure the tool without long command lines.

use super::duration::parse_duration;
use crate::deploy::{DEFAULT_BRANCH_NAME, DeployRequest};
use crate::platform::ClientOptions;
use clap::{Parser, Subcommand};
use std::time::Duration;

/// Trigger an Amplify release job and wait for it to finish
#[derive(Parser, Debug)]
#[command(
    name = "amplify_release",
    version,
    about = "Trigger an Amplify release job and wait for it to finish",
    long_about = "Start a RELEASE job for an Amplify app branch and block until it succeeds,
fails or the observation window closes. Exits 0 on success and 1 on any error.

Usage:
  amplify_release deploy --app-id=d1a2b3
  amplify_release deploy --app-id=d1a2b3 --branch-name=staging --observation-timeout=10m
  amplify_release version"
)]
pub struct Args {
    /// Suppress progress output (errors are still printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start a release job and wait until it finishes
    Deploy(DeployArgs),

    /// Print the build version
    Version,
}

impl Command {
    /// Command name for messages
    pub fn name(&self) -> &'static str {
        match self {
            Command::Deploy(_) => "deploy",
            Command::Version => "version",
        }
    }
}

/// Arguments of the `deploy` command
#[derive(clap::Args, Debug, Clone)]
pub struct DeployArgs {
    /// Amplify app id
    #[arg(long, env = "AMPLIFY_APP_ID", value_name = "APP_ID")]
    pub app_id: String,

    /// Branch to release
    #[arg(long, env = "AMPLIFY_BRANCH_NAME", default_value = DEFAULT_BRANCH_NAME)]
    pub branch_name: String,

    /// Time allowed for the job to finish (e.g. 5m, 1m30s)
    #[arg(
        long,
        env = "AMPLIFY_OBSERVATION_TIMEOUT",
        default_value = "5m",
        value_parser = parse_duration
    )]
    pub observation_timeout: Duration,

    /// Delay between status checks (e.g. 5s, 500ms)
    #[arg(
        long,
        env = "AMPLIFY_OBSERVATION_INTERVAL",
        default_value = "5s",
        value_parser = parse_duration
    )]
    pub observation_interval: Duration,

    /// AWS profile to load credentials from
    #[arg(long)]
    pub profile: Option<String>,

    /// AWS region of the app
    #[arg(long)]
    pub region: Option<String>,
}

impl Args {
    /// Parse command line arguments, returning clap's error instead of exiting
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

impl DeployArgs {
    /// Deploy request described by these arguments
    pub fn to_request(&self) -> DeployRequest {
        DeployRequest::new(self.app_id.clone())
            .with_branch_name(self.branch_name.clone())
            .with_observation_timeout(self.observation_timeout)
            .with_observation_interval(self.observation_interval)
    }

    /// AWS configuration overrides
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            profile: self.profile.clone(),
            region: self.region.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_defaults() {
        let args = Args::try_parse_from(["amplify_release", "deploy", "--app-id=d1a2b3"])
            .expect("valid arguments");
        let Command::Deploy(deploy) = args.command else {
            panic!("expected deploy command");
        };

        let request = deploy.to_request();
        assert_eq!(request, DeployRequest::new("d1a2b3"));
        assert!(deploy.client_options().profile.is_none());
    }

    #[test]
    fn test_duration_defaults_match_request_defaults() {
        use crate::deploy::{DEFAULT_OBSERVATION_INTERVAL, DEFAULT_OBSERVATION_TIMEOUT};

        let args = Args::try_parse_from(["amplify_release", "deploy", "--app-id=d1a2b3"])
            .expect("valid arguments");
        let Command::Deploy(deploy) = args.command else {
            panic!("expected deploy command");
        };

        assert_eq!(deploy.branch_name, DEFAULT_BRANCH_NAME);
        assert_eq!(deploy.observation_timeout, DEFAULT_OBSERVATION_TIMEOUT);
        assert_eq!(deploy.observation_interval, DEFAULT_OBSERVATION_INTERVAL);
    }

    #[test]
    fn test_deploy_overrides() {
        let args = Args::try_parse_from([
            "amplify_release",
            "deploy",
            "--app-id",
            "d1a2b3",
            "--branch-name=staging",
            "--observation-timeout=1m30s",
            "--observation-interval=500ms",
            "--region=eu-west-1",
        ])
        .expect("valid arguments");
        let Command::Deploy(deploy) = args.command else {
            panic!("expected deploy command");
        };

        assert_eq!(deploy.branch_name, "staging");
        assert_eq!(deploy.observation_timeout, Duration::from_secs(90));
        assert_eq!(deploy.observation_interval, Duration::from_millis(500));
        assert_eq!(deploy.client_options().region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_bad_duration_is_rejected() {
        let result = Args::try_parse_from([
            "amplify_release",
            "deploy",
            "--app-id=d1a2b3",
            "--observation-interval=soon",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_version_command() {
        let args = Args::try_parse_from(["amplify_release", "version"]).expect("valid arguments");
        assert_eq!(args.command.name(), "version");
    }
}

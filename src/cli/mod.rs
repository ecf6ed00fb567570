//! Command line interface for amplify_release.
//!
//! Parses arguments, runs the selected command and turns its outcome into a
//! process exit code: 0 on success, 1 on any error.

mod args;
pub mod commands;
mod duration;
mod output;

pub use args::{Args, Command, DeployArgs};
pub use commands::{build_version, execute_command};
pub use duration::parse_duration;
pub use output::OutputManager;

use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported through the same error path
            let exit_code = if e.use_stderr() { 1 } else { 0 };
            e.print()?;
            return Ok(exit_code);
        }
    };
    execute_command(args).await
}

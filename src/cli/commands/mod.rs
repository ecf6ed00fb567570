//! Command execution.

mod deploy;
mod version;

pub use version::build_version;

use crate::cli::{Args, Command, OutputManager};
use crate::error::Result;

use deploy::execute_deploy;
use version::execute_version;

/// Execute the parsed command and return the process exit code
pub async fn execute_command(args: Args) -> Result<i32> {
    let output = OutputManager::new(args.quiet);

    let result = match &args.command {
        Command::Deploy(deploy_args) => execute_deploy(deploy_args, &output).await,
        Command::Version => execute_version(),
    };

    match result {
        Ok(()) => Ok(0),
        Err(e) => {
            log::debug!("Command '{}' failed: {:?}", args.command.name(), e);
            output.error(&e.to_string());

            if !output.is_quiet() {
                for suggestion in e.recovery_suggestions() {
                    output.error_detail(&format!("• {}", suggestion));
                }
            }

            Ok(1)
        }
    }
}

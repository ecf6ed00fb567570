//! Amplify Release - start an Amplify release job and wait for the outcome.
//!
//! Exits 0 when the job succeeds and 1 on any error, with the error on stderr.

use amplify_release::cli;
use amplify_release::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            let output = OutputManager::new(false);
            output.error(&format!("Fatal error: {e}"));

            for suggestion in e.recovery_suggestions() {
                output.error_detail(&suggestion);
            }

            process::exit(1);
        }
    }
}

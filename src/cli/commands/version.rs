//! Version command implementation.

use crate::error::Result;

/// Version string baked in at build time, or `unknown`
pub fn build_version() -> &'static str {
    option_env!("CARGO_PKG_VERSION")
        .filter(|version| !version.is_empty())
        .unwrap_or("unknown")
}

/// Execute version command
pub(super) fn execute_version() -> Result<()> {
    println!("{}", build_version());
    Ok(())
}

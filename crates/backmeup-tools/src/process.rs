//! Shared subprocess plumbing for the tool adapters

use anyhow::{bail, Context, Result};
use tokio::process::Command;
use tracing::debug;

/// Runs a prepared command to completion and checks its exit status
///
/// `what` names the invocation for error messages (e.g. "zip",
/// "gpg --encrypt"). On a non-zero exit the error carries the tool's
/// trimmed stderr.
pub(crate) async fn run_tool(command: &mut Command, what: &str) -> Result<()> {
    let output = command
        .output()
        .await
        .with_context(|| format!("failed to run {what}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("{what} exited with {}: {}", output.status, stderr.trim());
    }

    debug!(tool = what, "tool run completed");
    Ok(())
}

//! Generator dispatch
//!
//! Composed commands run through the platform shell from the workspace
//! root, exactly as typed into a terminal. The child inherits stdio so
//! the generator's own prompts and progress stay visible, and the exit
//! status is awaited rather than fire-and-forget.

use camino::Utf8Path;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Executable name of the Angular CLI
pub const NG_COMMAND: &str = "ng";

/// Verify the Angular CLI is on PATH.
pub fn check_ng_available() -> Result<()> {
    if which::which(NG_COMMAND).is_err() {
        return Err(Error::NgNotFound);
    }
    Ok(())
}

/// Run a composed command through the platform shell and await it.
///
/// # Arguments
/// * `command` - Full command line, dispatched verbatim
/// * `cwd` - Working directory, normally the workspace root
///
/// # Errors
/// Returns an error if the shell cannot be spawned or the command exits
/// non-zero.
pub async fn run_in_shell(command: &str, cwd: &Utf8Path) -> Result<()> {
    debug!("Dispatching in {}: {}", cwd, command);

    let mut cmd = shell_command(command);
    cmd.current_dir(cwd);
    let status = cmd.status().await?;

    if !status.success() {
        return Err(Error::generator_failed(status.code().unwrap_or(-1)));
    }
    Ok(())
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

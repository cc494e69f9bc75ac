//! External command execution.
//!
//! The dispatcher only ever talks to [`LocalCommandRunner`], so its logic can
//! be exercised without launching an editor. [`ShellRunner`] is the real
//! implementation: it hands the command line to the host shell, waits for it,
//! and captures stdout, stderr and the exit status.

use std::process::Stdio;
use tokio::process::Command;
use vs_core::prelude::*;

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            code,
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Run an external command line and report how it went.
///
/// Spawn failures are `Err`; a command that ran and exited non-zero is an
/// `Ok` output with `success == false`.
#[trait_variant::make(CommandRunner: Send)]
pub trait LocalCommandRunner {
    async fn run(&self, command_line: &str) -> Result<CommandOutput>;
}

/// Runs command lines through `sh -c` (or `cmd /C` on Windows)
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    async fn run(&self, command_line: &str) -> Result<CommandOutput> {
        debug!("Spawning: {}", command_line);

        let output = shell_command(command_line)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                error!("Failed to spawn shell for {:?}: {}", command_line, e);
                Error::process_spawn(e.to_string())
            })?;

        let result = CommandOutput {
            code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        debug!(
            "Command finished: success={}, code={:?}",
            result.success, result.code
        );
        Ok(result)
    }
}

#[cfg(not(windows))]
fn shell_command(command_line: &str) -> Command {
    let mut command = Command::new("sh");
    command.arg("-c").arg(command_line);
    command
}

#[cfg(windows)]
fn shell_command(command_line: &str) -> Command {
    // `/s` makes cmd strip exactly the outer quotes we add, leaving the
    // per-path quoting intact.
    let mut command = Command::new("cmd");
    command
        .args(["/d", "/s", "/c"])
        .raw_arg(format!("\"{}\"", command_line));
    command
}

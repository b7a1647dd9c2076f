//! Executors that act on the real system

use async_trait::async_trait;
use shopctl_core::{CommandSpec, Error, Output, Result};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, info};

use crate::Executor;

/// Spawns each spec as a child process and waits for it
///
/// stdin and stderr are shared with the dispatcher so interactive shells
/// and streamed logs behave as if the tool were run directly. An operator
/// interrupt reaches the child through the terminal's process group.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    /// Create a new system executor
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Executor for SystemExecutor {
    async fn run(&self, spec: &CommandSpec) -> Result<i32> {
        info!("▶ {}", spec);

        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &spec.cwd {
            command.current_dir(dir);
        }

        match &spec.stdout {
            Output::Inherit => {
                command.stdout(Stdio::inherit());
            }
            Output::File(path) => {
                debug!(path = %path.display(), "Redirecting stdout");
                let file = tokio::fs::File::create(path).await?.into_std().await;
                command.stdout(Stdio::from(file));
            }
        }

        let status = match command.status().await {
            Ok(status) => status,
            Err(source) => {
                // Nothing ran; drop the empty redirect target
                if let Output::File(path) = &spec.stdout {
                    let _ = tokio::fs::remove_file(path).await;
                }
                return Err(Error::Spawn {
                    program: spec.program.clone(),
                    source,
                });
            }
        };

        let code = exit_code(status);
        debug!(command = %spec, exit_code = code, "Command finished");

        Ok(code)
    }
}

/// Exit code of a finished child
///
/// Processes killed by a signal report `128 + signal`, as a shell would.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

/// Prints each spec instead of running it
///
/// Every command "succeeds", so multi-step commands print their full
/// sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunExecutor;

impl DryRunExecutor {
    /// Create a new dry-run executor
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Executor for DryRunExecutor {
    async fn run(&self, spec: &CommandSpec) -> Result<i32> {
        println!("{spec}");
        Ok(0)
    }
}

// src/exec/runner.rs

use std::process::Stdio;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::exec::outcome::{ExecError, ProcessOutcome, RunResult};
use crate::exec::spec::CommandSpec;

/// Launches a group of commands concurrently and joins on all of them.
///
/// Every command is spawned before the first one is awaited, so nothing is
/// serialized; the result vector is index-aligned with the submitted specs
/// regardless of the order the processes actually finish in.
#[derive(Debug, Clone, Default)]
pub struct GroupRunner {
    deadline: Option<Duration>,
}

impl GroupRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Kill any command still running after `limit` and record a timeout
    /// outcome on its entry. Without a deadline the runner waits forever.
    pub fn with_deadline(mut self, limit: Duration) -> Self {
        self.deadline = Some(limit);
        self
    }

    /// Run all commands to completion and collect one outcome per command.
    ///
    /// Per-command failures (launch errors, non-zero exits, signals,
    /// deadline kills) are recorded as data on the matching entry and never
    /// abort the siblings. An `Err` from this function means the harness
    /// itself failed; in that case no partial result is returned.
    pub async fn run(&self, specs: Vec<CommandSpec>) -> Result<RunResult> {
        info!(commands = specs.len(), "launching process group");

        let handles: Vec<JoinHandle<Result<ProcessOutcome>>> = specs
            .into_iter()
            .map(|spec| {
                let deadline = self.deadline;
                tokio::spawn(run_command(spec, deadline))
            })
            .collect();

        // Join-all barrier. Awaiting in submission order keeps the result
        // index-aligned; it does not serialize anything, every process is
        // already running.
        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            let outcome = handle.await.context("joining process task")??;
            outcomes.push(outcome);
        }

        Ok(RunResult::new(outcomes))
    }
}

/// Run a single command to its terminal state.
///
/// Returns `Err` only for harness-level faults (wait/kill syscalls failing);
/// everything the process itself does wrong ends up in the outcome.
async fn run_command(spec: CommandSpec, deadline: Option<Duration>) -> Result<ProcessOutcome> {
    info!(command = %spec, "starting process");

    let mut cmd = Command::new(spec.program());
    cmd.args(spec.args())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if let Some(dir) = spec.cwd() {
        cmd.current_dir(dir);
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            warn!(command = %spec, error = %err, "failed to launch");
            return Ok(ProcessOutcome::launch_failed(err));
        }
    };

    // Drain both pipes while the process runs so it can never block on a
    // full pipe buffer.
    let stdout_handle = spawn_drain(child.stdout.take());
    let stderr_handle = spawn_drain(child.stderr.take());

    let (exit_code, error) = match deadline {
        Some(limit) => match timeout(limit, child.wait()).await {
            Ok(status) => wait_disposition(
                status.with_context(|| format!("waiting for `{spec}`"))?,
            ),
            Err(_) => {
                warn!(command = %spec, limit = ?limit, "deadline exceeded, killing process");
                child
                    .kill()
                    .await
                    .with_context(|| format!("killing `{spec}` after deadline"))?;
                (None, Some(ExecError::DeadlineExceeded(limit)))
            }
        },
        None => wait_disposition(
            child
                .wait()
                .await
                .with_context(|| format!("waiting for `{spec}`"))?,
        ),
    };

    // The pipes are closed once the process is gone, so both drains finish.
    let stdout = stdout_handle.await.context("joining stdout drain task")?;
    let stderr = stderr_handle.await.context("joining stderr drain task")?;

    info!(
        command = %spec,
        exit_code = ?exit_code,
        stdout_bytes = stdout.len(),
        stderr_bytes = stderr.len(),
        "process finished"
    );

    Ok(ProcessOutcome {
        exit_code,
        stdout,
        stderr,
        error,
    })
}

/// Read a pipe to the end in a background task, returning everything
/// captured. A read error ends the capture with whatever arrived before it.
fn spawn_drain<R>(pipe: Option<R>) -> JoinHandle<Vec<u8>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            if let Err(err) = pipe.read_to_end(&mut buf).await {
                debug!(error = %err, "pipe read ended early");
            }
        }
        buf
    })
}

fn wait_disposition(status: std::process::ExitStatus) -> (Option<i32>, Option<ExecError>) {
    match status.code() {
        Some(code) => (Some(code), None),
        None => (None, signal_error(&status)),
    }
}

#[cfg(unix)]
fn signal_error(status: &std::process::ExitStatus) -> Option<ExecError> {
    use std::os::unix::process::ExitStatusExt;
    status.signal().map(ExecError::Signaled)
}

#[cfg(not(unix))]
fn signal_error(_status: &std::process::ExitStatus) -> Option<ExecError> {
    None
}

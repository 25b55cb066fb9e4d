// src/exec/outcome.rs

use std::time::Duration;

use thiserror::Error;

/// Abnormal end of a single dispatched command.
///
/// A non-zero exit code is *not* in this taxonomy: the harness records it in
/// [`ProcessOutcome::exit_code`] and lets the caller decide what it means.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The process never started (executable missing, permission denied).
    #[error("failed to launch: {0}")]
    Launch(#[source] std::io::Error),

    /// The process was killed by a signal (unix).
    #[error("killed by signal {0}")]
    Signaled(i32),

    /// The process outlived the deadline and was forcibly killed.
    #[error("timed out after {0:?}")]
    DeadlineExceeded(Duration),
}

/// Terminal result of one dispatched external process.
///
/// Owned solely by the [`RunResult`] returned to the caller; nothing
/// persists across runs.
#[derive(Debug)]
pub struct ProcessOutcome {
    /// Exit code when the process ran to a normal end; `None` when it never
    /// launched, died to a signal, or was deadline-killed (see `error`).
    pub exit_code: Option<i32>,

    /// Captured standard output, complete up to process exit (or the kill).
    pub stdout: Vec<u8>,

    /// Captured standard error, same coverage as `stdout`.
    pub stderr: Vec<u8>,

    /// Launch or runtime error, when the command did not end normally.
    pub error: Option<ExecError>,
}

impl ProcessOutcome {
    pub(crate) fn launch_failed(err: std::io::Error) -> Self {
        Self {
            exit_code: None,
            stdout: Vec::new(),
            stderr: Vec::new(),
            error: Some(ExecError::Launch(err)),
        }
    }

    /// True when the process exited with code 0.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// True when the process was started and awaited to a natural end.
    ///
    /// Signal deaths count (the process ran; the outcome is data). Launch
    /// failures and deadline kills do not.
    pub fn launched_and_awaited(&self) -> bool {
        !matches!(
            self.error,
            Some(ExecError::Launch(_)) | Some(ExecError::DeadlineExceeded(_))
        )
    }
}

/// Ordered aggregate of one run: one [`ProcessOutcome`] per submitted
/// command, at the same index the command was submitted at.
///
/// A completed run always has exactly as many outcomes as there were
/// commands; the harness never silently drops an entry.
#[derive(Debug, Default)]
pub struct RunResult {
    outcomes: Vec<ProcessOutcome>,
}

impl RunResult {
    pub(crate) fn new(outcomes: Vec<ProcessOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessOutcome> {
        self.outcomes.iter()
    }

    pub fn outcomes(&self) -> &[ProcessOutcome] {
        &self.outcomes
    }

    /// True when every entry launched and was awaited to a natural end.
    pub fn all_launched(&self) -> bool {
        self.outcomes.iter().all(|o| o.launched_and_awaited())
    }

    pub fn into_outcomes(self) -> Vec<ProcessOutcome> {
        self.outcomes
    }
}

impl std::ops::Index<usize> for RunResult {
    type Output = ProcessOutcome;

    fn index(&self, index: usize) -> &Self::Output {
        &self.outcomes[index]
    }
}

// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for actually running external commands, using
//! `tokio::process::Command`, and collecting every outcome into one
//! index-aligned result.
//!
//! - [`spec`] defines [`CommandSpec`], the immutable unit of dispatch.
//! - [`outcome`] holds the per-process [`ProcessOutcome`] and the aggregate
//!   [`RunResult`].
//! - [`runner`] owns the fan-out/join logic: launch everything at once, drain
//!   the pipes while the processes run, wait on all of them.

pub mod outcome;
pub mod runner;
pub mod spec;

pub use outcome::{ExecError, ProcessOutcome, RunResult};
pub use runner::GroupRunner;
pub use spec::CommandSpec;

// src/errors.rs

//! Crate-wide error aliases.
//!
//! Harness-level faults travel as `anyhow` errors; per-command failures are
//! data on the [`crate::exec::ProcessOutcome`] they belong to, never errors.

pub use anyhow::{Error, Result};

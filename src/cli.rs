// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `fanrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fanrun",
    version,
    about = "Launch a group of commands concurrently, capture their output, join on all of them.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the run file (TOML).
    ///
    /// Default: `Fanrun.toml` in the current working directory.
    /// Mutually exclusive with `--cmd`.
    #[arg(long, value_name = "PATH", conflicts_with = "cmd")]
    pub config: Option<String>,

    /// A command line to run, split with shell-style word rules.
    ///
    /// May be given multiple times; the commands run concurrently and are
    /// reported in the order given. Bypasses the run file entirely.
    #[arg(long = "cmd", value_name = "LINE")]
    pub cmd: Vec<String>,

    /// Suppress captured stdout/stderr in the final report.
    ///
    /// Per-command status lines are always printed.
    #[arg(long)]
    pub quiet: bool,

    /// Kill commands still running after this long (e.g. "500ms", "30s").
    ///
    /// Overrides `defaults.timeout` from the run file. Without a deadline the
    /// harness waits for every command indefinitely.
    #[arg(long, value_name = "DURATION")]
    pub timeout: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `FANRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the run plan, but don't execute any commands.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

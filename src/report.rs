// src/report.rs

//! Aggregate reporting for a completed run.
//!
//! The report is the harness's only stdout output: one block per command in
//! submission order, printed only after every process has reached its
//! terminal state. Either the whole report is printed or (on a harness
//! fault) none of it, never a partial mix.

use crate::exec::{CommandSpec, ProcessOutcome, RunResult};

/// Print one status block per command, index-aligned with `specs`.
///
/// With `quiet` set, the captured streams are omitted and only the status
/// lines are printed.
pub fn print_report(specs: &[CommandSpec], result: &RunResult, quiet: bool) {
    for (spec, outcome) in specs.iter().zip(result.iter()) {
        println!("command: {spec}");
        println!("  status: {}", describe(outcome));

        if quiet {
            continue;
        }
        print_stream("stdout", &outcome.stdout);
        print_stream("stderr", &outcome.stderr);
    }
}

/// Harness exit code for a completed run.
///
/// `0` when every entry launched and was awaited to a natural end; the
/// individual exit codes are the caller's business and do not factor in.
/// `1` when some entry never launched or was killed at the deadline.
pub fn exit_code(result: &RunResult) -> i32 {
    if result.all_launched() { 0 } else { 1 }
}

fn describe(outcome: &ProcessOutcome) -> String {
    match (&outcome.error, outcome.exit_code) {
        (Some(err), _) => err.to_string(),
        (None, Some(code)) => format!("exit {code}"),
        // No code and no recorded error only happens off-unix.
        (None, None) => "ended abnormally".to_string(),
    }
}

fn print_stream(label: &str, bytes: &[u8]) {
    if bytes.is_empty() {
        return;
    }
    println!("  {label}:");
    for line in String::from_utf8_lossy(bytes).lines() {
        println!("    {line}");
    }
}

// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod report;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{default_config_path, load_and_validate, parse_duration};
use crate::exec::{CommandSpec, GroupRunner};

/// Everything needed to drive one run, resolved from the CLI and the run
/// file: the ordered command list plus report/deadline behaviour.
struct RunPlan {
    specs: Vec<CommandSpec>,
    quiet: bool,
    deadline: Option<Duration>,
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - run-file loading (or `--cmd` command lines)
/// - the group runner
/// - the final report
///
/// Returns the harness exit code: 0 when every command launched and was
/// awaited, 1 when some entry never ran to a natural end. Harness faults
/// surface as `Err`.
pub async fn run(args: CliArgs) -> Result<i32> {
    let plan = build_plan(&args)?;

    if args.dry_run {
        print_dry_run(&plan);
        return Ok(0);
    }

    let mut runner = GroupRunner::new();
    if let Some(limit) = plan.deadline {
        runner = runner.with_deadline(limit);
    }

    let result = runner.run(plan.specs.clone()).await?;
    report::print_report(&plan.specs, &result, plan.quiet);

    Ok(report::exit_code(&result))
}

/// Resolve the run plan: `--cmd` lines win outright, otherwise the run file
/// (explicit `--config` path or `Fanrun.toml`).
fn build_plan(args: &CliArgs) -> Result<RunPlan> {
    if !args.cmd.is_empty() {
        let specs = args
            .cmd
            .iter()
            .map(|line| CommandSpec::from_line(line))
            .collect::<Result<Vec<_>>>()?;

        return Ok(RunPlan {
            specs,
            quiet: args.quiet,
            deadline: cli_deadline(args)?,
        });
    }

    let path = args
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);
    debug!(path = ?path, "loading run file");

    let cfg = load_and_validate(&path)?;

    let mut specs = Vec::with_capacity(cfg.command.len());
    for command in &cfg.command {
        let mut spec = CommandSpec::new(command.argv.clone())?;
        if let Some(ref dir) = command.cwd {
            spec = spec.with_cwd(dir);
        }
        specs.push(spec);
    }

    let deadline = match cli_deadline(args)? {
        Some(limit) => Some(limit),
        None => cfg
            .defaults
            .timeout
            .as_deref()
            .map(|s| parse_duration(s).map_err(|e| anyhow!(e)))
            .transpose()
            .context("invalid [defaults].timeout")?,
    };

    Ok(RunPlan {
        specs,
        quiet: args.quiet || cfg.defaults.quiet,
        deadline,
    })
}

fn cli_deadline(args: &CliArgs) -> Result<Option<Duration>> {
    args.timeout
        .as_deref()
        .map(|s| parse_duration(s).map_err(|e| anyhow!(e)))
        .transpose()
        .context("invalid --timeout")
}

/// Simple dry-run output: print the resolved plan without executing.
fn print_dry_run(plan: &RunPlan) {
    println!("fanrun dry-run");
    if let Some(limit) = plan.deadline {
        println!("  timeout = {limit:?}");
    }
    println!("  quiet = {}", plan.quiet);
    println!();

    println!("commands ({}):", plan.specs.len());
    for spec in &plan.specs {
        println!("  - {spec}");
        if let Some(dir) = spec.cwd() {
            println!("      cwd: {}", dir.display());
        }
    }
}

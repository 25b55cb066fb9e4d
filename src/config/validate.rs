// src/config/validate.rs

use anyhow::{Context, Result, anyhow};

use crate::config::model::{ConfigFile, parse_duration};

/// Run basic semantic validation against a loaded run file.
///
/// This checks:
/// - there is at least one `[[command]]`
/// - every command has a non-empty `argv`
/// - no command has an empty program token
/// - `defaults.timeout`, if set, is a parseable duration
///
/// It does **not** check that the executables exist or are runnable: the
/// harness launches them blind, and a missing executable is recorded as that
/// entry's launch failure at run time.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    ensure_has_commands(cfg)?;
    validate_command_argvs(cfg)?;
    validate_defaults(cfg)?;
    Ok(())
}

fn ensure_has_commands(cfg: &ConfigFile) -> Result<()> {
    if cfg.command.is_empty() {
        return Err(anyhow!(
            "run file must contain at least one [[command]] section"
        ));
    }
    Ok(())
}

fn validate_command_argvs(cfg: &ConfigFile) -> Result<()> {
    for (index, command) in cfg.command.iter().enumerate() {
        if command.argv.is_empty() {
            return Err(anyhow!(
                "command #{} has an empty `argv`; expected at least an executable",
                index + 1
            ));
        }
        if command.argv[0].is_empty() {
            return Err(anyhow!(
                "command #{} has an empty program token in `argv`",
                index + 1
            ));
        }
    }
    Ok(())
}

fn validate_defaults(cfg: &ConfigFile) -> Result<()> {
    if let Some(ref timeout) = cfg.defaults.timeout {
        parse_duration(timeout)
            .map_err(|e| anyhow!(e))
            .context("invalid [defaults].timeout")?;
    }
    Ok(())
}

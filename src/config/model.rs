// src/config/model.rs

use std::time::Duration;

use serde::Deserialize;

/// Top-level run file as read from TOML.
///
/// ```toml
/// [defaults]
/// quiet = false
/// timeout = "30s"
///
/// [[command]]
/// argv = ["./supervisor"]
///
/// [[command]]
/// argv = ["./generator", "0-1", "0-2", "1-2", "0-3"]
/// cwd = "work"
/// ```
///
/// `[[command]]` is an array of tables: the file order is the submission
/// order, and the final report is index-aligned with it.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// Run-wide defaults from `[defaults]`.
    #[serde(default)]
    pub defaults: DefaultSection,

    /// All commands from `[[command]]`, in file order.
    #[serde(default)]
    pub command: Vec<CommandConfig>,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DefaultSection {
    /// Suppress captured stdout/stderr in the final report.
    #[serde(default)]
    pub quiet: bool,

    /// Deadline applied to every command (e.g. `"30s"`, `"500ms"`).
    ///
    /// Commands still running after this long are killed and recorded with a
    /// timeout outcome. `None` means wait indefinitely.
    #[serde(default)]
    pub timeout: Option<String>,
}

/// One `[[command]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandConfig {
    /// Executable and arguments, one token per element.
    ///
    /// The first token is resolved relative to the working directory or on
    /// `PATH` at launch time; a missing executable surfaces as a launch
    /// failure on this entry, not as a config error.
    pub argv: Vec<String>,

    /// Working directory for this command.
    ///
    /// Relative paths are resolved against the harness's own working
    /// directory. If `None`, the command inherits it.
    #[serde(default)]
    pub cwd: Option<String>,
}

/// Parse a simple duration string like `"3s"`, `"250ms"`, `"1m"`, `"2h"`.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    // Find the boundary between digits and suffix.
    let idx = s
        .chars()
        .position(|c| !c.is_ascii_digit())
        .ok_or_else(|| "duration missing unit suffix".to_string())?;

    let (num_part, unit_part) = s.split_at(idx);
    let value: u64 = num_part
        .parse()
        .map_err(|e| format!("invalid duration number '{}': {}", num_part, e))?;
    let unit = unit_part.trim().to_lowercase();

    match unit.as_str() {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        "m" => Ok(Duration::from_secs(value * 60)),
        "h" => Ok(Duration::from_secs(value * 60 * 60)),
        _ => Err(format!(
            "unsupported duration unit '{}'; expected ms, s, m, or h",
            unit
        )),
    }
}

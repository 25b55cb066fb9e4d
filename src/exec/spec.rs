// src/exec/spec.rs

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};

/// An executable path plus its argument list, as a unit of dispatch.
///
/// Immutable once constructed. The first token names the executable; it is
/// resolved relative to the working directory or on `PATH` only at launch
/// time, so a `CommandSpec` for a missing program is perfectly valid here
/// and fails on its own entry when run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    tokens: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Build a spec from ordered tokens (executable first).
    ///
    /// Rejects an empty token list and an empty program token.
    pub fn new<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();

        if tokens.is_empty() {
            return Err(anyhow!("command must have at least one token"));
        }
        if tokens[0].is_empty() {
            return Err(anyhow!("command has an empty program token"));
        }

        Ok(Self { tokens, cwd: None })
    }

    /// Build a spec from a single command line using shell-style word
    /// splitting (quotes and escapes respected, nothing is executed through
    /// a shell).
    pub fn from_line(line: &str) -> Result<Self> {
        let tokens = shell_words::split(line)
            .map_err(|e| anyhow!("splitting command line {:?}: {}", line, e))?;
        Self::new(tokens)
    }

    /// Set the working directory the command launches in.
    pub fn with_cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// The executable token.
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    /// The argument tokens (everything after the executable).
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    /// All tokens, executable included.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Working directory override, if any.
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_words::join(&self.tokens))
    }
}
